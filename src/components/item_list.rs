//! Item List Component
//!
//! Renders the fetched items as cards, in server order.

use leptos::prelude::*;

use crate::components::ItemCard;
use crate::store::{use_app_store, AppStateStoreFields};

/// Card list renderer
#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="item-list" id="item-list">
            <For
                each=move || store.items().get()
                key=|item| {
                    // Key on every displayed field so an edited item is rebuilt
                    (
                        item.id,
                        item.name.clone(),
                        item.price.to_bits(),
                        item.image.clone(),
                        item.category.clone(),
                    )
                }
                children=move |item| {
                    view! { <ItemCard item=item /> }
                }
            />
        </div>
    }
}
