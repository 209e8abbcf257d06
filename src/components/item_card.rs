//! Item Card Component
//!
//! One rendered card per catalog item, with Edit and Delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::format::format_price;
use crate::models::Item;
use crate::store::{store_open_editor, use_app_store};

/// Card view for a single item
#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = item.id;
    let delete_item = move |_| {
        web_sys::console::log_1(&format!("[CARD] Delete clicked for item {}", id).into());
        spawn_local(async move {
            match api::delete_item(id).await {
                Ok(()) => ctx.reload(),
                Err(err) => {
                    web_sys::console::error_1(&format!("[API] delete item {id} failed: {err}").into())
                }
            }
        });
    };

    let edit_source = item.clone();
    let edit_item = move |_| store_open_editor(&store, edit_source.clone());

    view! {
        <div class="card item">
            <img class="card-img-top" src=item.image.clone() alt=item.name.clone() height="200" />
            <div class="card-body">
                <h2 class="card-title">{item.name.clone()}</h2>
                <p class="card-text">{format_price(item.price)}</p>
                <button class="btn btn-primary mr-5" on:click=edit_item>
                    "Edit"
                </button>
                <button class="btn btn-danger" on:click=delete_item>
                    "Delete item"
                </button>
            </div>
        </div>
    }
}
