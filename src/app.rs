//! Duka Frontend App
//!
//! Root component: owns the store, the reload trigger, and the fetch cycle.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{ItemFormModal, ItemList};
use crate::context::AppContext;
use crate::store::{store_open_creator, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));

    // Fetch items on mount and after every successful mutation.
    // A failed fetch keeps the previous render.
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Loading items, trigger={}", trigger).into());
        spawn_local(async move {
            match api::list_items().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} items", loaded.len()).into());
                    store.items().set(loaded);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[API] list items failed: {err}").into())
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <header class="toolbar">
                <h1>"Duka"</h1>
                <button class="btn btn-primary" on:click=move |_| store_open_creator(&store)>
                    "Add item"
                </button>
            </header>

            <main class="main-content">
                <ItemList />
                <p class="item-count">
                    {move || format!("{} items", store.items().get().len())}
                </p>
            </main>

            <ItemFormModal />
        </div>
    }
}
