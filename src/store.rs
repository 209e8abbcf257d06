//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Item;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current item list; replaced wholesale on every refetch
    pub items: Vec<Item>,
    /// Item loaded into the form by Edit, None while creating
    pub editing: Option<Item>,
    /// Whether the form modal is visible
    pub modal_open: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Load an item into the form and show the modal
pub fn store_open_editor(store: &AppStore, item: Item) {
    store.editing().set(Some(item));
    store.modal_open().set(true);
}

/// Show the modal with an empty form
pub fn store_open_creator(store: &AppStore) {
    store.editing().set(None);
    store.modal_open().set(true);
}

/// Hide the modal and drop any edit target
pub fn store_close_editor(store: &AppStore) {
    store.editing().set(None);
    store.modal_open().set(false);
}
