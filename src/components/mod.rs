//! UI Components
//!
//! Reusable Leptos components.

mod category_select;
mod item_card;
mod item_form_modal;
mod item_list;

pub use category_select::{CategorySelect, CATEGORIES, DEFAULT_CATEGORY};
pub use item_card::ItemCard;
pub use item_form_modal::ItemFormModal;
pub use item_list::ItemList;
