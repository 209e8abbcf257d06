//! Item Form Modal Component
//!
//! Shared create/edit form hosted in a modal dialog. Edit loads an item into
//! the fields; submit maps to create or update by id presence; dismissing
//! without submitting resets the form and the "Add item" title.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::category_select::{CategorySelect, DEFAULT_CATEGORY};
use crate::context::AppContext;
use crate::form::{ItemForm, Submission};
use crate::store::{store_close_editor, use_app_store, AppStateStoreFields};

/// Modal dialog owning the item form
#[component]
pub fn ItemFormModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (item_id, set_item_id) = signal::<Option<u32>>(None);
    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (image, set_image) = signal(String::new());
    let (category, set_category) = signal(String::from(DEFAULT_CATEGORY));

    // Populate every matching field when an edit target is loaded
    Effect::new(move |_| {
        if let Some(item) = store.editing().get() {
            set_item_id.set(Some(item.id));
            set_name.set(item.name.clone());
            set_price.set(item.price.to_string());
            set_image.set(item.image.clone());
            set_category.set(item.category.clone());
        }
    });

    let reset_form = move || {
        set_item_id.set(None);
        set_name.set(String::new());
        set_price.set(String::new());
        set_image.set(String::new());
        set_category.set(String::from(DEFAULT_CATEGORY));
    };

    // The hidden.bs.modal analog: dismissal resets form and title
    let close_modal = move || {
        reset_form();
        store_close_editor(&store);
    };

    let title = move || match store.editing().get() {
        Some(item) => format!("Edit {}", item.name),
        None => "Add item".to_string(),
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ItemForm {
            id: item_id.get(),
            name: name.get(),
            price: price.get(),
            image: image.get(),
            category: category.get(),
        };

        spawn_local(async move {
            let saved = match form.submission() {
                Submission::Create(fields) => api::create_item(&fields).await,
                Submission::Update(id, fields) => api::update_item(id, &fields).await,
            };
            match saved {
                Ok(_) => {
                    reset_form();
                    store_close_editor(&store);
                    ctx.reload();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[FORM] save failed: {err}").into())
                }
            }
        });
    };

    view! {
        {move || if store.modal_open().get() {
            view! {
                <div class="modal" id="item-form-modal">
                    <div class="modal-backdrop" on:click=move |_| close_modal()></div>
                    <div class="modal-dialog">
                        <div class="modal-header">
                            <h5 class="modal-title" id="item-form-modal-title">{title}</h5>
                            <button type="button" class="btn-close" on:click=move |_| close_modal()>
                                "×"
                            </button>
                        </div>
                        <form id="item-form" class="modal-body" on:submit=on_submit>
                            <input
                                type="hidden"
                                name="id"
                                prop:value=move || item_id.get().map(|id| id.to_string()).unwrap_or_default()
                            />

                            <label class="form-label">
                                "Name"
                                <input
                                    type="text"
                                    name="name"
                                    required=true
                                    prop:value=move || name.get()
                                    on:input=move |ev| {
                                        let target = ev.target().unwrap();
                                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                        set_name.set(input.value());
                                    }
                                />
                            </label>

                            <label class="form-label">
                                "Price"
                                <input
                                    type="number"
                                    name="price"
                                    step="0.01"
                                    required=true
                                    prop:value=move || price.get()
                                    on:input=move |ev| set_price.set(event_target_value(&ev))
                                />
                            </label>

                            <label class="form-label">
                                "Image URL"
                                <input
                                    type="url"
                                    name="image"
                                    prop:value=move || image.get()
                                    on:input=move |ev| {
                                        let target = ev.target().unwrap();
                                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                        set_image.set(input.value());
                                    }
                                />
                            </label>

                            <label class="form-label">
                                "Category"
                                <CategorySelect
                                    category=category
                                    on_change=move |value: String| set_category.set(value)
                                />
                            </label>

                            <button type="submit" class="btn btn-primary">
                                "Save item"
                            </button>
                        </form>
                    </div>
                </div>
            }.into_any()
        } else {
            view! { <div></div> }.into_any()
        }}
    }
}
