//! Category Select Component
//!
//! Fixed category option list for the item form.

use leptos::prelude::*;

/// Category options (value, label)
pub const CATEGORIES: &[(&str, &str)] = &[
    ("kitchen", "Kitchen"),
    ("electronics", "Electronics"),
    ("clothing", "Clothing"),
    ("outdoor", "Outdoor"),
];

/// Category the form starts on
pub const DEFAULT_CATEGORY: &str = "kitchen";

/// Select input for the item category
#[component]
pub fn CategorySelect(
    category: ReadSignal<String>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            name="category"
            class="form-select"
            prop:value=move || category.get()
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            {CATEGORIES.iter().map(|(value, label)| {
                let val = *value;
                view! {
                    <option value=val selected=move || category.get() == val>
                        {*label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
