//! Category Selector Component
//!
//! `<select>` over the fixed goal categories.

use leptos::prelude::*;

use goal_core::Category;

#[component]
pub fn CategorySelector(
    category: ReadSignal<Category>,
    on_change: impl Fn(Category) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            id="category"
            on:change=move |ev| on_change(Category::parse_or_default(&event_target_value(&ev)))
        >
            {Category::ALL.into_iter().map(|option| {
                view! {
                    <option
                        value=option.as_str()
                        prop:selected=move || category.get() == option
                    >
                        {option.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
