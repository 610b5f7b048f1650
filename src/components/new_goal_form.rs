//! New Goal Form Component
//!
//! Title, description and category inputs. Cleared after a successful add.

use leptos::prelude::*;

use goal_core::Category;

use crate::components::CategorySelector;
use crate::context::AppContext;

#[component]
pub fn NewGoalForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (category, set_category) = signal(Category::default());

    let create_goal = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let created = ctx.create_goal(
            &title.get_untracked(),
            &description.get_untracked(),
            category.get_untracked(),
        );
        if created {
            set_title.set(String::new());
            set_description.set(String::new());
            set_category.set(Category::default());
        }
    };

    view! {
        <form class="add-goal-form" on:submit=create_goal>
            <h2>"Add New Goal"</h2>

            <div class="form-group">
                <label for="title">"Goal Title"</label>
                <input
                    id="title"
                    type="text"
                    placeholder="e.g., Learn TypeScript"
                    required=true
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="description">"Description"</label>
                <textarea
                    id="description"
                    placeholder="Describe your goal in detail..."
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-group">
                <label for="category">"Category"</label>
                <CategorySelector
                    category=category
                    on_change=move |selected| set_category.set(selected)
                />
            </div>

            <button type="submit" class="btn">"Add Goal"</button>
        </form>
    }
}
