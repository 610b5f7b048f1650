//! Goal List Component
//!
//! Cards newest-first, or an empty-state message.

use leptos::prelude::*;

use goal_core::{Goal, GoalId};

use crate::components::GoalCard;
use crate::context::AppContext;
use crate::store::{store_goals, store_is_empty};

#[component]
pub fn GoalList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="goals-list">
            <Show
                when=move || !store_is_empty(&ctx.store)
                fallback=|| view! {
                    <div class="empty-state">
                        <h2>"No goals yet"</h2>
                        <p>"Start by adding your first goal above!"</p>
                    </div>
                }
            >
                <For
                    each=move || store_goals(&ctx.store)
                    key=card_key
                    children=|goal| view! { <GoalCard goal=goal /> }
                />
            </Show>
        </div>
    }
}

/// Cards are keyed on what they display, so a changed goal gets a fresh card
fn card_key(goal: &Goal) -> (GoalId, u8, bool) {
    (goal.id.clone(), goal.progress, goal.completed)
}
