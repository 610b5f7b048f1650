//! Goal Card Component
//!
//! One goal with its progress bar and actions.

use leptos::prelude::*;

use goal_core::Goal;

use crate::components::stats_panel::format_percent;
use crate::context::AppContext;

/// A single goal card. Rebuilt by the list whenever the goal changes.
#[component]
pub fn GoalCard(goal: Goal) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let step = ctx.config.progress_step;
    let completed = goal.completed;
    let progress = goal.progress;
    let description = goal.has_description().then(|| goal.description.clone());
    let toggle_id = goal.id.clone();
    let delete_id = goal.id.clone();

    // -/+ buttons only while the goal is open
    let progress_buttons = (!completed).then(|| {
        let decrement_id = goal.id.clone();
        let increment_id = goal.id.clone();
        view! {
            <button
                class="btn-small btn-progress"
                on:click=move |_| ctx.adjust_progress(&decrement_id, -step)
            >
                {format!("-{}%", step)}
            </button>
            <button
                class="btn-small btn-progress"
                on:click=move |_| ctx.adjust_progress(&increment_id, step)
            >
                {format!("+{}%", step)}
            </button>
        }
    });

    view! {
        <div class=card_class(completed)>
            <div class="goal-header">
                <h3 class="goal-title">{goal.title}</h3>
                <span class="goal-category">{goal.category.as_str()}</span>
            </div>

            {description.map(|text| view! { <p class="goal-description">{text}</p> })}

            <div class="goal-progress">
                <div class="progress-label">
                    <span>"Progress"</span>
                    <span>{format_percent(progress)}</span>
                </div>
                <div class="progress-bar">
                    <div class="progress-fill" style=progress_style(progress)></div>
                </div>
            </div>

            <div class="goal-actions">
                {progress_buttons}
                <button
                    class="btn-small btn-complete"
                    on:click=move |_| ctx.toggle_complete(&toggle_id)
                >
                    {if completed { "Reopen" } else { "Complete" }}
                </button>
                <button
                    class="btn-small btn-delete"
                    on:click=move |_| ctx.delete_goal(&delete_id)
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}

fn card_class(completed: bool) -> &'static str {
    if completed { "goal-card completed" } else { "goal-card" }
}

fn progress_style(progress: u8) -> String {
    format!("width: {}%", progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_class() {
        assert_eq!(card_class(true), "goal-card completed");
        assert_eq!(card_class(false), "goal-card");
    }

    #[test]
    fn test_progress_style() {
        assert_eq!(progress_style(0), "width: 0%");
        assert_eq!(progress_style(100), "width: 100%");
    }
}
