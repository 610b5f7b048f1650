//! UI Components
//!
//! Leptos components for the goal tracker page.

mod category_selector;
mod goal_card;
mod goal_list;
mod log_panel;
mod new_goal_form;
mod stats_panel;

pub use category_selector::CategorySelector;
pub use goal_card::GoalCard;
pub use goal_list::GoalList;
pub use log_panel::LogPanel;
pub use new_goal_form::NewGoalForm;
pub use stats_panel::StatsPanel;
