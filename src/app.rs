//! Goal Tracker Frontend App
//!
//! Single page: summary, creation form, goal list.

use leptos::prelude::*;
use reactive_stores::Store;

use goal_core::TrackerConfig;
use rolling_logger::LogBuffer;

use crate::components::{GoalList, LogPanel, NewGoalForm, StatsPanel};
use crate::context::AppContext;
use crate::storage;
use crate::store::AppState;

#[component]
pub fn App(logs: Option<LogBuffer>) -> impl IntoView {
    let config = TrackerConfig::default();

    // Load once on mount; every later change is saved explicitly by AppContext
    let goals = storage::load_goals(&config);
    let store = Store::new(AppState::new(goals));

    provide_context(AppContext::new(store, config));
    if let Some(logs) = logs {
        provide_context(logs);
    }

    view! {
        <div class="container">
            <div class="header">
                <h1>"🎯 Goal Tracker"</h1>
                <p>"Set your goals and track your progress"</p>
            </div>

            <StatsPanel />

            <NewGoalForm />

            <GoalList />

            <LogPanel />
        </div>
    }
}
