//! Stats Panel Component
//!
//! Total, completed and average progress across all goals.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::store_stats;

#[component]
pub fn StatsPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let stats = Memo::new(move |_| store_stats(&ctx.store));

    view! {
        <div class="stats">
            <StatCard value=Signal::derive(move || stats.get().total.to_string()) label="Total Goals" />
            <StatCard value=Signal::derive(move || stats.get().completed.to_string()) label="Completed" />
            <StatCard
                value=Signal::derive(move || format_percent(stats.get().average_progress))
                label="Avg Progress"
            />
        </div>
    }
}

#[component]
fn StatCard(value: Signal<String>, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-value">{move || value.get()}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

pub fn format_percent(value: u8) -> String {
    format!("{}%", value)
}
