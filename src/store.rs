//! Global Application State Store
//!
//! Uses Leptos reactive_stores so views re-render when the goal list changes.

use leptos::prelude::*;
use reactive_stores::Store;

use goal_core::{Goal, GoalStats, GoalStore};

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All goals, newest first
    pub tracker: GoalStore,
}

impl AppState {
    pub fn new(tracker: GoalStore) -> Self {
        Self { tracker }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Snapshot of the goal list for rendering (tracked)
pub fn store_goals(store: &AppStore) -> Vec<Goal> {
    store.tracker().read().goals().to_vec()
}

/// Whether there is nothing to list (tracked)
pub fn store_is_empty(store: &AppStore) -> bool {
    store.tracker().read().is_empty()
}

/// Summary statistics (tracked)
pub fn store_stats(store: &AppStore) -> GoalStats {
    store.tracker().read().stats()
}

/// Run a mutation against the goal store. Subscribers are only notified
/// when `f` reports a change.
pub fn store_mutate(store: &AppStore, f: impl FnOnce(&mut GoalStore) -> bool) -> bool {
    let changed = {
        let field = store.tracker();
        let mut tracker = field.write_untracked();
        f(&mut *tracker)
    };
    if changed {
        store.tracker().notify();
    }
    changed
}

/// Run `f` on the current goals without subscribing
pub fn store_with_goals<R>(store: &AppStore, f: impl FnOnce(&[Goal]) -> R) -> R {
    f(store.tracker().read_untracked().goals())
}
