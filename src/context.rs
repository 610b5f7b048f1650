//! Application Context
//!
//! Store handle plus the goal actions the components call. Each action
//! mutates the store, then saves explicitly when something changed.

use goal_core::{Category, GoalId, TrackerConfig};

use crate::storage;
use crate::store::{store_mutate, store_with_goals, AppStore};

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    pub config: TrackerConfig,
}

impl AppContext {
    pub fn new(store: AppStore, config: TrackerConfig) -> Self {
        Self { store, config }
    }

    /// Add a goal from the form; false when the title was blank
    pub fn create_goal(&self, title: &str, description: &str, category: Category) -> bool {
        let created = store_mutate(&self.store, |goals| goals.create(title, description, category).is_some());
        self.save_if(created)
    }

    pub fn adjust_progress(&self, id: &GoalId, delta: i32) {
        let changed = store_mutate(&self.store, |goals| goals.adjust_progress(id, delta));
        self.save_if(changed);
    }

    pub fn toggle_complete(&self, id: &GoalId) {
        let changed = store_mutate(&self.store, |goals| goals.toggle_complete(id));
        self.save_if(changed);
    }

    pub fn delete_goal(&self, id: &GoalId) {
        let changed = store_mutate(&self.store, |goals| goals.delete(id));
        self.save_if(changed);
    }

    fn save_if(&self, changed: bool) -> bool {
        if changed {
            let result = store_with_goals(&self.store, |goals| storage::save_goals(&self.config, goals));
            if let Err(err) = result {
                tracing::error!(%err, "failed to save goals");
            }
        }
        changed
    }
}
