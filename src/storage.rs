//! Browser Storage
//!
//! `window.localStorage` as a key-value backend for the goal repository.

use goal_core::{Goal, GoalRepository, GoalStore, KeyValueStore, StoreError, StoreResult, TrackerConfig};
use wasm_bindgen::JsValue;

pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// The page's `localStorage`; fails when there is no window or the
    /// browser blocks storage access (e.g. some private modes)
    pub fn local() -> StoreResult<Self> {
        let window = web_sys::window().ok_or_else(|| StoreError::Backend("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Backend("localStorage not available".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.storage.set_item(key, value).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> StoreError {
    StoreError::Backend(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Read the saved goals, falling back to an empty list
pub fn load_goals(config: &TrackerConfig) -> GoalStore {
    match BrowserStorage::local() {
        Ok(storage) => GoalRepository::with_config(storage, config).load(),
        Err(err) => {
            tracing::warn!(%err, "storage unavailable, starting with no goals");
            GoalStore::new()
        }
    }
}

/// Overwrite the saved goals with `goals`
pub fn save_goals(config: &TrackerConfig, goals: &[Goal]) -> StoreResult<()> {
    let storage = BrowserStorage::local()?;
    GoalRepository::with_config(storage, config).persist(goals)
}
