//! Goal Repository
//!
//! Reads and writes the whole goal list as one JSON array in a single slot.

use super::traits::KeyValueStore;
use crate::config::TrackerConfig;
use crate::domain::Goal;
use crate::error::StoreResult;
use crate::store::GoalStore;

pub fn decode_goals(raw: &str) -> StoreResult<Vec<Goal>> {
    Ok(serde_json::from_str(raw)?)
}

pub fn encode_goals(goals: &[Goal]) -> StoreResult<String> {
    Ok(serde_json::to_string(goals)?)
}

/// Goal list bound to one slot of a key-value backend
pub struct GoalRepository<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> GoalRepository<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn with_config(backend: S, config: &TrackerConfig) -> Self {
        Self::new(backend, config.storage_key)
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load the saved goals. Missing, unreadable or malformed data all yield
    /// an empty store; the cause is only logged.
    pub fn load(&self) -> GoalStore {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::info!(key = %self.key, "no saved goals");
                return GoalStore::new();
            }
            Err(err) => {
                tracing::warn!(key = %self.key, %err, "could not read saved goals");
                return GoalStore::new();
            }
        };

        match decode_goals(&raw) {
            Ok(mut goals) => {
                let repaired = goals.iter_mut().map(Goal::normalize).filter(|&changed| changed).count();
                if repaired > 0 {
                    tracing::warn!(key = %self.key, repaired, "repaired out-of-range progress");
                }
                tracing::info!(key = %self.key, count = goals.len(), "loaded goals");
                GoalStore::from_goals(goals)
            }
            Err(err) => {
                tracing::warn!(key = %self.key, %err, "discarding malformed saved goals");
                GoalStore::new()
            }
        }
    }

    /// Overwrite the slot with `goals`
    pub fn persist(&self, goals: &[Goal]) -> StoreResult<()> {
        let raw = encode_goals(goals)?;
        self.backend.set(&self.key, &raw)?;
        tracing::debug!(key = %self.key, count = goals.len(), "persisted goals");
        Ok(())
    }
}
