//! Goal Tracker Core
//!
//! Domain entities, store operations and persistence for the goal tracker.
//! Nothing in here touches the browser; the UI plugs `localStorage` in
//! through [`KeyValueStore`].

pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod store;

pub use config::TrackerConfig;
pub use domain::{Category, Goal, GoalId, GoalStats, ParseCategoryError};
pub use error::{StoreError, StoreResult};
pub use repository::{GoalRepository, KeyValueStore, MemoryStore};
pub use store::GoalStore;
