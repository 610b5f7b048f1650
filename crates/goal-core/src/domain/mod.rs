//! Domain Layer
//!
//! Goal entity and the values derived from it.
//! Only serde, chrono and uuid are used here; no storage concerns.

mod category;
mod goal;
mod stats;

pub use category::{Category, ParseCategoryError};
pub use goal::{Goal, GoalId, MAX_PROGRESS};
pub use stats::GoalStats;
