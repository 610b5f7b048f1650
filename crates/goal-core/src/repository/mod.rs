//! Repository Layer
//!
//! Key-value storage abstraction and the goal slot built on top of it.

mod traits;
mod memory;
mod goal_repo;

#[cfg(test)]
mod tests;

pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use goal_repo::{decode_goals, encode_goals, GoalRepository};
