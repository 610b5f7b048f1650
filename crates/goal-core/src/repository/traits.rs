//! Repository Layer - Core Traits
//!
//! The persistent store is an opaque string-to-string slot map.
//! Implementations: browser `localStorage` (UI crate), in-memory.

use crate::error::StoreResult;

/// Minimal key-value backend
pub trait KeyValueStore {
    /// Read the value under `key`, `None` when the slot was never written
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite the value under `key`
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}
