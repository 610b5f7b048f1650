//! Tracker Configuration
//!
//! Compile-time defaults; the browser build has no environment to read from.

/// Key of the `localStorage` slot holding the goal array
pub const DEFAULT_STORAGE_KEY: &str = "goals";

/// Progress change applied by the -/+ buttons
pub const DEFAULT_PROGRESS_STEP: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Slot name in the key-value store
    pub storage_key: &'static str,
    /// Percentage points added or removed per progress click
    pub progress_step: i32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY,
            progress_step: DEFAULT_PROGRESS_STEP,
        }
    }
}
