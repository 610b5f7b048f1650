//! Store Errors

use thiserror::Error;

/// Common result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures while reading or writing the persisted goal slot
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
