//! Dataset access error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the measurement store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Dataset file could not be opened
    #[error("Failed to open dataset {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query against the dataset failed
    #[error("Dataset query failed: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection lock was poisoned by a panicking holder
    #[error("Dataset lock poisoned: {0}")]
    Lock(String),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
