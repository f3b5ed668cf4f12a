//! # Store Error Types
//!
//! Error types for file persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds key and path context                  │
//! │       │                                                                 │
//! │       ├──► PersistenceError (core port) ──► logged by the Catalog      │
//! │       │                                                                 │
//! │       └──► AppError (dashboard) when opening the store fails           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// File persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The key cannot be used as a file name.
    ///
    /// ## When This Occurs
    /// - Empty key
    /// - Key with a path separator or other character outside
    ///   `[A-Za-z0-9._-]`
    /// - Key starting with `.`
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    /// No data directory could be determined for this platform.
    #[error("No data directory available for this platform")]
    DataDirUnavailable,

    /// File system operation failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
