//! # Dashboard Error Type
//!
//! Unified error type for dashboard commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  StoreError ──┐                                                         │
//! │  CoreError ───┼──► AppError ──► main prints "error: ..." ──► exit 1     │
//! │  io/json ─────┘                                                         │
//! │                                                                         │
//! │  Persistence failures while the catalog runs are NOT here: the catalog  │
//! │  logs and absorbs them.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shelfwise_core::{CoreError, ProductId};
use shelfwise_store::StoreError;
use thiserror::Error;

/// Error returned from dashboard commands.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog rejected the request (validation, duplicate id).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The file store could not be opened or reset.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// No product has this id.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Writing command output failed.
    #[error("Output failed: {0}")]
    Output(#[from] std::io::Error),

    /// Encoding JSON output failed.
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for dashboard commands.
pub type AppResult<T> = Result<T, AppError>;
