//! # Error Types
//!
//! Domain-specific error types for shelfwise-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shelfwise-core errors (this file)                                     │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Registration input failures                    │
//! │                                                                         │
//! │  shelfwise-core persistence port                                       │
//! │  └── PersistenceError - What a storage backend reports                 │
//! │                                                                         │
//! │  shelfwise-store errors (separate crate)                               │
//! │  └── StoreError       - File system failures                           │
//! │                                                                         │
//! │  Flow: StoreError → PersistenceError → (logged, swallowed by Catalog)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, id, key)
//! 3. Errors are enum variants, never String
//! 4. Persistence errors never escape the `Catalog`; they are logged instead

use thiserror::Error;

use crate::persistence::PersistenceError;
use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core catalog errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A product with this id is already in the catalog.
    ///
    /// ## When This Occurs
    /// - `add_product` called with an id taken from a stale `next_id`
    /// - Caller built a `Product` by hand and reused an id
    #[error("Product id {0} already exists")]
    DuplicateProductId(ProductId),

    /// Registration input was rejected.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A persistence backend failed.
    ///
    /// Only returned by helpers that talk to a backend directly; the
    /// `Catalog` itself logs and absorbs these.
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Stored data could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for product registration.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Text that should hold a number does not.
    #[error("{field} is not a number: '{value}'")]
    NotANumber { field: String, value: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
