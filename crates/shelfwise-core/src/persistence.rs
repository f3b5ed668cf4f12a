//! # Persistence Port
//!
//! The catalog saves and restores its products through the [`Persistence`]
//! trait. Storage backends live outside this crate (`shelfwise-store` keeps
//! one JSON document per key on disk); [`MemoryPersistence`] is the in-process
//! fake used by tests and embedders.
//!
//! ## Boundary Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  load()  ──► Ok(Some(json)) ──► decode_products() ──► normalized list   │
//! │     │                                 │                                 │
//! │     ├── Ok(None) ─────────────────────┼──► seed_products()              │
//! │     └── Err(_) ───────────────────────┘   (decode failure also seeds)   │
//! │                                                                         │
//! │  save(json) ──► Err(_) ──► logged by the Catalog, never returned        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stored data is never trusted. [`decode_products`] coerces every field and
//! drops records it cannot identify, so a hand-edited or older document still
//! loads.

use std::collections::HashSet;

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::error::CoreResult;
use crate::query::parse_price_bound;
use crate::types::{Product, ProductId};
use crate::STORAGE_KEY;

// =============================================================================
// Port
// =============================================================================

/// What a storage backend reports when it cannot do its job.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PersistenceError {
    /// Reading the stored value failed.
    #[error("Failed to read '{key}': {reason}")]
    Read { key: String, reason: String },

    /// Writing the value failed.
    #[error("Failed to write '{key}': {reason}")]
    Write { key: String, reason: String },

    /// The stored value is not a product list.
    #[error("Stored data is malformed: {0}")]
    Malformed(String),
}

/// Key-value storage for the serialized product collection.
///
/// Implementations store one string under one fixed key. The catalog
/// handles every error they return, so implementations should report
/// failures rather than panic.
pub trait Persistence {
    /// Returns the saved collection, or `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<String>, PersistenceError>;

    /// Replaces the saved collection.
    fn save(&mut self, serialized: &str) -> Result<(), PersistenceError>;
}

impl<P: Persistence + ?Sized> Persistence for Box<P> {
    fn load(&self) -> Result<Option<String>, PersistenceError> {
        (**self).load()
    }

    fn save(&mut self, serialized: &str) -> Result<(), PersistenceError> {
        (**self).save(serialized)
    }
}

// =============================================================================
// In-Memory Backend
// =============================================================================

/// Persistence held in memory.
///
/// Records every payload it is given, and can be told to fail reads or
/// writes to exercise the catalog's fallback paths.
///
/// ## Example
/// ```rust
/// use shelfwise_core::{Catalog, MemoryPersistence};
///
/// let mut catalog = Catalog::load(MemoryPersistence::new());
/// catalog.update_stock(shelfwise_core::ProductId::new(1), 9);
///
/// assert_eq!(catalog.persistence().save_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    stored: Option<String>,
    saves: Vec<String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryPersistence {
    /// Creates an empty backend.
    pub fn new() -> Self {
        MemoryPersistence::default()
    }

    /// Creates a backend that already holds `serialized`.
    pub fn with_stored(serialized: impl Into<String>) -> Self {
        MemoryPersistence {
            stored: Some(serialized.into()),
            ..MemoryPersistence::default()
        }
    }

    /// Makes every `load` fail.
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Makes every `save` fail.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// The currently stored value.
    pub fn stored(&self) -> Option<&str> {
        self.stored.as_deref()
    }

    /// Every payload passed to `save`, including failed attempts.
    pub fn saves(&self) -> &[String] {
        &self.saves
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.len()
    }
}

impl Persistence for MemoryPersistence {
    fn load(&self) -> Result<Option<String>, PersistenceError> {
        if self.fail_reads {
            return Err(PersistenceError::Read {
                key: STORAGE_KEY.to_string(),
                reason: "read failure requested".to_string(),
            });
        }
        Ok(self.stored.clone())
    }

    fn save(&mut self, serialized: &str) -> Result<(), PersistenceError> {
        self.saves.push(serialized.to_string());
        if self.fail_writes {
            return Err(PersistenceError::Write {
                key: STORAGE_KEY.to_string(),
                reason: "write failure requested".to_string(),
            });
        }
        self.stored = Some(serialized.to_string());
        Ok(())
    }
}

// =============================================================================
// Encoding
// =============================================================================

/// Serializes the collection as a JSON array.
pub fn encode_products(products: &[Product]) -> CoreResult<String> {
    Ok(serde_json::to_string(products)?)
}

/// Parses a stored collection, normalizing every record.
///
/// ## Rules
/// - The document must be a JSON array; anything else is an error
/// - Records that are not objects or lack an integer `id >= 1` are dropped
/// - Later records reusing an id are dropped
/// - `name`, `description`, `image`: non-strings become `""`
/// - `price`, `stock`: numbers or numeric strings; negative or unreadable
///   values become `0`, stock is rounded down
/// - `sales`: kept only when every entry is a non-negative number
pub fn decode_products(raw: &str) -> CoreResult<Vec<Product>> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Array(items) = value else {
        return Err(PersistenceError::Malformed(format!(
            "expected a JSON array, found {}",
            json_kind(&value)
        ))
        .into());
    };

    let mut seen = HashSet::new();
    let mut products = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let Some(product) = item.as_object().and_then(normalize_product) else {
            warn!(index, "Dropping stored product without a usable id");
            continue;
        };
        if !seen.insert(product.id) {
            warn!(index, id = %product.id, "Dropping stored product with duplicate id");
            continue;
        }
        products.push(product);
    }

    Ok(products)
}

fn normalize_product(record: &Map<String, Value>) -> Option<Product> {
    let id = record.get("id").and_then(as_product_id)?;

    Some(Product {
        id,
        name: text_field(record, "name"),
        description: text_field(record, "description"),
        price: record
            .get("price")
            .and_then(as_amount)
            .unwrap_or(0.0),
        stock: record
            .get("stock")
            .and_then(as_amount)
            .map(|stock| stock.floor() as u32)
            .unwrap_or(0),
        image: text_field(record, "image"),
        sales: record.get("sales").and_then(as_sales),
    })
}

fn as_product_id(value: &Value) -> Option<ProductId> {
    let id = match value.as_u64() {
        Some(id) => id,
        None => value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0)
            .map(|f| f as u64)?,
    };
    u32::try_from(id)
        .ok()
        .filter(|&id| id >= 1)
        .map(ProductId::new)
}

/// A finite, non-negative number from a JSON number or numeric string.
fn as_amount(value: &Value) -> Option<f64> {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_price_bound(s),
        _ => None,
    }?;
    (amount.is_finite() && amount >= 0.0).then_some(amount)
}

fn as_sales(value: &Value) -> Option<Vec<u32>> {
    value
        .as_array()?
        .iter()
        .map(|slot| {
            slot.as_f64()
                .filter(|n| n.is_finite() && *n >= 0.0)
                .map(|n| n.floor() as u32)
        })
        .collect()
}

fn text_field(record: &Map<String, Value>, field: &str) -> String {
    record
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
