//! # Domain Types
//!
//! Core domain types used throughout Shelfwise.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  ViewControls   │   │   SortField     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  category       │   │  Name           │       │
//! │  │  name           │   │  search         │   │  Description    │       │
//! │  │  description    │   │  sort_by/asc    │   │  Stock          │       │
//! │  │  price, stock   │   │  min/max price  │   │  Price          │       │
//! │  │  sales[]        │   │  in_stock       │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Category
//! A product has no separate category entity: `description` doubles as the
//! category. [`Product::category`] reads it under that name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::LOW_STOCK_THRESHOLD;

// =============================================================================
// Product Id
// =============================================================================

/// Integer product identifier, unique for the lifetime of a catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    /// Wraps a raw id.
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    /// Returns the raw id.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// The id following this one.
    #[inline]
    pub const fn next(&self) -> Self {
        ProductId(self.0.saturating_add(1))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog item with price, stock, and historical sales.
///
/// ## Persisted Shape
/// Serialized with exactly these field names:
/// `id, name, description, price, stock, image, sales`.
/// A product without sales data is written with `"sales": null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier, immutable after creation.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Free-text description, also used as the product's category.
    pub description: String,

    /// Unit price. Never negative.
    pub price: f64,

    /// Units on hand.
    pub stock: u32,

    /// Image URL, opaque to the catalog.
    pub image: String,

    /// Units sold per period, oldest first. `None` means no sales data.
    #[serde(default)]
    pub sales: Option<Vec<u32>>,
}

impl Product {
    /// The category this product is grouped under.
    #[inline]
    pub fn category(&self) -> &str {
        &self.description
    }

    /// Total units sold across the sales window (0 without sales data).
    pub fn units_sold(&self) -> u64 {
        self.sales
            .as_deref()
            .map(|sales| sales.iter().map(|&n| u64::from(n)).sum())
            .unwrap_or(0)
    }

    /// Units sold multiplied by the current price.
    pub fn revenue(&self) -> f64 {
        self.units_sold() as f64 * self.price
    }

    /// Checks if at least one unit is on hand.
    #[inline]
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Checks if stock is under [`LOW_STOCK_THRESHOLD`].
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock < LOW_STOCK_THRESHOLD
    }
}

// =============================================================================
// Sort Field
// =============================================================================

/// Column the product list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SortField {
    /// Locale-aware text order on the name.
    #[default]
    Name,
    /// Locale-aware text order on the description (category).
    Description,
    /// Numeric order on stock.
    Stock,
    /// Numeric order on price.
    Price,
}

impl SortField {
    /// Every sort field, in display order.
    pub const ALL: [SortField; 4] = [
        SortField::Name,
        SortField::Description,
        SortField::Stock,
        SortField::Price,
    ];

    /// The lowercase name used in serialized form and on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Description => "description",
            SortField::Stock => "stock",
            SortField::Price => "price",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "sort".to_string(),
                allowed: SortField::ALL.iter().map(|f| f.to_string()).collect(),
            })
    }
}

// =============================================================================
// View Controls
// =============================================================================

/// Ephemeral filter, search and sort parameters for the product list.
///
/// Never persisted. Fields are public so presentation code can assign them
/// directly; [`crate::Catalog::set_sort`] is the toggle-aware way to change
/// the sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ViewControls {
    /// Exact category to keep. Empty means no category filter.
    pub selected_category: String,

    /// Case-insensitive substring matched against name or description.
    pub search: String,

    /// Column to sort by.
    pub sort_by: SortField,

    /// Ascending when true.
    pub sort_asc: bool,

    /// Lower price bound as typed. Ignored when empty or not a number.
    pub filter_min_price: String,

    /// Upper price bound as typed. Ignored when empty or not a number.
    pub filter_max_price: String,

    /// Keep only products with stock on hand.
    pub filter_in_stock: bool,

    /// Chart range hint for presentation code; the catalog never reads it.
    pub selected_range: String,
}

impl Default for ViewControls {
    fn default() -> Self {
        ViewControls {
            selected_category: String::new(),
            search: String::new(),
            sort_by: SortField::Name,
            sort_asc: true,
            filter_min_price: String::new(),
            filter_max_price: String::new(),
            filter_in_stock: false,
            selected_range: "monthly".to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
