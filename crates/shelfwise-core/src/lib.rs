//! # shelfwise-core: Catalog Logic for Shelfwise
//!
//! This crate is the **heart** of Shelfwise. It holds the product catalog
//! and every derived view a dashboard needs, as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shelfwise Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Dashboard (apps/dashboard)                      │   │
//! │  │    Revenue ──► Inventory ──► Registration                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shelfwise-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   query   │  │  report   │  │ forecast  │  │   │
//! │  │   │  Catalog  │  │  filter   │  │  totals   │  │ days left │  │   │
//! │  │   │  actions  │  │  sort     │  │  low stock│  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • storage only through the Persistence trait           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              shelfwise-store (File Persistence)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ViewControls, SortField)
//! - [`catalog`] - The `Catalog` state engine
//! - [`query`] - Filtering, search and sorting
//! - [`report`] - Totals, low stock, per-period and per-category figures
//! - [`forecast`] - Stock depletion forecast
//! - [`persistence`] - Storage port, in-memory backend, load normalization
//! - [`validation`] - Registration checks
//! - [`seed`] - Starting products
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shelfwise_core::{Catalog, MemoryPersistence};
//!
//! let mut catalog = Catalog::load(MemoryPersistence::new());
//! catalog.controls_mut().filter_min_price = "100".to_string();
//!
//! let names: Vec<&str> = catalog
//!     .filtered_products()
//!     .iter()
//!     .map(|p| p.name.as_str())
//!     .collect();
//! assert_eq!(names, ["Laptop", "Phone"]);
//! assert_eq!(catalog.total_orders(), 14);
//! ```

pub mod catalog;
pub mod error;
pub mod forecast;
pub mod persistence;
pub mod query;
pub mod report;
pub mod seed;
pub mod types;
pub mod validation;

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use forecast::{forecast, forecast_message, DepletionForecast};
pub use persistence::{MemoryPersistence, Persistence, PersistenceError};
pub use report::CategorySummary;
pub use seed::seed_products;
pub use types::*;
pub use validation::NewProduct;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Key the product collection is saved under.
pub const STORAGE_KEY: &str = "shelfwise-products-v1";

/// Products with fewer units than this are low on stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Forecasts are only reported when stock runs out in fewer days than this.
pub const FORECAST_HORIZON_DAYS: u64 = 7;

/// Number of periods in a sales window.
pub const SALES_WINDOW: usize = 7;
