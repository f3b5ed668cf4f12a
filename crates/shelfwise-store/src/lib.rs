//! # shelfwise-store: File Persistence for Shelfwise
//!
//! Implements the core [`Persistence`](shelfwise_core::Persistence) port on
//! local disk: one JSON document per key inside a data directory.
//!
//! ## Module Organization
//!
//! - [`config`] - Data directory and key
//! - [`file_store`] - The `FileStore` backend
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shelfwise_core::Catalog;
//! use shelfwise_store::{FileStore, StoreConfig};
//!
//! let store = FileStore::open(StoreConfig::default_location()?)?;
//! let catalog = Catalog::load(store);
//! println!("{} products", catalog.products().len());
//! # Ok::<(), shelfwise_store::StoreError>(())
//! ```

pub mod config;
pub mod error;
pub mod file_store;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use file_store::FileStore;
