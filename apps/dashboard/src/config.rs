//! # Dashboard Configuration
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--data-dir`)
//! 2. Environment variables (`SHELFWISE_*`)
//! 3. Defaults (platform data directory, `shelfwise-products-v1` key)

use std::path::PathBuf;

use shelfwise_store::{StoreConfig, StoreResult};

/// Overrides the data directory.
pub const DATA_DIR_VAR: &str = "SHELFWISE_DATA_DIR";

/// Overrides the storage key.
pub const STORAGE_KEY_VAR: &str = "SHELFWISE_STORAGE_KEY";

/// Dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Data directory; `None` means the platform default.
    pub data_dir: Option<PathBuf>,

    /// Storage key; `None` means the default key.
    pub storage_key: Option<String>,
}

impl DashboardConfig {
    /// Reads `SHELFWISE_DATA_DIR` and `SHELFWISE_STORAGE_KEY`.
    ///
    /// Empty values are treated as unset.
    pub fn from_env() -> Self {
        DashboardConfig::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        DashboardConfig {
            data_dir: non_empty(DATA_DIR_VAR).map(PathBuf::from),
            storage_key: non_empty(STORAGE_KEY_VAR),
        }
    }

    /// Replaces the data directory when `dir` is given.
    pub fn with_data_dir(mut self, dir: Option<PathBuf>) -> Self {
        if dir.is_some() {
            self.data_dir = dir;
        }
        self
    }

    /// Resolves the store location.
    pub fn store_config(&self) -> StoreResult<StoreConfig> {
        let config = match &self.data_dir {
            Some(dir) => StoreConfig::new(dir),
            None => StoreConfig::default_location()?,
        };
        Ok(match &self.storage_key {
            Some(key) => config.with_key(key),
            None => config,
        })
    }
}
