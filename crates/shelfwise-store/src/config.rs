//! # Store Configuration
//!
//! Where the product collection lives on disk.
//!
//! ## Default Locations
//! - **macOS**: `~/Library/Application Support/com.shelfwise.shelfwise/`
//! - **Windows**: `%APPDATA%\shelfwise\shelfwise\data\`
//! - **Linux**: `~/.local/share/shelfwise/`

use std::path::PathBuf;

use directories::ProjectDirs;
use shelfwise_core::STORAGE_KEY;

use crate::error::{StoreError, StoreResult};

/// File store configuration.
///
/// ## Example
/// ```rust
/// use shelfwise_store::StoreConfig;
///
/// let config = StoreConfig::new("./data").with_key("demo-products");
/// assert!(config.file_path().ends_with("demo-products.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding one `<key>.json` file per key.
    pub data_dir: PathBuf,

    /// Key the collection is stored under.
    /// Default: `shelfwise-products-v1`
    pub key: String,
}

impl StoreConfig {
    /// Creates a configuration rooted at `data_dir` with the default key.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            key: STORAGE_KEY.to_string(),
        }
    }

    /// Uses the platform data directory.
    pub fn default_location() -> StoreResult<Self> {
        let dirs = ProjectDirs::from("com", "shelfwise", "shelfwise")
            .ok_or(StoreError::DataDirUnavailable)?;
        Ok(StoreConfig::new(dirs.data_dir()))
    }

    /// Sets the storage key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Full path of the stored document.
    pub fn file_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.key))
    }

    /// Checks that the key is usable as a plain file name.
    pub fn validate(&self) -> StoreResult<()> {
        let key = self.key.as_str();
        let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.');

        if key.is_empty() || key.starts_with('.') || !key.chars().all(allowed) {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(())
    }
}
