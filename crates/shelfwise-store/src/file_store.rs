//! # File Store
//!
//! Keeps the serialized product collection in a single JSON file.
//!
//! ## Write Path
//! ```text
//! save(json)
//!     │
//!     ▼
//! write <key>.json.tmp ──► rename over <key>.json
//!
//! A crash mid-write leaves the previous document intact.
//! ```

use std::fs;
use std::io::ErrorKind;

use shelfwise_core::{Persistence, PersistenceError};
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};

/// File-backed key-value storage for one product collection.
///
/// ## Usage
/// ```rust,no_run
/// use shelfwise_core::Catalog;
/// use shelfwise_store::{FileStore, StoreConfig};
///
/// let store = FileStore::open(StoreConfig::new("./data"))?;
/// let catalog = Catalog::load(store);
/// # Ok::<(), shelfwise_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    config: StoreConfig,
}

impl FileStore {
    /// Opens the store, creating the data directory if needed.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        config.validate()?;
        fs::create_dir_all(&config.data_dir)
            .map_err(|err| StoreError::io(&config.data_dir, err))?;

        info!(path = %config.file_path().display(), "Opened product store");
        Ok(FileStore { config })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Reads the stored document. A missing file is `Ok(None)`.
    pub fn read(&self) -> StoreResult<Option<String>> {
        let path = self.config.file_path();
        match fs::read_to_string(&path) {
            Ok(contents) => {
                debug!(path = %path.display(), bytes = contents.len(), "Read product store");
                Ok(Some(contents))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::io(path, err)),
        }
    }

    /// Replaces the stored document.
    pub fn write(&self, contents: &str) -> StoreResult<()> {
        let path = self.config.file_path();
        let tmp_path = path.with_extension("json.tmp");

        fs::write(&tmp_path, contents).map_err(|err| StoreError::io(&tmp_path, err))?;
        fs::rename(&tmp_path, &path).map_err(|err| StoreError::io(&path, err))?;

        debug!(path = %path.display(), bytes = contents.len(), "Wrote product store");
        Ok(())
    }

    /// Deletes the stored document. Returns whether one existed.
    pub fn remove(&self) -> StoreResult<bool> {
        let path = self.config.file_path();
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(path = %path.display(), "Removed product store");
                Ok(true)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(StoreError::io(path, err)),
        }
    }
}

impl Persistence for FileStore {
    fn load(&self) -> Result<Option<String>, PersistenceError> {
        self.read().map_err(|err| PersistenceError::Read {
            key: self.config.key.clone(),
            reason: err.to_string(),
        })
    }

    fn save(&mut self, serialized: &str) -> Result<(), PersistenceError> {
        self.write(serialized).map_err(|err| PersistenceError::Write {
            key: self.config.key.clone(),
            reason: err.to_string(),
        })
    }
}
