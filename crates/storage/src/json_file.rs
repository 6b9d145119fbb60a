//! One JSON document per storage slot, rewritten whole on every save.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use labstock_inventory::{Item, SnapshotStore, StorageError};

/// Name of the single slot the inventory list lives under.
pub const DEFAULT_SLOT: &str = "labInventoryData";

/// Snapshot store backed by a single JSON file.
///
/// The file holds the ordered record list and nothing else; saves truncate
/// and rewrite it in full. A slot that has never been written reads as
/// absent, not as an error.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store the slot at an explicit path.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store the slot under the platform data directory
    /// (`<data dir>/labstock/labInventoryData.json`).
    pub fn open_default() -> Result<Self, StorageError> {
        let base = dirs::data_dir()
            .ok_or_else(|| StorageError::Io("no platform data directory".to_string()))?;
        Ok(Self {
            path: base.join("labstock").join(format!("{DEFAULT_SLOT}.json")),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn save(&self, items: &[Item]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| StorageError::Io(err.to_string()))?;
        }

        let body =
            serde_json::to_vec_pretty(items).map_err(|err| StorageError::Codec(err.to_string()))?;
        fs::write(&self.path, body).map_err(|err| StorageError::Io(err.to_string()))?;

        debug!(count = items.len(), path = %self.path.display(), "snapshot written");
        Ok(())
    }

    fn load(&self) -> Result<Option<Vec<Item>>, StorageError> {
        let body = match fs::read(&self.path) {
            Ok(body) => body,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StorageError::Io(err.to_string())),
        };

        let items: Vec<Item> =
            serde_json::from_slice(&body).map_err(|err| StorageError::Codec(err.to_string()))?;
        debug!(count = items.len(), path = %self.path.display(), "snapshot loaded");
        Ok(Some(items))
    }
}
