//! Snapshot-store port: whole-inventory persistence behind one named slot.

use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

use crate::item::Item;

/// Persistence failure while loading or saving a snapshot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(String),

    #[error("corrupt snapshot: {0}")]
    Codec(String),
}

/// Full-snapshot persistence for the inventory store.
///
/// Every mutation re-serializes the entire ordered item list; there is no
/// dirty tracking or batching. `load` returns `Ok(None)` when nothing has
/// ever been saved to the slot.
pub trait SnapshotStore {
    fn save(&self, items: &[Item]) -> Result<(), StorageError>;
    fn load(&self) -> Result<Option<Vec<Item>>, StorageError>;
}

impl<S> SnapshotStore for std::sync::Arc<S>
where
    S: SnapshotStore + ?Sized,
{
    fn save(&self, items: &[Item]) -> Result<(), StorageError> {
        (**self).save(items)
    }

    fn load(&self) -> Result<Option<Vec<Item>>, StorageError> {
        (**self).load()
    }
}

/// In-memory snapshot store for tests and dev.
///
/// Counts saves so callers can assert the persist-after-every-mutation rule.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    slot: RwLock<Option<Vec<Item>>>,
    saves: AtomicU64,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the slot, as if a previous session had saved it.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            slot: RwLock::new(Some(items)),
            saves: AtomicU64::new(0),
        }
    }

    /// Number of saves performed since construction.
    pub fn save_count(&self) -> u64 {
        self.saves.load(Ordering::Relaxed)
    }

    /// Current slot contents.
    pub fn stored(&self) -> Option<Vec<Item>> {
        match self.slot.read() {
            Ok(slot) => slot.clone(),
            Err(_) => None,
        }
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn save(&self, items: &[Item]) -> Result<(), StorageError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| StorageError::Io("snapshot slot lock poisoned".to_string()))?;
        *slot = Some(items.to_vec());
        self.saves.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn load(&self) -> Result<Option<Vec<Item>>, StorageError> {
        let slot = self
            .slot
            .read()
            .map_err(|_| StorageError::Io("snapshot slot lock poisoned".to_string()))?;
        Ok(slot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labstock_core::ItemId;

    fn probe() -> Item {
        Item::with_stock(ItemId::new(100), "Oscilloscope Probe", 1250.0, 5)
    }

    #[test]
    fn empty_store_loads_nothing() {
        let store = InMemorySnapshotStore::new();
        assert!(store.load().unwrap().is_none());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn round_trips_the_item_list() {
        let store = InMemorySnapshotStore::new();
        let items = vec![probe()];
        store.save(&items).unwrap();
        assert_eq!(store.load().unwrap(), Some(items));
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn later_saves_replace_the_slot() {
        let store = InMemorySnapshotStore::new();
        store.save(&[probe()]).unwrap();
        store.save(&[]).unwrap();
        assert_eq!(store.load().unwrap(), Some(vec![]));
        assert_eq!(store.save_count(), 2);
    }
}
