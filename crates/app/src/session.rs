//! Startup wiring: load the persisted inventory or seed the demo data.

use anyhow::Context;
use tracing::info;

use labstock_inventory::{InventoryStore, SnapshotStore, StoreError};
use labstock_storage::JsonFileStore;

use crate::seed;

/// Build the store from a snapshot slot.
///
/// Persisted state wins; a slot that has never been written is seeded with
/// the demo inventory, which is saved back immediately so the next session
/// loads instead of reseeding.
pub fn bootstrap<S: SnapshotStore>(snapshots: S) -> Result<InventoryStore<S>, StoreError> {
    match snapshots.load()? {
        Some(items) => {
            info!(count = items.len(), "loaded persisted inventory");
            Ok(InventoryStore::from_snapshot(snapshots, items))
        }
        None => {
            info!("no persisted inventory; seeding demo data");
            let store = InventoryStore::from_snapshot(snapshots, seed::demo_items());
            store.flush()?;
            Ok(store)
        }
    }
}

/// Open the dashboard store at the default platform slot.
pub fn open_dashboard() -> anyhow::Result<InventoryStore<JsonFileStore>> {
    let slot = JsonFileStore::open_default().context("resolving inventory slot location")?;
    let store = bootstrap(slot).context("loading inventory snapshot")?;
    Ok(store)
}
