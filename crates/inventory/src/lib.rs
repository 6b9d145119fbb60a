//! Inventory domain module.
//!
//! This crate contains the item entity, the owned inventory store, and the
//! derived metrics the dashboard reads — pure domain logic plus the
//! snapshot-store port. The file-backed implementation of that port lives
//! in `labstock-storage`.

pub mod item;
pub mod metrics;
pub mod snapshot;
pub mod store;
pub mod validation;

pub use item::Item;
pub use metrics::{
    LOW_STOCK_THRESHOLD, StockStatus, StockSummary, low_stock_count, summarize,
    total_current_value, total_investment,
};
pub use snapshot::{InMemorySnapshotStore, SnapshotStore, StorageError};
pub use store::{InventoryStore, StockAdjustment, StoreError};
pub use validation::validate_item_entry;
