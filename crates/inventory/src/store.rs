//! The owned inventory store.
//!
//! One explicitly-owned object holds the id → item map and the id counter;
//! nothing ambient, no second writer. Consumers read snapshots for
//! rendering and call the mutation operations below, each of which ends in
//! a full snapshot save.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{error, info, warn};

use labstock_core::{DomainError, ItemId};

use crate::item::Item;
use crate::snapshot::{SnapshotStore, StorageError};
use crate::validation::{QUANTITY_NEGATIVE, validate_item_entry};

/// Failure of a store operation.
///
/// Domain failures (validation, unknown id) and storage failures propagate
/// separately so the UI can surface validation messages verbatim while
/// treating a failed save as terminal for that action.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Outcome of a quantity adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockAdjustment {
    /// The adjustment was applied; `quantity` is the new on-hand count.
    Applied { quantity: u32 },
    /// A decrement would have taken the count below zero. Nothing changed
    /// and nothing was persisted; the caller surfaces a warning.
    Refused,
}

/// Ordered inventory registry with exclusive ownership of its items.
///
/// The map is keyed by [`ItemId`], whose ordering follows the numeric
/// suffix; ids are allocated monotonically, so iteration order equals
/// creation order. A failed save rolls the in-memory change back, so the
/// store never drifts from the slot it mirrors.
#[derive(Debug)]
pub struct InventoryStore<S: SnapshotStore> {
    items: BTreeMap<ItemId, Item>,
    next_suffix: u32,
    snapshots: S,
}

impl<S: SnapshotStore> InventoryStore<S> {
    /// Empty store; the first created item takes `ITM100`.
    pub fn new(snapshots: S) -> Self {
        Self {
            items: BTreeMap::new(),
            next_suffix: ItemId::FLOOR,
            snapshots,
        }
    }

    /// Rebuild from a loaded snapshot.
    ///
    /// The id counter resumes one past the highest loaded suffix, never
    /// below the floor.
    pub fn from_snapshot(snapshots: S, loaded: Vec<Item>) -> Self {
        let next_suffix = loaded
            .iter()
            .map(|item| item.id().suffix().saturating_add(1))
            .max()
            .unwrap_or(ItemId::FLOOR)
            .max(ItemId::FLOOR);
        let items = loaded.into_iter().map(|item| (item.id(), item)).collect();
        Self {
            items,
            next_suffix,
            snapshots,
        }
    }

    /// The id the next successful `create` will take.
    pub fn next_id(&self) -> ItemId {
        ItemId::new(self.next_suffix)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Items in creation order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The ordered list a snapshot save writes.
    pub fn snapshot(&self) -> Vec<Item> {
        self.items.values().cloned().collect()
    }

    /// Write the current state to the slot without mutating anything.
    ///
    /// Used at bootstrap to persist freshly seeded data.
    pub fn flush(&self) -> Result<(), StorageError> {
        self.persist()
    }

    /// Enter a new item.
    ///
    /// Validates the entry, allocates the next sequential id, inserts with
    /// the investment basis equal to the received count, and persists. The
    /// counter advances only when the whole operation succeeds.
    pub fn create(&mut self, name: &str, unit_price: f64, quantity: i64) -> Result<ItemId, StoreError> {
        let errors = validate_item_entry(name, unit_price, Some(quantity));
        if !errors.is_empty() {
            return Err(DomainError::validation(errors).into());
        }
        let quantity = u32::try_from(quantity)
            .map_err(|_| DomainError::validation([QUANTITY_NEGATIVE]))?;

        let id = self.next_id();
        self.items
            .insert(id, Item::with_stock(id, name, unit_price, quantity));

        if let Err(err) = self.persist() {
            self.items.remove(&id);
            return Err(err.into());
        }

        self.next_suffix = self.next_suffix.saturating_add(1);
        info!(%id, name, "inventory item created");
        Ok(id)
    }

    /// Update an existing item's name and price.
    ///
    /// The on-hand count is not part of an edit and keeps its current
    /// value, so the quantity rule is skipped.
    pub fn update(&mut self, id: ItemId, name: &str, unit_price: f64) -> Result<(), StoreError> {
        if !self.items.contains_key(&id) {
            return Err(DomainError::not_found().into());
        }
        let errors = validate_item_entry(name, unit_price, None);
        if !errors.is_empty() {
            return Err(DomainError::validation(errors).into());
        }

        let Some(item) = self.items.get_mut(&id) else {
            return Err(DomainError::not_found().into());
        };
        let before = item.clone();
        item.set_details(name, unit_price);

        if let Err(err) = self.persist() {
            self.items.insert(id, before);
            return Err(err.into());
        }

        info!(%id, name, "inventory item updated");
        Ok(())
    }

    /// Adjust an item's on-hand count.
    ///
    /// A positive delta is a restock and raises the investment basis in
    /// lockstep. A negative delta issues stock only; when it would take the
    /// count below zero the adjustment is refused as a warning no-op.
    pub fn adjust_quantity(&mut self, id: ItemId, delta: i64) -> Result<StockAdjustment, StoreError> {
        if delta == 0 {
            return Err(DomainError::validation(["Adjustment delta cannot be zero."]).into());
        }
        let magnitude = u32::try_from(delta.unsigned_abs())
            .map_err(|_| DomainError::validation(["Adjustment delta is out of range."]))?;

        let Some(item) = self.items.get_mut(&id) else {
            return Err(DomainError::not_found().into());
        };
        let before = item.clone();

        if delta > 0 {
            item.restock(magnitude);
        } else {
            if item.quantity() < magnitude {
                warn!(%id, quantity = item.quantity(), "stock already at 0; decrement refused");
                return Ok(StockAdjustment::Refused);
            }
            item.withdraw(magnitude);
        }
        let quantity = item.quantity();

        if let Err(err) = self.persist() {
            self.items.insert(id, before);
            return Err(err.into());
        }

        Ok(StockAdjustment::Applied { quantity })
    }

    /// Remove an item.
    ///
    /// Idempotent at the store level: removing a missing id is a silent
    /// no-op (confirmation is the UI's concern). The slot is rewritten
    /// either way.
    pub fn delete(&mut self, id: ItemId) -> Result<bool, StoreError> {
        let removed = self.items.remove(&id);
        let existed = removed.is_some();

        if let Err(err) = self.persist() {
            if let Some(item) = removed {
                self.items.insert(id, item);
            }
            return Err(err.into());
        }

        if existed {
            info!(%id, "inventory item deleted");
        }
        Ok(existed)
    }

    fn persist(&self) -> Result<(), StorageError> {
        let snapshot = self.snapshot();
        self.snapshots.save(&snapshot).map_err(|err| {
            error!("snapshot save failed: {err}");
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::InMemorySnapshotStore;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn store() -> (Arc<InMemorySnapshotStore>, InventoryStore<Arc<InMemorySnapshotStore>>) {
        let snapshots = Arc::new(InMemorySnapshotStore::new());
        let store = InventoryStore::new(snapshots.clone());
        (snapshots, store)
    }

    #[test]
    fn create_allocates_sequential_ids_from_the_floor() {
        let (_, mut store) = store();
        let a = store.create("Resistor Kit", 45.0, 20).unwrap();
        let b = store.create("Breadboard (Large)", 250.5, 45).unwrap();
        assert_eq!(a, ItemId::new(100));
        assert_eq!(b, ItemId::new(101));
    }

    #[test]
    fn create_persists_and_sets_the_investment_basis() {
        let (snapshots, mut store) = store();
        let id = store.create("Resistor Kit", 45.0, 20).unwrap();

        let item = store.get(id).unwrap();
        assert_eq!(item.quantity(), 20);
        assert_eq!(item.initial_quantity(), 20);
        assert_eq!(item.current_value(), 900.0);

        assert_eq!(snapshots.save_count(), 1);
        assert_eq!(snapshots.stored().unwrap().len(), 1);
    }

    #[test]
    fn create_rejects_bad_input_without_touching_state() {
        let (snapshots, mut store) = store();
        let err = store.create("ab", -1.0, -3).unwrap_err();

        let StoreError::Domain(DomainError::Validation(messages)) = err else {
            panic!("expected a validation failure");
        };
        assert_eq!(messages.len(), 3);
        assert!(store.is_empty());
        assert_eq!(store.next_id(), ItemId::new(100));
        assert_eq!(snapshots.save_count(), 0);
    }

    #[test]
    fn update_edits_details_and_keeps_the_count() {
        let (_, mut store) = store();
        let id = store.create("Resistor Kit", 45.0, 20).unwrap();
        store.update(id, "Resistor Kit (1%)", 55.0).unwrap();

        let item = store.get(id).unwrap();
        assert_eq!(item.name(), "Resistor Kit (1%)");
        assert_eq!(item.unit_price(), 55.0);
        assert_eq!(item.quantity(), 20);
        assert_eq!(item.initial_quantity(), 20);
    }

    #[test]
    fn update_requires_an_existing_id() {
        let (_, mut store) = store();
        let err = store.update(ItemId::new(999), "Resistor Kit", 45.0).unwrap_err();
        assert!(matches!(err, StoreError::Domain(DomainError::NotFound)));
    }

    #[test]
    fn increment_raises_count_basis_and_investment_together() {
        let (_, mut store) = store();
        let id = store.create("Resistor Kit", 45.0, 20).unwrap();
        let before = store.get(id).unwrap().initial_investment();

        let outcome = store.adjust_quantity(id, 1).unwrap();
        assert_eq!(outcome, StockAdjustment::Applied { quantity: 21 });

        let item = store.get(id).unwrap();
        assert_eq!(item.initial_quantity(), 21);
        assert_eq!(item.initial_investment(), before + 45.0);
    }

    #[test]
    fn decrement_lowers_the_count_only() {
        let (_, mut store) = store();
        let id = store.create("Resistor Kit", 45.0, 20).unwrap();
        let outcome = store.adjust_quantity(id, -1).unwrap();
        assert_eq!(outcome, StockAdjustment::Applied { quantity: 19 });
        assert_eq!(store.get(id).unwrap().initial_quantity(), 20);
    }

    #[test]
    fn decrement_at_zero_is_a_warning_no_op() {
        let (snapshots, mut store) = store();
        let id = store.create("Power Supply Cable", 80.0, 0).unwrap();
        let saves_before = snapshots.save_count();

        let outcome = store.adjust_quantity(id, -1).unwrap();
        assert_eq!(outcome, StockAdjustment::Refused);
        assert_eq!(store.get(id).unwrap().quantity(), 0);
        assert_eq!(snapshots.save_count(), saves_before);
    }

    #[test]
    fn zero_delta_is_rejected() {
        let (_, mut store) = store();
        let id = store.create("Resistor Kit", 45.0, 20).unwrap();
        let err = store.adjust_quantity(id, 0).unwrap_err();
        assert!(matches!(err, StoreError::Domain(DomainError::Validation(_))));
    }

    #[test]
    fn adjusting_a_missing_id_fails() {
        let (_, mut store) = store();
        let err = store.adjust_quantity(ItemId::new(999), 1).unwrap_err();
        assert!(matches!(err, StoreError::Domain(DomainError::NotFound)));
    }

    #[test]
    fn delete_is_idempotent_and_persists_either_way() {
        let (snapshots, mut store) = store();
        let id = store.create("Resistor Kit", 45.0, 20).unwrap();

        assert!(store.delete(id).unwrap());
        assert!(!store.delete(id).unwrap());
        assert!(store.is_empty());
        // create + two deletes
        assert_eq!(snapshots.save_count(), 3);
    }

    #[test]
    fn counter_resumes_past_the_highest_loaded_suffix() {
        let loaded = vec![
            Item::with_stock(ItemId::new(100), "Oscilloscope Probe", 1250.0, 5),
            Item::with_stock(ItemId::new(104), "Digital Storage Oscilloscope", 35000.0, 1),
        ];
        let mut store = InventoryStore::from_snapshot(InMemorySnapshotStore::new(), loaded);
        assert_eq!(store.next_id(), ItemId::new(105));
        let id = store.create("Resistor Kit", 45.0, 20).unwrap();
        assert_eq!(id, ItemId::new(105));
    }

    #[test]
    fn counter_floor_applies_to_an_empty_snapshot() {
        let store = InventoryStore::from_snapshot(InMemorySnapshotStore::new(), vec![]);
        assert_eq!(store.next_id(), ItemId::new(100));
    }

    #[test]
    fn items_iterate_in_creation_order() {
        let (_, mut store) = store();
        store.create("Oscilloscope Probe", 1250.0, 5).unwrap();
        store.create("Breadboard (Large)", 250.5, 45).unwrap();
        store.create("Power Supply Cable", 80.0, 0).unwrap();

        let names: Vec<&str> = store.items().map(Item::name).collect();
        assert_eq!(
            names,
            vec!["Oscilloscope Probe", "Breadboard (Large)", "Power Supply Cable"]
        );
    }

    /// Snapshot store that fails every save, for storage-failure paths.
    struct BrokenSnapshotStore;

    impl SnapshotStore for BrokenSnapshotStore {
        fn save(&self, _items: &[Item]) -> Result<(), StorageError> {
            Err(StorageError::Io("disk full".to_string()))
        }

        fn load(&self) -> Result<Option<Vec<Item>>, StorageError> {
            Ok(None)
        }
    }

    #[test]
    fn failed_save_rolls_the_mutation_back() {
        let mut store = InventoryStore::new(BrokenSnapshotStore);
        let err = store.create("Resistor Kit", 45.0, 20).unwrap_err();
        assert!(matches!(err, StoreError::Storage(StorageError::Io(_))));
        assert!(store.is_empty());
        assert_eq!(store.next_id(), ItemId::new(100));
    }

    proptest! {
        #[test]
        fn created_items_get_an_unseen_id_and_matching_basis(
            name in "[A-Za-z][A-Za-z ]{2,19}",
            price in 0.01f64..50_000.0,
            quantity in 0i64..1_000,
        ) {
            let (_, mut store) = store();
            store.create("Oscilloscope Probe", 1250.0, 5).unwrap();

            let id = store.create(&name, price, quantity).unwrap();
            prop_assert_eq!(id, ItemId::new(101));

            let item = store.get(id).unwrap();
            prop_assert_eq!(i64::from(item.quantity()), quantity);
            prop_assert_eq!(item.quantity(), item.initial_quantity());
        }

        #[test]
        fn restock_raises_investment_by_exactly_the_unit_price(
            price in 0.01f64..50_000.0,
            quantity in 0i64..1_000,
        ) {
            let (_, mut store) = store();
            let id = store.create("Oscilloscope Probe", price, quantity).unwrap();
            let before = store.get(id).unwrap().initial_investment();

            store.adjust_quantity(id, 1).unwrap();
            let after = store.get(id).unwrap().initial_investment();
            prop_assert!((after - (before + price)).abs() < 1e-6);
        }
    }
}
