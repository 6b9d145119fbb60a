//! Raw item-form handling at the presentation boundary.
//!
//! The form submits field strings; numeric fields are parsed explicitly
//! here, and a field that does not parse is reported as its own failure
//! before any business rule runs.

use labstock_core::{DomainError, ItemId};
use labstock_inventory::{InventoryStore, SnapshotStore, StoreError};

/// Raw field strings exactly as the form submits them.
#[derive(Debug, Clone, Default)]
pub struct ItemForm {
    /// Hidden id field; empty in add mode.
    pub item_id: String,
    pub name: String,
    pub price: String,
    pub quantity: String,
}

/// What a successful submission did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Created(ItemId),
    Updated(ItemId),
}

fn parse_decimal(field: &str, raw: &str) -> Result<f64, DomainError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(DomainError::parse(field, trimmed)),
    }
}

fn parse_integer(field: &str, raw: &str) -> Result<i64, DomainError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| DomainError::parse(field, trimmed))
}

/// Apply a submitted item form.
///
/// An empty id field means add mode. A non-empty id means edit mode: the
/// quantity field is ignored and the current count kept, so only the name
/// and price rules run.
pub fn submit_item_form<S: SnapshotStore>(
    store: &mut InventoryStore<S>,
    form: &ItemForm,
) -> Result<FormOutcome, StoreError> {
    let name = form.name.trim();
    let price = parse_decimal("Unit Price", &form.price)?;

    if form.item_id.trim().is_empty() {
        let quantity = parse_integer("Quantity", &form.quantity)?;
        let id = store.create(name, price, quantity)?;
        Ok(FormOutcome::Created(id))
    } else {
        let id: ItemId = form.item_id.trim().parse()?;
        store.update(id, name, price)?;
        Ok(FormOutcome::Updated(id))
    }
}
