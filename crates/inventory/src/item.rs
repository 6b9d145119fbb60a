use serde::{Deserialize, Serialize};

use labstock_core::{Entity, ItemId};

/// One inventory record.
///
/// `initial_quantity` is the cumulative investment basis, not a true
/// starting value: restocks raise it in lockstep with `quantity`, while
/// withdrawals lower `quantity` alone. The persisted record keeps the
/// camelCase field names of the storage slot format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    id: ItemId,
    name: String,
    unit_price: f64,
    quantity: u32,
    initial_quantity: u32,
}

impl Item {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        unit_price: f64,
        quantity: u32,
        initial_quantity: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            quantity,
            initial_quantity,
        }
    }

    /// Fresh stock entry: the investment basis starts at the received count.
    pub fn with_stock(id: ItemId, name: impl Into<String>, unit_price: f64, quantity: u32) -> Self {
        Self::new(id, name, unit_price, quantity, quantity)
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn initial_quantity(&self) -> u32 {
        self.initial_quantity
    }

    /// Unit price × current on-hand count.
    pub fn current_value(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    /// Unit price × investment basis.
    pub fn initial_investment(&self) -> f64 {
        self.unit_price * f64::from(self.initial_quantity)
    }

    pub(crate) fn set_details(&mut self, name: impl Into<String>, unit_price: f64) {
        self.name = name.into();
        self.unit_price = unit_price;
    }

    /// Receive stock: the on-hand count and the investment basis move together.
    pub(crate) fn restock(&mut self, count: u32) {
        self.quantity = self.quantity.saturating_add(count);
        self.initial_quantity = self.initial_quantity.saturating_add(count);
    }

    /// Issue stock. Callers must have checked sufficiency; the count never
    /// goes below zero.
    pub(crate) fn withdraw(&mut self, count: u32) {
        debug_assert!(self.quantity >= count);
        self.quantity = self.quantity.saturating_sub(count);
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &ItemId {
        &self.id
    }
}
