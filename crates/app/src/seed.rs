//! First-run demo inventory.

use labstock_core::ItemId;
use labstock_inventory::Item;

/// Demo stock written to a fresh slot so the dashboard is never empty.
///
/// Some rows carry an investment basis above their current count so every
/// stock state (zero, low, healthy) and both valuation totals show up on
/// first paint.
pub fn demo_items() -> Vec<Item> {
    vec![
        Item::new(ItemId::new(100), "Oscilloscope Probe", 1250.00, 5, 10),
        Item::new(ItemId::new(101), "Breadboard (Large)", 250.50, 45, 45),
        Item::new(ItemId::new(102), "Power Supply Cable", 80.00, 0, 10),
        Item::new(ItemId::new(103), "LED Pack (100pcs)", 35.00, 7, 20),
        Item::new(ItemId::new(104), "Digital Storage Oscilloscope", 35000.00, 1, 1),
    ]
}
