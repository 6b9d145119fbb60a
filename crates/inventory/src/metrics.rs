//! Derived inventory metrics.
//!
//! Pure functions over item snapshots, recomputed on demand — at lab scale
//! the scans are O(n) over a handful of rows, so nothing is cached.

use crate::item::Item;

/// On-hand count below which an item needs restocking.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Stock-level classification for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    Zero,
    Low,
    Healthy,
}

impl StockStatus {
    pub fn classify(quantity: u32) -> Self {
        if quantity == 0 {
            StockStatus::Zero
        } else if quantity < LOW_STOCK_THRESHOLD {
            StockStatus::Low
        } else {
            StockStatus::Healthy
        }
    }

    /// Dashboard pill label.
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Zero => "ZERO",
            StockStatus::Low => "LOW",
            StockStatus::Healthy => "HEALTHY",
        }
    }
}

/// Sum of `current_value` over the snapshot.
pub fn total_current_value<'a>(items: impl IntoIterator<Item = &'a Item>) -> f64 {
    items.into_iter().map(Item::current_value).sum()
}

/// Sum of `initial_investment` over the snapshot.
pub fn total_investment<'a>(items: impl IntoIterator<Item = &'a Item>) -> f64 {
    items.into_iter().map(Item::initial_investment).sum()
}

/// Items under the restock threshold.
///
/// Counts every quantity below the threshold, including zero: an empty item
/// classifies as [`StockStatus::Zero`] yet still raises the restock alert.
pub fn low_stock_count<'a>(items: impl IntoIterator<Item = &'a Item>) -> usize {
    items
        .into_iter()
        .filter(|item| item.quantity() < LOW_STOCK_THRESHOLD)
        .count()
}

/// Aggregate dashboard figures for one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct StockSummary {
    pub item_count: usize,
    pub total_current_value: f64,
    pub total_investment: f64,
    pub low_stock_count: usize,
}

impl StockSummary {
    /// Restock banner text, when any item is under the threshold.
    pub fn restock_alert(&self) -> Option<String> {
        if self.low_stock_count > 0 {
            Some(format!(
                "ALERT: {} items need restocking!",
                self.low_stock_count
            ))
        } else {
            None
        }
    }
}

/// Compute every dashboard figure in one pass.
pub fn summarize<'a>(items: impl IntoIterator<Item = &'a Item>) -> StockSummary {
    let mut summary = StockSummary {
        item_count: 0,
        total_current_value: 0.0,
        total_investment: 0.0,
        low_stock_count: 0,
    };

    for item in items {
        summary.item_count += 1;
        summary.total_current_value += item.current_value();
        summary.total_investment += item.initial_investment();
        if item.quantity() < LOW_STOCK_THRESHOLD {
            summary.low_stock_count += 1;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use labstock_core::ItemId;

    fn fixture(quantities: &[u32]) -> Vec<Item> {
        quantities
            .iter()
            .enumerate()
            .map(|(i, &q)| {
                Item::with_stock(
                    ItemId::new(100 + i as u32),
                    format!("Item {i}"),
                    10.0,
                    q,
                )
            })
            .collect()
    }

    #[test]
    fn classifies_threshold_boundaries_exactly() {
        assert_eq!(StockStatus::classify(0), StockStatus::Zero);
        assert_eq!(StockStatus::classify(1), StockStatus::Low);
        assert_eq!(StockStatus::classify(9), StockStatus::Low);
        assert_eq!(StockStatus::classify(10), StockStatus::Healthy);
    }

    #[test]
    fn status_labels_match_the_dashboard_pills() {
        assert_eq!(StockStatus::classify(0).label(), "ZERO");
        assert_eq!(StockStatus::classify(5).label(), "LOW");
        assert_eq!(StockStatus::classify(45).label(), "HEALTHY");
    }

    #[test]
    fn counts_every_item_under_the_threshold() {
        let items = fixture(&[5, 45, 0, 7, 1]);
        assert_eq!(low_stock_count(&items), 4);
    }

    // The alert count and the status classification deliberately disagree
    // about empty items: quantity 0 classifies as Zero but still counts
    // toward the restock alert.
    #[test]
    fn zero_quantity_items_still_count_toward_low_stock() {
        let items = fixture(&[0]);
        assert_eq!(StockStatus::classify(items[0].quantity()), StockStatus::Zero);
        assert_eq!(low_stock_count(&items), 1);
    }

    #[test]
    fn totals_sum_value_and_investment_separately() {
        let items = vec![
            Item::new(ItemId::new(100), "Oscilloscope Probe", 1250.0, 5, 10),
            Item::new(ItemId::new(101), "Power Supply Cable", 80.0, 0, 10),
        ];
        assert_eq!(total_current_value(&items), 6250.0);
        assert_eq!(total_investment(&items), 13300.0);
    }

    #[test]
    fn summarize_matches_the_individual_metrics() {
        let items = fixture(&[5, 45, 0, 7, 1]);
        let summary = summarize(&items);
        assert_eq!(summary.item_count, 5);
        assert_eq!(summary.low_stock_count, low_stock_count(&items));
        assert_eq!(summary.total_current_value, total_current_value(&items));
        assert_eq!(summary.total_investment, total_investment(&items));
        assert_eq!(
            summary.restock_alert().unwrap(),
            "ALERT: 4 items need restocking!"
        );
    }

    #[test]
    fn healthy_inventory_raises_no_alert() {
        let summary = summarize(&fixture(&[45, 12]));
        assert!(summary.restock_alert().is_none());
    }
}
