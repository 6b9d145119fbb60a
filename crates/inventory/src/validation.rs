//! Item-entry form rules.
//!
//! Stateless checks that return the full, ordered list of violations; an
//! empty list means the input is valid. Messages are shown to the user
//! verbatim, so they are fixed strings.

pub(crate) const NAME_TOO_SHORT: &str = "Item Name must be at least 3 characters.";
pub(crate) const PRICE_NOT_POSITIVE: &str = "Unit Price must be a positive number.";
pub(crate) const QUANTITY_NEGATIVE: &str = "Quantity must be zero or a positive integer.";

/// Validate an item entry.
///
/// `quantity` is `None` in edit mode, where the stock count is not part of
/// the form and keeps its current value.
pub fn validate_item_entry(name: &str, unit_price: f64, quantity: Option<i64>) -> Vec<String> {
    let mut errors = Vec::new();

    if name.chars().count() < 3 {
        errors.push(NAME_TOO_SHORT.to_string());
    }
    if !(unit_price.is_finite() && unit_price > 0.0) {
        errors.push(PRICE_NOT_POSITIVE.to_string());
    }
    if let Some(quantity) = quantity {
        if quantity < 0 {
            errors.push(QUANTITY_NEGATIVE.to_string());
        }
    }

    errors
}
