//! Locate-supplier action behind the dashboard button.

use labstock_geo::{DistanceReport, GeoError, LAB_DEPOT, PositionProvider, locate};

/// Area the procurement search is scoped to.
const SUPPLIER_SEARCH_AREA: &str = "Pimpri Chinchwad";

/// One-shot logistics report: how far the user is from the depot.
pub fn locate_supplier(provider: &impl PositionProvider) -> Result<DistanceReport, GeoError> {
    locate(provider, &LAB_DEPOT)
}

/// Procurement search link shown under the report.
pub fn supplier_search_url(item_name: &str) -> String {
    format!(
        "https://www.google.com/maps/search/buy+{}+suppliers+near+{}",
        item_name.replace(' ', "+"),
        SUPPLIER_SEARCH_AREA.replace(' ', "+")
    )
}
