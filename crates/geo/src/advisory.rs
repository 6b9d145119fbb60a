//! One-shot supplier-logistics report.

use crate::distance::{ReferencePoint, distance_km};
use crate::error::GeoError;
use crate::provider::PositionProvider;

/// Distance of the reporting user from a reference point.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceReport {
    pub reference: &'static str,
    pub distance_km: f64,
}

impl DistanceReport {
    /// Report line for the dashboard modal.
    pub fn headline(&self) -> String {
        format!(
            "Distance from {}: {:.2} KM",
            self.reference, self.distance_km
        )
    }
}

/// Ask the provider for one position fix and report the distance from
/// `reference`. Failure is terminal for this request; there is no retry.
pub fn locate(
    provider: &impl PositionProvider,
    reference: &ReferencePoint,
) -> Result<DistanceReport, GeoError> {
    let position = provider.current_position()?;
    Ok(DistanceReport {
        reference: reference.name,
        distance_km: distance_km(position, reference.coords),
    })
}
