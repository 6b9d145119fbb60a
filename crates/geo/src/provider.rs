//! Position-provider port.

use crate::distance::Coordinates;
use crate::error::GeoError;

/// Source of the caller's current position (the device boundary).
pub trait PositionProvider {
    /// Best-effort single position fix.
    fn current_position(&self) -> Result<Coordinates, GeoError>;
}

/// Fixed-answer provider for tests and dev.
#[derive(Debug, Clone, Copy)]
pub struct StubPositionProvider(pub Result<Coordinates, GeoError>);

impl StubPositionProvider {
    pub fn at(coords: Coordinates) -> Self {
        Self(Ok(coords))
    }

    pub fn failing(error: GeoError) -> Self {
        Self(Err(error))
    }
}

impl PositionProvider for StubPositionProvider {
    fn current_position(&self) -> Result<Coordinates, GeoError> {
        self.0
    }
}
