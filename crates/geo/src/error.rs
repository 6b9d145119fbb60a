//! Position-lookup failures.

use thiserror::Error;

/// Terminal failure of a position lookup.
///
/// Lookups are one-shot: none of these are retried, and each failure ends
/// only the request that raised it. Messages are the exact strings the
/// dashboard shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeoError {
    #[error("ACCESS DENIED: Location permission blocked.")]
    PermissionDenied,

    #[error("ERROR: Location data unavailable.")]
    PositionUnavailable,

    #[error("Geolocation Error. Check permissions.")]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_dashboard_surfaces() {
        assert_eq!(
            GeoError::PermissionDenied.to_string(),
            "ACCESS DENIED: Location permission blocked."
        );
        assert_eq!(
            GeoError::PositionUnavailable.to_string(),
            "ERROR: Location data unavailable."
        );
        assert_eq!(
            GeoError::Unknown.to_string(),
            "Geolocation Error. Check permissions."
        );
    }
}
