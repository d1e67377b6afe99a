//! Error types for coordinate validation

use thiserror::Error;

/// Errors raised when a coordinate cannot be accepted
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    /// Latitude or longitude is NaN or infinite
    #[error("Coordinate is not finite: ({lat}, {lng})")]
    NotFinite { lat: f64, lng: f64 },

    /// Latitude outside [-90, 90]
    #[error("Latitude out of range: {0}")]
    LatitudeOutOfRange(f64),

    /// Longitude outside [-180, 180]
    #[error("Longitude out of range: {0}")]
    LongitudeOutOfRange(f64),
}
