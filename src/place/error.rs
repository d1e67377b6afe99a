//! Errors raised when a place record cannot become a [`Place`](super::Place)

use crate::geo::GeoError;
use thiserror::Error;

/// Reasons a place record is rejected
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlaceValidationError {
    /// A mandatory text field is empty after trimming
    #[error("Place '{id}' has an empty {field}")]
    EmptyField { id: String, field: &'static str },

    /// Coordinates are missing, non-finite or out of range
    #[error("Place '{id}' has invalid coordinates: {source}")]
    InvalidCoordinate {
        id: String,
        #[source]
        source: GeoError,
    },

    /// Category string names no known category
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}
