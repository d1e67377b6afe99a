//! Errors reported by strict filter validation
//!
//! Evaluation itself never fails; these are only returned by
//! [`PlaceFilter::validate`](super::PlaceFilter::validate).

use crate::geo::Bounds;
use thiserror::Error;

/// Inconsistent filter combinations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QueryError {
    /// Viewport mode selected without map bounds
    #[error("Viewport search requires map bounds")]
    MissingBounds,

    /// Southwest corner lies north or east of the northeast corner
    #[error("Map bounds are inverted: {0:?}")]
    MalformedBounds(Bounds),

    /// Radius mode with a zero, negative or NaN radius
    #[error("Search radius must be positive, got {0}")]
    InvalidRadius(f64),
}
