//! Spatial reference for distance annotation and ordering

use super::filter::{PlaceFilter, SearchMode};
use crate::geo::{Bounds, Coordinate};

/// The point distances are measured from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpatialContext {
    /// User location (radius mode)
    Point(Coordinate),
    /// Current viewport; distances are measured from its midpoint
    Viewport(Bounds),
}

impl SpatialContext {
    /// Pick the context matching the filter's search mode
    ///
    /// Viewport mode with bounds yields `Viewport`; anything else falls back
    /// to the user's location.
    #[must_use]
    pub fn for_filter(filter: &PlaceFilter, user_location: Coordinate) -> Self {
        match (filter.search_mode, filter.map_bounds) {
            (SearchMode::Viewport, Some(bounds)) => Self::Viewport(bounds),
            _ => Self::Point(user_location),
        }
    }

    /// Reference coordinate for distance computation
    #[must_use]
    pub fn reference(&self) -> Coordinate {
        match self {
            Self::Point(c) => *c,
            Self::Viewport(b) => b.center(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::DEFAULT_CENTER;

    #[test]
    fn test_radius_mode_uses_user_location() {
        let ctx = SpatialContext::for_filter(&PlaceFilter::default(), DEFAULT_CENTER);
        assert_eq!(ctx, SpatialContext::Point(DEFAULT_CENTER));
        assert_eq!(ctx.reference(), DEFAULT_CENTER);
    }

    #[test]
    fn test_viewport_mode_uses_midpoint() {
        let bounds = Bounds::new(Coordinate::new(37.0, 126.0), Coordinate::new(38.0, 128.0));
        let filter = PlaceFilter::builder().viewport(bounds).build();
        let ctx = SpatialContext::for_filter(&filter, DEFAULT_CENTER);
        assert_eq!(ctx.reference(), Coordinate::new(37.5, 127.0));
    }

    #[test]
    fn test_viewport_without_bounds_falls_back() {
        let filter = PlaceFilter::builder()
            .search_mode(SearchMode::Viewport)
            .build();
        let ctx = SpatialContext::for_filter(&filter, DEFAULT_CENTER);
        assert_eq!(ctx, SpatialContext::Point(DEFAULT_CENTER));
    }
}
