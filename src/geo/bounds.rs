//! Axis-aligned latitude/longitude boxes for viewport queries

use super::{Coordinate, EARTH_RADIUS_M};
use serde::{Deserialize, Serialize};

/// A map viewport described by its southwest and northeast corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub sw: Coordinate,
    pub ne: Coordinate,
}

impl Bounds {
    #[must_use]
    pub const fn new(sw: Coordinate, ne: Coordinate) -> Self {
        Self { sw, ne }
    }

    /// Whether `coord` lies inside the closed box `[sw.lat, ne.lat] x [sw.lng, ne.lng]`
    ///
    /// A malformed box (sw north or east of ne) contains nothing.
    #[must_use]
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.lat >= self.sw.lat
            && coord.lat <= self.ne.lat
            && coord.lng >= self.sw.lng
            && coord.lng <= self.ne.lng
    }

    /// Arithmetic midpoint of the two corners
    #[must_use]
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.sw.lat + self.ne.lat) / 2.0,
            (self.sw.lng + self.ne.lng) / 2.0,
        )
    }

    /// True when sw is south-west of (or equal to) ne
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.sw.lat <= self.ne.lat && self.sw.lng <= self.ne.lng
    }

    /// Smallest box containing every point within `radius_m` meters of `center`
    ///
    /// The longitude half-width uses the exact spherical extent
    /// `asin(sin(d) / cos(lat))`, which is wider than the naive `d / cos(lat)`
    /// away from the equator. Circles reaching a pole span all longitudes.
    #[must_use]
    pub fn circumscribing(center: Coordinate, radius_m: f64) -> Self {
        let angular = radius_m / EARTH_RADIUS_M;
        let d_lat = angular.to_degrees();

        let lat_rad = center.lat.to_radians();
        let ratio = angular.sin() / lat_rad.cos();
        let d_lng = if center.lat.abs() + d_lat >= 90.0 || ratio >= 1.0 {
            180.0
        } else {
            ratio.asin().to_degrees()
        };

        Self {
            sw: Coordinate::new((center.lat - d_lat).max(-90.0), (center.lng - d_lng).max(-180.0)),
            ne: Coordinate::new((center.lat + d_lat).min(90.0), (center.lng + d_lng).min(180.0)),
        }
    }
}
