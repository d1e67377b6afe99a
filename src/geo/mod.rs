//! Geographic primitives
//!
//! Coordinates, viewport boxes and great-circle distance. All distances in
//! this crate are meters; nothing converts to kilometers except the display
//! helpers in [`format`].
//!
//! # Examples
//!
//! ```
//! use placefinder::geo::{Coordinate, distance};
//!
//! let city_hall = Coordinate::new(37.5665, 126.9780);
//! let gangnam = Coordinate::new(37.4999, 127.0366);
//! let meters = distance(city_hall, gangnam);
//! assert!((meters - 9030.0).abs() < 5.0);
//! ```

pub mod bounds;
pub mod error;
pub mod format;

pub use bounds::Bounds;
pub use error::GeoError;
pub use format::format_distance;

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the haversine formula, in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Seoul City Hall, the capital-region default reference point
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: 37.5665,
    lng: 126.9780,
};

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Create a coordinate without validation
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Create a coordinate, rejecting non-finite or out-of-range values
    ///
    /// # Errors
    ///
    /// Returns `GeoError` if either component is NaN/infinite or outside
    /// the valid latitude/longitude range.
    pub fn checked(lat: f64, lng: f64) -> Result<Self, GeoError> {
        let coord = Self { lat, lng };
        coord.validate()?;
        Ok(coord)
    }

    /// Check that both components are finite and within range
    ///
    /// # Errors
    ///
    /// Returns `GeoError` describing the first violated constraint.
    pub fn validate(&self) -> Result<(), GeoError> {
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(GeoError::NotFinite {
                lat: self.lat,
                lng: self.lng,
            });
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(GeoError::LatitudeOutOfRange(self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(GeoError::LongitudeOutOfRange(self.lng));
        }
        Ok(())
    }
}

/// Great-circle distance between two coordinates in meters
///
/// Haversine on a spherical Earth of radius [`EARTH_RADIUS_M`]. NaN inputs
/// yield NaN.
#[must_use]
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lng - a.lng).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUSAN: Coordinate = Coordinate::new(35.1631, 129.1639);
    const INCHEON: Coordinate = Coordinate::new(37.4056, 126.6776);

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(distance(DEFAULT_CENTER, DEFAULT_CENTER), 0.0);
        assert_eq!(distance(BUSAN, BUSAN), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        assert_eq!(distance(DEFAULT_CENTER, BUSAN), distance(BUSAN, DEFAULT_CENTER));
        assert_eq!(distance(INCHEON, BUSAN), distance(BUSAN, INCHEON));
    }

    #[test]
    fn test_triangle_inequality() {
        let ab = distance(DEFAULT_CENTER, INCHEON);
        let bc = distance(INCHEON, BUSAN);
        let ac = distance(DEFAULT_CENTER, BUSAN);
        assert!(ac <= ab + bc + 1e-6);
    }

    #[test]
    fn test_known_distance_berlin_paris() {
        let berlin = Coordinate::new(52.5200, 13.4050);
        let paris = Coordinate::new(48.8566, 2.3522);
        let d = distance(berlin, paris);
        assert!((d - 877_463.0).abs() < 100.0, "got {d}");
    }

    #[test]
    fn test_seoul_to_busan_is_roughly_330km() {
        let d = distance(DEFAULT_CENTER, BUSAN);
        assert!((d - 331_229.0).abs() < 100.0, "got {d}");
    }

    #[test]
    fn test_nan_propagates() {
        let bad = Coordinate::new(f64::NAN, 127.0);
        assert!(distance(bad, DEFAULT_CENTER).is_nan());
    }

    #[test]
    fn test_checked_rejects_invalid() {
        assert!(Coordinate::checked(37.0, 127.0).is_ok());
        assert!(matches!(
            Coordinate::checked(f64::NAN, 127.0),
            Err(GeoError::NotFinite { .. })
        ));
        assert_eq!(
            Coordinate::checked(91.0, 0.0),
            Err(GeoError::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            Coordinate::checked(0.0, -180.5),
            Err(GeoError::LongitudeOutOfRange(-180.5))
        );
    }

    #[test]
    fn test_checked_accepts_boundaries() {
        assert!(Coordinate::checked(90.0, 180.0).is_ok());
        assert!(Coordinate::checked(-90.0, -180.0).is_ok());
    }
}
