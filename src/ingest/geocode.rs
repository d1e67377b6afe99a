//! Address geocoding
//!
//! The [`Geocoder`] trait is the seam for a real geocoding service. The
//! bundled [`RegionCentroidGeocoder`] works offline by placing an address at
//! the center of the region it names.

use crate::geo::Coordinate;
use crate::region;
use moka::sync::Cache;
use thiserror::Error;

/// Reasons an address could not be located
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeocodeError {
    #[error("No location found for '{0}'")]
    NotFound(String),

    #[error("Geocoding service failed: {0}")]
    Service(String),
}

/// Resolves addresses to coordinates
pub trait Geocoder {
    /// Locate `address`
    ///
    /// # Errors
    ///
    /// Returns `GeocodeError` if the address cannot be located.
    fn geocode(&self, address: &str) -> Result<Coordinate, GeocodeError>;
}

impl<T: Geocoder + ?Sized> Geocoder for &T {
    fn geocode(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        (**self).geocode(address)
    }
}

/// Places an address at the center of its region
///
/// Addresses that name no region are not found.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionCentroidGeocoder;

impl Geocoder for RegionCentroidGeocoder {
    fn geocode(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        region::detect(address)
            .map(region::Region::center)
            .ok_or_else(|| GeocodeError::NotFound(address.trim().to_string()))
    }
}

/// Geocoder wrapper that remembers results for the lifetime of one batch
pub(crate) struct BatchGeocoder<'g, G: Geocoder + ?Sized> {
    inner: &'g G,
    cache: Cache<String, Result<Coordinate, GeocodeError>>,
}

impl<'g, G: Geocoder + ?Sized> BatchGeocoder<'g, G> {
    pub(crate) fn new(inner: &'g G, max_capacity: u64) -> Self {
        Self {
            inner,
            cache: Cache::builder().max_capacity(max_capacity).build(),
        }
    }

    /// Geocode `address`, calling the inner geocoder once per distinct address
    pub(crate) fn geocode(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        let key = address.trim().to_string();
        self.cache.get_with(key, || self.inner.geocode(address))
    }
}
