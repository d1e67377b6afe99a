//! User location tracking
//!
//! Wraps a stream of position fixes from an external provider. Fixes that
//! arrive faster than the minimum interval are dropped so downstream
//! recomputation is not thrashed. Provider failures are kept as a typed
//! error next to a coordinate that is always usable: the last accepted fix,
//! the persisted last-known location, or the configured default.

use crate::geo::{Coordinate, DEFAULT_CENTER};
use crate::store::{self, KeyValueStore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Storage key for the last accepted location
pub const LAST_LOCATION_KEY: &str = "last-location";

/// Default minimum spacing between accepted fixes
pub const MIN_UPDATE_INTERVAL: Duration = Duration::from_secs(1);

/// Reasons the provider could not deliver a position
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Position unavailable")]
    PositionUnavailable,
    #[error("Timed out waiting for a position")]
    Timeout,
    #[error("Geolocation is not supported")]
    Unsupported,
}

/// Persisted last-known location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastKnownLocation {
    #[serde(flatten)]
    pub coord: Coordinate,
    pub recorded_at: DateTime<Utc>,
}

/// Options for [`LocationTracker`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerOptions {
    /// Coordinate used before any fix when nothing is persisted
    pub fallback: Coordinate,
    pub min_interval: Duration,
    /// Restore and save the last accepted fix
    pub persist_last_location: bool,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_CENTER,
            min_interval: MIN_UPDATE_INTERVAL,
            persist_last_location: false,
        }
    }
}

/// Current user location with throttling and fallback
pub struct LocationTracker<S: KeyValueStore> {
    store: S,
    options: TrackerOptions,
    current: Coordinate,
    last_accepted: Option<Instant>,
    error: Option<LocationError>,
}

impl<S: KeyValueStore> LocationTracker<S> {
    /// Create a tracker, restoring the last-known location when enabled
    ///
    /// `min_interval` is raised to [`MIN_UPDATE_INTERVAL`] if shorter.
    pub fn new(store: S, mut options: TrackerOptions) -> Self {
        options.min_interval = options.min_interval.max(MIN_UPDATE_INTERVAL);
        let current = if options.persist_last_location {
            match store::get_json::<LastKnownLocation, _>(&store, LAST_LOCATION_KEY) {
                Ok(Some(last)) if last.coord.validate().is_ok() => last.coord,
                Ok(_) => options.fallback,
                Err(error) => {
                    tracing::warn!(%error, "Could not restore last location");
                    options.fallback
                }
            }
        } else {
            options.fallback
        };

        Self {
            store,
            options,
            current,
            last_accepted: None,
            error: None,
        }
    }

    /// Best known coordinate; always usable as a query reference
    pub const fn coordinates(&self) -> Coordinate {
        self.current
    }

    /// Most recent provider failure, cleared by the next accepted fix
    pub const fn error(&self) -> Option<LocationError> {
        self.error
    }

    /// True until the first fix or failure arrives
    pub const fn is_loading(&self) -> bool {
        self.last_accepted.is_none() && self.error.is_none()
    }

    /// Offer a new fix observed at `at`
    ///
    /// # Returns
    /// `true` if the fix was accepted; `false` if it was invalid or arrived
    /// within the minimum interval of the previous accepted fix.
    pub fn update(&mut self, coord: Coordinate, at: Instant) -> bool {
        if let Err(error) = coord.validate() {
            tracing::warn!(%error, "Ignoring invalid position fix");
            return false;
        }
        if let Some(prev) = self.last_accepted
            && at.saturating_duration_since(prev) < self.options.min_interval
        {
            return false;
        }

        self.accept(coord);
        self.last_accepted = Some(at);
        true
    }

    /// Record a provider failure; the current coordinate stays in place
    pub fn fail(&mut self, error: LocationError) {
        tracing::warn!(%error, "Error getting geolocation");
        self.error = Some(error);
    }

    /// Set the location by hand, bypassing throttling
    pub fn set_custom(&mut self, coord: Coordinate) -> bool {
        if coord.validate().is_err() {
            return false;
        }
        self.accept(coord);
        true
    }

    fn accept(&mut self, coord: Coordinate) {
        self.current = coord;
        self.error = None;
        if self.options.persist_last_location {
            let last = LastKnownLocation {
                coord,
                recorded_at: Utc::now(),
            };
            if let Err(error) = store::set_json(&self.store, LAST_LOCATION_KEY, &last) {
                tracing::warn!(%error, "Could not persist last location");
            }
        }
    }
}
