//! Testing utilities for placefinder
//!
//! Fixture builders for places and repositories, plus a storage double that
//! fails on demand. Only available when compiled with `cfg(test)`.

use crate::geo::Coordinate;
use crate::place::seed::seed_places;
use crate::place::{Category, Place, PlaceRecord};
use crate::repository::PlaceRepository;
use crate::store::{KeyValueStore, StoreError};
use std::fs;
use std::path::{Path, PathBuf};

/// Build a minimal ready-mix place in Seoul
///
/// # Panics
/// Panics if the coordinate is invalid.
pub fn place(id: &str, name: &str, lat: f64, lng: f64) -> Place {
    PlaceRecord::new(
        id,
        name,
        "서울 중구 세종대로",
        Category::ReadyMixPlant,
        Coordinate::new(lat, lng),
    )
    .build()
    .expect("Failed to build test place")
}

/// Repository holding the seven built-in places
///
/// # Panics
/// Panics if the seed data fails validation.
pub fn seed_repository() -> PlaceRepository {
    PlaceRepository::with_places(seed_places().expect("Seed places must be valid"))
}

/// Write `content` to `name` inside `dir`, returning the full path
///
/// # Panics
/// Panics if the file cannot be written.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// Storage double whose reads and/or writes fail
#[derive(Debug, Clone, Copy)]
pub struct FailingStore {
    fail_reads: bool,
}

impl FailingStore {
    /// Reads and writes both fail
    pub const fn always() -> Self {
        Self { fail_reads: true }
    }

    /// Reads succeed with nothing stored; writes fail
    pub const fn write_only_fails() -> Self {
        Self { fail_reads: false }
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads {
            Err(StoreError::Unavailable("read refused".into()))
        } else {
            Ok(None)
        }
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("write refused".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_fixture() {
        let p = place("x", "이름", 37.5, 127.0);
        assert_eq!(p.id(), "x");
        assert_eq!(p.category(), Category::ReadyMixPlant);
    }

    #[test]
    fn test_failing_store_modes() {
        assert!(FailingStore::always().get("k").is_err());
        assert_eq!(FailingStore::write_only_fails().get("k").unwrap(), None);
        assert!(FailingStore::write_only_fails().set("k", "v").is_err());
    }
}
