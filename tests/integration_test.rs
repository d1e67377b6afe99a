//! Integration tests for placefinder
//!
//! These tests run complete flows through the public API: loading places,
//! importing sheets, filtering, and persisting favorites and locations in a
//! temporary sled database.

use placefinder::{
    favorites::FavoritesStore,
    geo::{Bounds, Coordinate, DEFAULT_CENTER},
    ingest::{self, IngestOptions, RegionCentroidGeocoder},
    location::{LocationTracker, TrackerOptions},
    place::{Category, Place, seed::seed_places},
    query::{PlaceFilter, SpatialContext, evaluate},
    region::Region,
    repository::PlaceRepository,
    store::SledStore,
};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Helper function to build the seeded repository
fn seeded() -> PlaceRepository {
    PlaceRepository::with_places(seed_places().unwrap())
}

/// Helper function to write a CSV sheet into `dir`
fn write_sheet(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn ids(matches: &[placefinder::query::PlaceMatch<'_>]) -> Vec<String> {
    matches.iter().map(|m| m.place.id().to_string()).collect()
}

fn search(
    repo: &PlaceRepository,
    filter: &PlaceFilter,
    origin: Coordinate,
    favorites: Option<&BTreeSet<String>>,
) -> Vec<String> {
    let context = SpatialContext::for_filter(filter, origin);
    ids(&evaluate(repo.list(), filter, &context, favorites))
}

#[test]
fn test_seed_search_around_city_hall() {
    let repo = seeded();
    let filter = PlaceFilter::builder().radius(10_000.0).build();
    assert_eq!(search(&repo, &filter, DEFAULT_CENTER, None), ["3", "1", "2"]);
}

#[test]
fn test_ready_mix_plants_across_the_capital_region() {
    let repo = seeded();
    let filter = PlaceFilter::builder()
        .categories([Category::ReadyMixPlant])
        .radius(500_000.0)
        .build();
    assert_eq!(search(&repo, &filter, DEFAULT_CENTER, None), ["2", "7", "5"]);
}

#[test]
fn test_imported_sheet_joins_seed_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sheet(
        dir.path(),
        "busan.csv",
        "상호,소재지,대표,연락처\n\
         해운대 레미콘,부산광역시 해운대구 센텀로,김부산,0517654321\n\
         어딘가 레미콘,주소 미상,,\n",
    );

    let report = ingest::ingest_file(
        &path,
        Category::ReadyMixPlant,
        &IngestOptions {
            id_prefix: Some("busan".into()),
            ..IngestOptions::default()
        },
        &RegionCentroidGeocoder,
    )
    .unwrap();
    assert_eq!(report.places.len(), 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.places[0].tel(), Some("051-765-4321"));

    let mut repo = seeded();
    assert_eq!(repo.add_places(report.places.clone()), 1);
    // Re-importing the same sheet adds nothing
    assert_eq!(repo.add_places(report.places), 0);
    assert_eq!(repo.len(), 8);

    let filter = PlaceFilter::builder()
        .region(Region::Busan)
        .radius(50_000.0)
        .build();
    assert_eq!(
        search(&repo, &filter, Region::Busan.center(), None),
        ["busan-0", "6"]
    );
}

#[test]
fn test_viewport_search_measures_from_midpoint() {
    let repo = seeded();
    let bounds = Bounds::new(Coordinate::new(37.30, 126.60), Coordinate::new(37.60, 127.20));
    let filter = PlaceFilter::builder().radius(1.0).viewport(bounds).build();
    // midpoint (37.45, 126.90); the user location is not consulted
    let found = search(&repo, &filter, Coordinate::new(0.0, 0.0), None);
    assert_eq!(found, ["7", "3", "1", "2", "5", "4"]);
}

#[test]
fn test_favorites_persist_and_filter() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = SledStore::open(dir.path()).unwrap();
        let favorites = FavoritesStore::new(store);
        assert!(favorites.toggle("2"));
        assert!(favorites.toggle("6"));
        assert!(favorites.toggle("ghost"));
    }

    let store = SledStore::open(dir.path()).unwrap();
    let favorites = FavoritesStore::new(store);
    let snapshot = favorites.snapshot();
    assert_eq!(snapshot.len(), 3);

    let repo = seeded();
    let filter = PlaceFilter::builder()
        .radius(1_000_000.0)
        .favorites_only(true)
        .build();
    assert_eq!(
        search(&repo, &filter, DEFAULT_CENTER, Some(&snapshot)),
        ["2", "6"]
    );

    let context = SpatialContext::for_filter(&PlaceFilter::default(), DEFAULT_CENTER);
    let all = evaluate(repo.list(), &PlaceFilter::default(), &context, Some(&snapshot));
    assert!(all.iter().all(|m| m.favorite == snapshot.contains(m.place.id())));
}

#[test]
fn test_last_location_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let options = TrackerOptions {
        persist_last_location: true,
        ..TrackerOptions::default()
    };
    let sanbon = Coordinate::new(37.358, 126.933);

    {
        let store = SledStore::open(dir.path()).unwrap();
        let mut tracker = LocationTracker::new(store, options);
        assert_eq!(tracker.coordinates(), DEFAULT_CENTER);
        assert!(tracker.update(sanbon, Instant::now()));
    }

    let store = SledStore::open(dir.path()).unwrap();
    let tracker = LocationTracker::new(store, options);
    assert_eq!(tracker.coordinates(), sanbon);

    // Searching from the restored location picks the nearby plant first
    let repo = seeded();
    let filter = PlaceFilter::builder().radius(30_000.0).build();
    let found = search(&repo, &filter, tracker.coordinates(), None);
    assert_eq!(found.first().map(String::as_str), Some("7"));
}

#[test]
fn test_place_json_round_trip_keeps_validation() {
    let place = seed_places().unwrap().remove(2);
    let json = serde_json::to_string(&place).unwrap();
    let back: Place = serde_json::from_str(&json).unwrap();
    assert_eq!(back, place);

    let broken = json.replace("\"name\":\"논현 골재상사\"", "\"name\":\"  \"");
    assert!(serde_json::from_str::<Place>(&broken).is_err());
}
