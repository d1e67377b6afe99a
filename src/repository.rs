//! In-memory place directory
//!
//! Holds every known place in insertion order. Identifiers are unique for
//! the lifetime of the repository: bulk insertion keeps the first place seen
//! for an id and silently drops later ones.

use crate::place::Place;
use std::collections::HashSet;

/// Insertion-ordered collection of places keyed by id
#[derive(Debug, Default, Clone)]
pub struct PlaceRepository {
    places: Vec<Place>,
    ids: HashSet<String>,
}

impl PlaceRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-filled with `places` (deduplicated)
    #[must_use]
    pub fn with_places(places: impl IntoIterator<Item = Place>) -> Self {
        let mut repo = Self::new();
        repo.add_places(places);
        repo
    }

    /// Append places whose id is not already present
    ///
    /// Input order is preserved. An id colliding with an existing entry, or
    /// with an earlier entry of the same batch, is dropped without touching
    /// the stored place.
    ///
    /// # Returns
    /// Number of places actually inserted
    pub fn add_places(&mut self, new_places: impl IntoIterator<Item = Place>) -> usize {
        let before = self.places.len();
        for place in new_places {
            if self.ids.insert(place.id().to_string()) {
                self.places.push(place);
            } else {
                tracing::debug!(id = place.id(), "Dropping place with duplicate id");
            }
        }
        let added = self.places.len() - before;
        tracing::debug!(added, total = self.places.len(), "Places added to repository");
        added
    }

    /// All places in insertion order
    #[must_use]
    pub fn list(&self) -> &[Place] {
        &self.places
    }

    /// Look up a place by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Place> {
        if !self.ids.contains(id) {
            return None;
        }
        self.places.iter().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{place, seed_repository};

    #[test]
    fn test_add_preserves_input_order() {
        let repo = seed_repository();
        let ids: Vec<&str> = repo.list().iter().map(Place::id).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7"]);
    }

    #[test]
    fn test_add_twice_is_idempotent() {
        let mut repo = seed_repository();
        let snapshot = repo.list().to_vec();

        let added = repo.add_places(snapshot.clone());
        assert_eq!(added, 0);
        assert_eq!(repo.list(), snapshot.as_slice());
    }

    #[test]
    fn test_existing_entry_never_overwritten() {
        let mut repo = seed_repository();
        let original = repo.get("1").cloned().unwrap();

        let added = repo.add_places([place("1", "완전히 다른 이름", 37.0, 127.0)]);
        assert_eq!(added, 0);
        assert_eq!(repo.get("1"), Some(&original));
        assert_eq!(repo.len(), 7);
    }

    #[test]
    fn test_duplicates_within_batch_first_wins() {
        let mut repo = PlaceRepository::new();
        let added = repo.add_places([
            place("a", "first", 37.0, 127.0),
            place("b", "other", 37.1, 127.1),
            place("a", "second", 37.2, 127.2),
        ]);
        assert_eq!(added, 2);
        assert_eq!(repo.get("a").map(Place::name), Some("first"));
        let ids: Vec<&str> = repo.list().iter().map(Place::id).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn test_new_entries_appended_after_existing() {
        let mut repo = seed_repository();
        repo.add_places([place("8", "새 업체", 37.5, 127.0)]);
        assert_eq!(repo.list().last().map(Place::id), Some("8"));
        assert!(repo.contains("8"));
        assert_eq!(repo.len(), 8);
    }

    #[test]
    fn test_empty_repository() {
        let repo = PlaceRepository::new();
        assert!(repo.is_empty());
        assert!(repo.get("1").is_none());
    }
}
