//! Bookmarked places
//!
//! The favorite set is stored as a JSON array of ids under
//! [`FAVORITES_KEY`]. Every read goes back to storage, so a write made by
//! another session is visible on the next call; the last writer wins.
//!
//! If storage fails (unreadable, corrupt or unwritable) the store logs a
//! warning and keeps working from memory for the rest of the session.

use crate::store::{self, KeyValueStore};
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;

/// Storage key for the favorite id list
pub const FAVORITES_KEY: &str = "favorites";

/// Persistent set of favorited place ids
pub struct FavoritesStore<S: KeyValueStore> {
    store: S,
    memory: RefCell<BTreeSet<String>>,
    degraded: Cell<bool>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Create a store over `store`, loading the current set
    pub fn new(store: S) -> Self {
        let favorites = Self {
            store,
            memory: RefCell::new(BTreeSet::new()),
            degraded: Cell::new(false),
        };
        favorites.refresh();
        favorites
    }

    /// Reload from storage, returning the current set
    ///
    /// Stale ids (referring to no current place) are kept as-is.
    pub fn refresh(&self) -> BTreeSet<String> {
        if !self.degraded.get() {
            match store::get_json::<Vec<String>, _>(&self.store, FAVORITES_KEY) {
                Ok(stored) => {
                    *self.memory.borrow_mut() = stored.unwrap_or_default().into_iter().collect();
                }
                Err(e) => self.degrade(&e),
            }
        }
        self.memory.borrow().clone()
    }

    /// Whether `id` is a favorite
    pub fn contains(&self, id: &str) -> bool {
        self.refresh().contains(id)
    }

    /// Current set of favorite ids
    pub fn snapshot(&self) -> BTreeSet<String> {
        self.refresh()
    }

    /// Add `id` if absent, remove it if present
    ///
    /// # Returns
    /// `true` if `id` is a favorite after the call
    pub fn toggle(&self, id: &str) -> bool {
        let mut set = self.refresh();
        let now_favorite = if set.remove(id) {
            false
        } else {
            set.insert(id.to_string());
            true
        };

        if !self.degraded.get() {
            let ids: Vec<&String> = set.iter().collect();
            if let Err(e) = store::set_json(&self.store, FAVORITES_KEY, &ids) {
                self.degrade(&e);
            }
        }
        *self.memory.borrow_mut() = set;

        tracing::debug!(id, now_favorite, "Toggled favorite");
        now_favorite
    }

    /// True once storage has failed and the set lives only in memory
    pub fn is_degraded(&self) -> bool {
        self.degraded.get()
    }

    fn degrade(&self, error: &store::StoreError) {
        tracing::warn!(%error, "Favorites storage failed; continuing in memory only");
        self.degraded.set(true);
    }
}
