//! sled-backed key-value store

use super::{KeyValueStore, StoreError};
use sled::{Db, Subscriber, Tree};
use std::path::Path;

/// Name of the tree holding all settings values
const TREE: &str = "settings";

/// Durable key-value store on top of a sled database
///
/// Cloning is cheap and shares the same database handle. Every `set` is
/// flushed before it returns, so a value is either fully on disk or the
/// error is reported.
#[derive(Clone)]
pub struct SledStore {
    db: Db,
    tree: Tree,
}

impl SledStore {
    /// Opens or creates a store at the specified directory
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or the tree
    /// cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        let tree = db.open_tree(TREE)?;
        Ok(Self { db, tree })
    }

    /// Subscribe to changes of `key`, including writes from other handles
    /// on the same database
    #[must_use]
    pub fn watch(&self, key: &str) -> Subscriber {
        self.tree.watch_prefix(key.as_bytes())
    }

    /// Remove every stored value
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if clearing or flushing fails.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.tree.clear()?;
        self.db.flush()?;
        Ok(())
    }
}

impl KeyValueStore for SledStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self.tree.get(key.as_bytes())? {
            Some(bytes) => String::from_utf8(bytes.to_vec())
                .map(Some)
                .map_err(|_| StoreError::InvalidUtf8(key.to_string())),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.tree.insert(key.as_bytes(), value.as_bytes())?;
        self.db.flush()?;
        Ok(())
    }
}
