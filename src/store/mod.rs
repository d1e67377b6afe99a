//! Key-value persistence
//!
//! Favorites and the last-known location are stored as JSON strings under
//! fixed keys through the [`KeyValueStore`] capability. Components receive
//! the store by value or reference; nothing reaches for a global.
//!
//! - [`SledStore`]: durable, backed by sled
//! - [`MemoryStore`]: volatile, for tests and degraded sessions

pub mod error;
pub mod memory;
pub mod sled_store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use sled_store::SledStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// String key-value storage
pub trait KeyValueStore {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Read and decode a JSON value
///
/// # Errors
///
/// Returns `StoreError::Corrupt` if the stored text is not valid JSON for `T`.
pub fn get_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    store
        .get(key)?
        .map(|raw| {
            serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            })
        })
        .transpose()
}

/// Encode and store a JSON value
///
/// # Errors
///
/// Returns `StoreError` if encoding or writing fails.
pub fn set_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let encoded = serde_json::to_string(value)?;
    store.set(key, &encoded)
}
