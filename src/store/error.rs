//! Storage error types

use thiserror::Error;

/// Failures of the key-value persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// Represents a sled database error
    #[error("Database error: {0}")]
    Sled(#[from] sled::Error),

    /// Stored bytes are not valid UTF-8
    #[error("Stored value for '{0}' is not valid UTF-8")]
    InvalidUtf8(String),

    /// Stored value could not be decoded
    #[error("Stored value for '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Value could not be encoded for storage
    #[error("Error while encoding value: {0}")]
    Encode(#[from] serde_json::Error),

    /// Backend refused the operation
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
