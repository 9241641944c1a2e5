//! Error types shared by the writer and the store implementations.

use thiserror::Error;

/// Errors that can occur when writing to the cache
///
/// Nothing is caught or retried internally; every failure propagates
/// synchronously to the caller, which owns all recovery policy. Serialization
/// happens before any store call, so a failed write never leaves a partial
/// or corrupted value behind.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The data cannot be represented in the JSON envelope format
    #[error("Failed to serialize cache entry: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store rejected the write because its capacity is exhausted
    #[error("Storage quota exceeded while writing key {key:?}")]
    QuotaExceeded {
        /// Key whose write was rejected
        key: String,
    },

    /// The key is empty or cannot be represented by the underlying store
    #[error("Invalid cache key {key:?}: {reason}")]
    InvalidKey {
        /// The offending key
        key: String,
        /// Why the store cannot accept it
        reason: &'static str,
    },

    /// Any other store-level I/O failure
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}
