//! The write-through cache front end.

use serde::Serialize;
use tracing::debug;

use crate::entry::CacheEntry;
use crate::error::CacheError;
use crate::store::Store;

/// Persists timestamped envelopes to an injected [`Store`]
///
/// The writer is the crate's entire surface: one synchronous, fire-and-forget
/// write operation. It holds no state of its own beyond the store handle, and
/// the write completes (or fails) before [`save`](CacheWriter::save) returns.
/// Concurrent writers sharing a store race with last-write-wins semantics per
/// key; no locking, versioning, or transactions are provided.
#[derive(Debug)]
pub struct CacheWriter<S: Store> {
    /// The storage backend written through
    store: S,
}

impl<S: Store> CacheWriter<S> {
    /// Creates a writer over the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the writer, returning the underlying store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Serializes `data` into a timestamped envelope and persists it at `key`
    ///
    /// Any prior value at `key` is replaced wholesale. The timestamp is
    /// captured here, at write time. Success returns nothing; failures
    /// propagate uncaught:
    ///
    /// * [`CacheError::Serialization`] if `data` cannot be represented as
    ///   JSON. The store is not touched, so any prior value at `key` is left
    ///   unchanged.
    /// * [`CacheError::QuotaExceeded`] if the store rejects the write for
    ///   capacity reasons.
    /// * [`CacheError::InvalidKey`] if `key` is empty or the store cannot
    ///   represent it.
    pub fn save<T: Serialize>(&self, key: &str, data: &T) -> Result<(), CacheError> {
        if key.is_empty() {
            return Err(CacheError::InvalidKey {
                key: String::new(),
                reason: "key must not be empty",
            });
        }

        let entry = CacheEntry::now(data);
        let json = serde_json::to_string(&entry)?;

        self.store.set(key, &json)?;
        debug!(key, timestamp = entry.timestamp, "saved cache entry");
        Ok(())
    }
}
