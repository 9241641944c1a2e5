//! In-memory store backed by a mutex-guarded map
//!
//! Primarily a test double for [`DiskStore`](super::DiskStore), but also
//! usable where persistence across process restarts is not needed. An
//! optional byte capacity makes quota failures reproducible in tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::CacheError;

use super::Store;

/// A key-value store held entirely in process memory
///
/// Cloneable handles are not provided; share it by reference (the interior
/// mutex makes `&MemoryStore` safe to use from multiple threads, with
/// last-write-wins semantics per key).
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Stored values, keyed by cache key
    values: Mutex<HashMap<String, String>>,
    /// Optional limit on the total bytes of stored values
    capacity: Option<usize>,
}

impl MemoryStore {
    /// Creates an unbounded in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that rejects writes once the total stored value
    /// bytes would exceed `capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            capacity: Some(capacity),
        }
    }

    /// Returns the number of keys currently stored
    pub fn len(&self) -> usize {
        self.values.lock().expect("Store mutex poisoned").len()
    }

    /// Returns true if no keys are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let values = self.values.lock().expect("Store mutex poisoned");
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut values = self.values.lock().expect("Store mutex poisoned");

        if let Some(capacity) = self.capacity {
            // Project the total after this write replaces the key's old value.
            let current: usize = values.values().map(String::len).sum();
            let replaced = values.get(key).map(String::len).unwrap_or(0);
            if current - replaced + value.len() > capacity {
                return Err(CacheError::QuotaExceeded {
                    key: key.to_string(),
                });
            }
        }

        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
