//! Pluggable key-value storage backends
//!
//! The store is an injected dependency of [`crate::CacheWriter`] rather than
//! a hidden global, so production code can write to disk while tests swap in
//! an in-memory fake. A store holds opaque text values; the envelope shape
//! is the writer's concern.

mod disk;
mod memory;

pub use disk::DiskStore;
pub use memory::MemoryStore;

use crate::error::CacheError;

/// A persistent key-value store of textual values
///
/// Writes are atomic from the caller's view: `set` either replaces the whole
/// value at `key` or fails leaving the prior value intact. Stores report
/// capacity exhaustion as [`CacheError::QuotaExceeded`] and keys they cannot
/// represent as [`CacheError::InvalidKey`].
pub trait Store {
    /// Reads the value at `key`, or `None` if the key is absent
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Writes `value` at `key`, replacing any prior value
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;
}
