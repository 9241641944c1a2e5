//! Stowcache: a timestamped write-through cache.
//!
//! This crate wraps caller-supplied values in a `{timestamp, data}` JSON
//! envelope and persists them under a key in a pluggable key-value store.
//! Writes are unconditional and last-write-wins: saving to an existing key
//! wholly replaces the previous envelope. The crate deliberately has no
//! read path, expiry enforcement, or eviction policy; it is a thin producer
//! against the [`Store`] abstraction.
//!
//! # Example
//!
//! ```
//! use stowcache::{CacheWriter, MemoryStore};
//!
//! let writer = CacheWriter::new(MemoryStore::new());
//! writer.save("user:42", &serde_json::json!({"name": "Ann"})).unwrap();
//! ```

pub mod entry;
pub mod error;
pub mod store;
pub mod writer;

pub use entry::CacheEntry;
pub use error::CacheError;
pub use store::{DiskStore, MemoryStore, Store};
pub use writer::CacheWriter;
