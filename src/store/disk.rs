//! Disk-backed store with one JSON file per key
//!
//! Values land as `<key>.json` files in an XDG-compliant cache directory
//! (`~/.cache/stowcache/` on Linux). Each `set` rewrites the whole file, so
//! writes are atomic from the caller's view.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::debug;

use crate::error::CacheError;

use super::Store;

/// A key-value store that keeps each value in its own file
#[derive(Debug, Clone)]
pub struct DiskStore {
    /// Directory where value files are stored
    cache_dir: PathBuf,
}

impl DiskStore {
    /// Creates a new DiskStore using an XDG-compliant cache directory
    ///
    /// Uses `~/.cache/stowcache/` on Linux, or the equivalent XDG path on
    /// other platforms. Returns `None` if the cache directory cannot be
    /// determined (e.g., no home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "stowcache")?;
        let cache_dir = project_dirs.cache_dir().to_path_buf();
        Some(Self { cache_dir })
    }

    /// Creates a new DiskStore with a custom directory
    ///
    /// Useful for testing or when a specific cache location is needed.
    pub fn with_dir(cache_dir: PathBuf) -> Self {
        Self { cache_dir }
    }

    /// Returns the path to the value file for the given key
    fn value_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    /// Ensures the cache directory exists
    fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.cache_dir)
    }

    /// Rejects keys that would escape the cache directory
    fn check_key(key: &str) -> Result<(), CacheError> {
        if key.contains(['/', '\\']) {
            return Err(CacheError::InvalidKey {
                key: key.to_string(),
                reason: "key must not contain path separators",
            });
        }
        Ok(())
    }
}

impl Store for DiskStore {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Self::check_key(key)?;

        match fs::read_to_string(self.value_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        Self::check_key(key)?;
        self.ensure_dir()?;

        let path = self.value_path(key);
        fs::write(&path, value).map_err(|e| match e.kind() {
            ErrorKind::StorageFull | ErrorKind::QuotaExceeded => CacheError::QuotaExceeded {
                key: key.to_string(),
            },
            _ => CacheError::Io(e),
        })?;

        debug!(key, path = %path.display(), bytes = value.len(), "wrote cache file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (DiskStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = DiskStore::with_dir(temp_dir.path().to_path_buf());
        (store, temp_dir)
    }

    #[test]
    fn test_set_creates_file_in_cache_directory() {
        let (store, temp_dir) = create_test_store();

        store.set("test_key", "{\"v\":1}").expect("Set should succeed");

        let expected_path = temp_dir.path().join("test_key.json");
        assert!(expected_path.exists(), "Value file should exist");
        let content = fs::read_to_string(&expected_path).expect("Should read file");
        assert_eq!(content, "{\"v\":1}");
    }

    #[test]
    fn test_get_returns_none_for_missing_key() {
        let (store, _temp_dir) = create_test_store();

        let result = store.get("nonexistent_key").expect("Get should succeed");

        assert!(result.is_none(), "Missing key should read back as None");
    }

    #[test]
    fn test_set_overwrites_existing_file() {
        let (store, _temp_dir) = create_test_store();

        store.set("k", "first").expect("First set should succeed");
        store.set("k", "second").expect("Second set should succeed");

        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_set_creates_directory_if_missing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let nested_path = temp_dir.path().join("nested").join("cache").join("dir");
        let store = DiskStore::with_dir(nested_path.clone());

        store.set("nested_key", "{}").expect("Set should succeed");

        assert!(nested_path.exists(), "Nested directory should be created");
        assert!(nested_path.join("nested_key.json").exists(), "Value file should exist");
    }

    #[test]
    fn test_key_with_path_separator_is_rejected() {
        let (store, temp_dir) = create_test_store();

        let result = store.set("../escape", "{}");

        assert!(
            matches!(result, Err(CacheError::InvalidKey { .. })),
            "Keys with separators should be rejected"
        );
        assert!(
            !temp_dir.path().parent().unwrap().join("escape.json").exists(),
            "No file should be written outside the cache directory"
        );
    }

    #[test]
    fn test_new_creates_xdg_compliant_path() {
        if let Some(store) = DiskStore::new() {
            let path_str = store.cache_dir.to_string_lossy();
            assert!(
                path_str.contains("stowcache"),
                "Cache path should contain project name"
            );
        }
        // Test passes if new() returns None (e.g., no home directory in CI)
    }
}
