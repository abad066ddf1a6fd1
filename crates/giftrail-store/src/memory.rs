//! In-memory key-value store.
//!
//! The default backend for tests and for sessions where no durable medium
//! is available. An optional byte quota reproduces the quota-exceeded
//! failure mode of browser-style storage.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use giftrail_types::{GiftrailError, Result};

use crate::KvStore;

/// Thread-safe in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
    /// Total bytes (keys + values) allowed, when bounded.
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    /// Unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects writes once keys + values would exceed `bytes`.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota_bytes: Some(bytes),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    // A poisoned lock only means a panic elsewhere; the map itself is
    // still plain data, so recover it rather than failing the store.
    fn read_entries(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn used_bytes(entries: &HashMap<String, String>) -> usize {
        entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.write_entries();
        if let Some(limit) = self.quota_bytes {
            let existing = entries.get(key).map_or(0, |v| key.len() + v.len());
            let needed = Self::used_bytes(&entries) - existing + key.len() + value.len();
            if needed > limit {
                return Err(GiftrailError::QuotaExceeded { needed, limit });
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.write_entries().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v1").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v1"));

        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn remove_absent_key_succeeds() {
        let store = MemoryStore::new();
        assert!(store.remove("missing").is_ok());
    }

    #[test]
    fn quota_rejects_oversized_write() {
        let store = MemoryStore::with_quota(10);
        store.set("k", "12345").unwrap(); // 1 + 5 = 6 bytes

        let err = store.set("key2", "123456789").unwrap_err();
        assert!(matches!(err, GiftrailError::QuotaExceeded { .. }));

        // First value untouched, second never written.
        assert_eq!(store.get("k").unwrap().as_deref(), Some("12345"));
        assert_eq!(store.get("key2").unwrap(), None);
    }

    #[test]
    fn quota_allows_overwrite_within_limit() {
        let store = MemoryStore::with_quota(10);
        store.set("k", "123456789").unwrap();
        // Overwriting the same key releases the old value's bytes first.
        store.set("k", "987654321").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("987654321"));
    }

    #[test]
    fn len_tracks_keys() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.len(), 2);
    }
}
