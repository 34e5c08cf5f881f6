//! Time-limited response cache with tag invalidation
//!
//! Every operation loads the whole map from the backend, works on it and saves
//! it back. Storage failures never reach the caller: a map that cannot be read is
//! treated as empty and a map that cannot be written is simply not written.

use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use super::storage::{CacheBackend, CacheEntry, CacheMap};
use crate::clock::{Clock, SystemClock};

/// Entries older than this are treated as absent
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Response cache with a single TTL for all entries
pub struct TtlCache {
    backend: Arc<dyn CacheBackend>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    // Serializes load-modify-save so concurrent tasks don't drop each other's writes
    op_lock: Mutex<()>,
}

impl TtlCache {
    /// Create a cache over `backend` with the default TTL and the system clock
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self::with_clock(backend, Arc::new(SystemClock), DEFAULT_TTL)
    }

    pub fn with_clock(backend: Arc<dyn CacheBackend>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            backend,
            clock,
            ttl,
            op_lock: Mutex::new(()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Get a payload if present and younger than the TTL.
    ///
    /// An expired entry is deleted from the stored map before returning `None`.
    pub fn get(&self, key: &str) -> Option<Value> {
        let _guard = self.guard();
        let mut map = self.load();

        let expired = match map.get(key) {
            None => return None,
            Some(entry) => self.is_expired(entry),
        };

        if expired {
            log::debug!("Cache expired: {}", key);
            map.remove(key);
            self.save(&map);
            return None;
        }

        map.remove(key).map(|entry| entry.payload)
    }

    /// Store a payload stamped with the current time
    pub fn set(&self, key: &str, value: Value) {
        let _guard = self.guard();
        let mut map = self.load();
        map.insert(
            key.to_string(),
            CacheEntry {
                timestamp: self.clock.now_millis(),
                payload: value,
            },
        );
        self.save(&map);
    }

    /// Remove one entry, or drop the whole stored map when `key` is `None`
    pub fn clear(&self, key: Option<&str>) {
        let _guard = self.guard();
        match key {
            Some(key) => {
                let mut map = self.load();
                map.remove(key);
                self.save(&map);
            }
            None => self.remove_all(),
        }
    }

    /// Drop the whole stored map, reporting how many entries it held
    pub fn clear_all(&self) -> ClearStats {
        let _guard = self.guard();
        let entries_removed = self.load().len();
        self.remove_all();
        ClearStats { entries_removed }
    }

    /// Remove every entry whose key contains any of `tags` as a substring.
    ///
    /// The map is written back once, and only if something was removed.
    /// Returns the number of entries removed.
    pub fn invalidate<I, S>(&self, tags: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags: Vec<S> = tags.into_iter().collect();
        if tags.is_empty() {
            return 0;
        }

        let _guard = self.guard();
        let mut map = self.load();
        let before = map.len();
        map.retain(|key, _| !tags.iter().any(|tag| key.contains(tag.as_ref())));

        let removed = before - map.len();
        if removed > 0 {
            log::debug!(
                "Cache invalidated {} entries for tags [{}]",
                removed,
                tags.iter().map(|t| t.as_ref()).collect::<Vec<_>>().join(", ")
            );
            self.save(&map);
        }
        removed
    }

    /// Keys currently stored, expired or not
    pub fn keys(&self) -> Vec<String> {
        let _guard = self.guard();
        self.load().into_keys().collect()
    }

    /// Summary of what is stored
    pub fn stats(&self) -> CacheStats {
        let _guard = self.guard();
        let map = self.load();

        let valid_entries = map.values().filter(|e| !self.is_expired(e)).count();
        let total_size_bytes = serde_json::to_vec(&map).map(|v| v.len()).unwrap_or(0);
        let live = map.values().filter(|e| !self.is_expired(e));

        CacheStats {
            total_entries: map.len(),
            valid_entries,
            expired_entries: map.len() - valid_entries,
            total_size_bytes,
            oldest_entry: live.clone().map(|e| e.timestamp).min(),
            newest_entry: live.map(|e| e.timestamp).max(),
        }
    }

    fn is_expired(&self, entry: &CacheEntry) -> bool {
        let ttl_millis = i64::try_from(self.ttl.as_millis()).unwrap_or(i64::MAX);
        // Stored timestamps may be garbage; saturate so an absurd one reads as old
        self.clock.now_millis().saturating_sub(entry.timestamp) > ttl_millis
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.op_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn load(&self) -> CacheMap {
        self.backend.load().unwrap_or_else(|e| {
            log::warn!("Cache unreadable, treating as empty: {}", e);
            CacheMap::new()
        })
    }

    fn save(&self, map: &CacheMap) {
        if let Err(e) = self.backend.save(map) {
            log::warn!("Failed to write cache: {}", e);
        }
    }

    fn remove_all(&self) {
        if let Err(e) = self.backend.remove() {
            log::warn!("Failed to clear cache: {}", e);
        }
    }
}

/// Statistics about cache clear operation
#[derive(Debug)]
pub struct ClearStats {
    pub entries_removed: usize,
}

/// Statistics about cache state
#[derive(Debug)]
pub struct CacheStats {
    pub total_entries: usize,
    pub valid_entries: usize,
    pub expired_entries: usize,
    pub total_size_bytes: usize,
    /// Epoch milliseconds of the oldest live entry
    pub oldest_entry: Option<i64>,
    /// Epoch milliseconds of the newest live entry
    pub newest_entry: Option<i64>,
}
