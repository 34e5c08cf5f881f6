//! Persistence backends for the response cache
//!
//! The whole cache is one map, loaded and saved as a unit. Backends know nothing
//! about expiry; that is the job of [`TtlCache`](super::TtlCache).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::error::StorageError;
use crate::storage::{CACHE_NAMESPACE, KeyValueStore};

type Result<T> = std::result::Result<T, StorageError>;

/// A cached response body and the moment it was stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Milliseconds since the Unix epoch
    #[serde(rename = "ts")]
    pub timestamp: i64,

    /// Parsed JSON response body
    #[serde(rename = "data")]
    pub payload: Value,
}

/// Cache key to entry
pub type CacheMap = BTreeMap<String, CacheEntry>;

/// Whole-map persistence for the cache
pub trait CacheBackend: Send + Sync {
    /// Load the full map. A backend with nothing stored returns an empty map.
    fn load(&self) -> Result<CacheMap>;

    /// Replace the stored map
    fn save(&self, map: &CacheMap) -> Result<()>;

    /// Drop the stored map entirely
    fn remove(&self) -> Result<()>;
}

/// Cache map held in process memory
#[derive(Debug, Default)]
pub struct MemoryBackend {
    map: Mutex<CacheMap>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheBackend for MemoryBackend {
    fn load(&self) -> Result<CacheMap> {
        let map = self.map.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(map.clone())
    }

    fn save(&self, map: &CacheMap) -> Result<()> {
        let mut stored = self.map.lock().map_err(|_| StorageError::Poisoned)?;
        *stored = map.clone();
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        let mut stored = self.map.lock().map_err(|_| StorageError::Poisoned)?;
        stored.clear();
        Ok(())
    }
}

/// Cache map serialized as one JSON blob under a single key of a [`KeyValueStore`]
pub struct StoreBackend {
    store: Arc<dyn KeyValueStore>,
    namespace: String,
}

impl StoreBackend {
    /// Back the cache with `store`, under the default namespace key
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_namespace(store, CACHE_NAMESPACE)
    }

    pub fn with_namespace(store: Arc<dyn KeyValueStore>, namespace: &str) -> Self {
        Self {
            store,
            namespace: namespace.to_string(),
        }
    }
}

impl CacheBackend for StoreBackend {
    fn load(&self) -> Result<CacheMap> {
        match self.store.get(&self.namespace)? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| StorageError::Corrupt(e.to_string()))
            }
            None => Ok(CacheMap::new()),
        }
    }

    fn save(&self, map: &CacheMap) -> Result<()> {
        let raw = serde_json::to_string(map).map_err(|e| StorageError::Corrupt(e.to_string()))?;
        self.store.set(&self.namespace, &raw)
    }

    fn remove(&self) -> Result<()> {
        self.store.remove(&self.namespace)
    }
}
