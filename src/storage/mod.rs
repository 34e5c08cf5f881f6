//! Key-value storage used for the auth token and the response cache blob
//!
//! Two deployments share one trait: a persistent store that survives across
//! sessions (the token lives here) and a session store that is wiped on logout
//! (the cache blob lives here).

pub mod sqlite;

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::StorageError;

pub use sqlite::SqliteStore;

type Result<T> = std::result::Result<T, StorageError>;

/// Persistent-store key holding the bearer token
pub const TOKEN_KEY: &str = "authToken";

/// Session-store key holding the serialized cache map
pub const CACHE_NAMESPACE: &str = "ngms_cache";

/// Synchronous string key-value storage.
///
/// Implementations synchronize internally so a store can be shared behind `Arc`.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` if the key is not set
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory store, lost when dropped
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}
