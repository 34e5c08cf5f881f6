//! Bearer token storage
//!
//! The token is persisted in the long-lived key-value store and mirrored in
//! memory so reads on the request path don't touch storage.

use std::sync::{Arc, RwLock};

use crate::error::StorageError;
use crate::storage::{KeyValueStore, TOKEN_KEY};

/// Holds the single bearer token slot
pub struct TokenStore {
    store: Arc<dyn KeyValueStore>,
    cached: RwLock<Option<String>>,
}

impl TokenStore {
    /// Create a token store, priming the in-memory copy from `store`
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let initial = store.get(TOKEN_KEY).unwrap_or_else(|e| {
            log::warn!("Failed to read stored token: {}", e);
            None
        });
        Self {
            store,
            cached: RwLock::new(initial),
        }
    }

    /// Store a token, replacing any previous one.
    ///
    /// The in-memory copy changes only once storage accepted the write.
    pub fn set_token(&self, token: &str) -> Result<(), StorageError> {
        self.store.set(TOKEN_KEY, token)?;
        *self.write_slot() = Some(token.to_string());
        Ok(())
    }

    /// Current token: the in-memory copy, else whatever is in storage
    pub fn token(&self) -> Option<String> {
        if let Some(token) = self.read_slot() {
            return Some(token);
        }
        match self.store.get(TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                log::warn!("Failed to read stored token: {}", e);
                None
            }
        }
    }

    /// Whether any token is available
    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    /// Forget the token in memory and in storage
    pub fn clear_token(&self) -> Result<(), StorageError> {
        *self.write_slot() = None;
        self.store.remove(TOKEN_KEY)
    }

    fn read_slot(&self) -> Option<String> {
        match self.cached.read() {
            Ok(slot) => slot.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn write_slot(&self) -> std::sync::RwLockWriteGuard<'_, Option<String>> {
        self.cached
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
