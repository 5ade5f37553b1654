//! Origin-scoped key-value persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every piece of persisted dashboard state (widget layout, per-widget
//! configuration, session, theme) goes through `KeyValueStore`. The browser
//! build talks to `localStorage`; tests and server rendering use
//! `MemoryStore` so the same state code runs without a window.
//!
//! ERROR HANDLING
//! ==============
//! Reads collapse "missing" and "unreadable" into `None` at the JSON layer:
//! a malformed value is treated exactly like an absent one and callers
//! substitute their default.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failure talking to the backing store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage write rejected for key {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to encode value for key {key}: {reason}")]
    Encode { key: String, reason: String },
}

/// String-keyed, string-valued durable store.
pub trait KeyValueStore {
    /// Read the raw value for `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` when the store cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the store is unreachable or rejects the write
    /// (for example a full quota).
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` when the store cannot be reached.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Load and decode a JSON value for `key`.
///
/// Missing keys, unreachable storage and undecodable payloads all yield `None`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            leptos::logging::warn!("discarding malformed value under {key}: {e}");
            None
        }
    }
}

/// Encode `value` as JSON and write it under `key`.
///
/// # Errors
///
/// Returns an error if encoding fails or the store rejects the write.
pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Encode {
        key: key.to_owned(),
        reason: e.to_string(),
    })?;
    store.set(key, &raw)
}

/// Best-effort variant of [`save_json`]: failures are logged and dropped.
pub fn persist_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) {
    if let Err(e) = save_json(store, key, value) {
        leptos::logging::warn!("failed to persist {key}: {e}");
    }
}

// =============================================================================
// BROWSER STORE
// =============================================================================

/// `window.localStorage`. Outside the browser every read is empty and every
/// write is silently accepted, which keeps server rendering deterministic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn browser_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?
                .get_item(key)
                .map_err(|_| StorageError::Unavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write {
                    key: key.to_owned(),
                    reason: format!("{e:?}"),
                })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?
                .remove_item(key)
                .map_err(|_| StorageError::Unavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-memory store. Clones share the same map, so a test can keep one handle
/// to inspect what another handle persisted.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-seeded with `entries`.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        if let Ok(mut map) = store.entries.lock() {
            for (k, v) in entries {
                map.insert(k.to_owned(), v.to_owned());
            }
        }
        store
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |m| m.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let map = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        map.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        map.remove(key);
        Ok(())
    }
}
