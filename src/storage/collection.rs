//! A JSON-encoded list stored under one key
//!
//! Reads never fail: a missing slot yields the fallback value, and a slot
//! that cannot be read or decoded is logged and also yields the fallback.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::store::KeyValueStore;
use crate::error::GastosError;

/// A typed collection persisted as a JSON array
pub struct JsonCollection<T> {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    fallback: fn() -> Vec<T>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Collection that falls back to an empty list
    pub fn new(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        Self::with_fallback(store, key, Vec::new)
    }

    /// Collection that falls back to `fallback()` when nothing usable is stored
    pub fn with_fallback(
        store: Arc<dyn KeyValueStore>,
        key: &'static str,
        fallback: fn() -> Vec<T>,
    ) -> Self {
        Self {
            store,
            key,
            fallback,
            _marker: PhantomData,
        }
    }

    /// Load the stored list
    pub fn load(&self) -> Vec<T> {
        let raw = match self.store.get(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return (self.fallback)(),
            Err(e) => {
                warn!(key = self.key, error = %e, "failed to read collection, using default");
                return (self.fallback)();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(key = self.key, error = %e, "stored collection is malformed, using default");
                (self.fallback)()
            }
        }
    }

    /// Replace the stored list, returning it unchanged
    pub fn save(&self, items: Vec<T>) -> Result<Vec<T>, GastosError> {
        let json = serde_json::to_string_pretty(&items)
            .map_err(|e| GastosError::Storage(format!("Failed to serialize {}: {}", self.key, e)))?;
        self.store.set(self.key, &json)?;
        debug!(key = self.key, count = items.len(), "saved collection");
        Ok(items)
    }
}
