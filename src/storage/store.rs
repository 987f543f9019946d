//! Key-value store abstraction
//!
//! Every collection lives in its own string-addressed slot. Repositories
//! depend on the `KeyValueStore` trait rather than on a concrete medium, so
//! the on-disk store can be swapped for the in-memory one in tests.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use super::file_io::{read_text, write_atomic};
use crate::error::GastosError;

/// A string-keyed store of string values
///
/// Writing a single key must be atomic; writes to different keys are
/// independent.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>, GastosError>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), GastosError>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), GastosError>;
}

/// Stores each key as `<key>.json` in a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf, GastosError> {
        if key.is_empty()
            || key.contains(['/', '\\'])
            || key.starts_with('.')
        {
            return Err(GastosError::Storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, GastosError> {
        read_text(self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), GastosError> {
        let path = self.path_for(key)?;
        write_atomic(&path, value.as_bytes())?;
        debug!(key, path = %path.display(), bytes = value.len(), "wrote collection");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), GastosError> {
        match fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(GastosError::Storage(format!(
                "Failed to remove {}: {}",
                key, e
            ))),
        }
    }
}

/// In-process store, used as a fake in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, GastosError> {
        let data = self
            .data
            .read()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), GastosError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), GastosError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GastosError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        data.remove(key);
        Ok(())
    }
}
