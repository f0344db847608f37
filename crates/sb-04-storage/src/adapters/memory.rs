//! In-memory key-value store.

use crate::domain::StorageError;
use crate::ports::KeyValueStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory implementation of `KeyValueStore` for testing and ephemeral
/// sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cells: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let cells = self.cells.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(cells.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut cells = self.cells.write().map_err(|_| StorageError::LockPoisoned)?;
        cells.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut cells = self.cells.write().map_err(|_| StorageError::LockPoisoned)?;
        cells.remove(key);
        Ok(())
    }
}
