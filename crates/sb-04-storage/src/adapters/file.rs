//! File-backed key-value store.
//!
//! All cells live in one JSON object file, mirroring the single
//! origin-scoped map of the legacy storage. Reads happen once at open;
//! every write flushes the whole map back synchronously.

use crate::domain::StorageError;
use crate::ports::KeyValueStore;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::warn;

/// JSON-file implementation of `KeyValueStore`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    cells: RwLock<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Opens the store, loading existing cells from `path`.
    ///
    /// A missing file starts empty. An unreadable file is an error; a
    /// corrupt file starts empty with a warning (the next write rebuilds
    /// it).
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let cells = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(cells) => cells,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "storage file corrupt, starting empty");
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(StorageError::Io(err.to_string())),
        };

        Ok(Self {
            path,
            cells: RwLock::new(cells),
        })
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, key: &str, cells: &HashMap<String, String>) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(cells)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|err| StorageError::WriteFailed {
            key: key.to_string(),
            reason: err.to_string(),
        })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let cells = self.cells.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(cells.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut cells = self.cells.write().map_err(|_| StorageError::LockPoisoned)?;
        cells.insert(key.to_string(), value.to_string());
        // The in-memory cell is updated even if the flush fails: memory
        // stays authoritative for the session, the failure is reported.
        self.flush(key, &cells)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut cells = self.cells.write().map_err(|_| StorageError::LockPoisoned)?;
        if cells.remove(key).is_none() {
            return Ok(());
        }
        self.flush(key, &cells)
    }
}
