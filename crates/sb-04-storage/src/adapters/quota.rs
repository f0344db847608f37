//! Controllable failing store for tests.

use crate::adapters::MemoryStore;
use crate::domain::StorageError;
use crate::ports::KeyValueStore;
use std::sync::atomic::{AtomicBool, Ordering};

/// Key-value store whose writes can be made to fail on demand, simulating
/// quota exhaustion. Reads always delegate to the inner memory store.
///
/// Production never uses this; it exists so sessions can be tested against
/// the "write failed, continue in memory" policy.
#[derive(Debug, Default)]
pub struct QuotaExceededStore {
    inner: MemoryStore,
    failing: AtomicBool,
}

impl QuotaExceededStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns write failures on or off.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self, key: &str) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::WriteFailed {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        Ok(())
    }
}

impl KeyValueStore for QuotaExceededStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check(key)?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check(key)?;
        self.inner.remove(key)
    }
}
