//! Storage error types.

use thiserror::Error;

/// Storage subsystem error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    /// A store lock was poisoned by a panicking writer.
    #[error("Storage lock poisoned")]
    LockPoisoned,

    /// Backing I/O failure (read side).
    #[error("I/O failure: {0}")]
    Io(String),

    /// A write could not be completed (e.g. quota exceeded). Non-fatal by
    /// policy: callers continue with in-memory state.
    #[error("Write failed for key '{key}': {reason}")]
    WriteFailed { key: String, reason: String },

    /// A stored record exists but does not match the expected shape.
    #[error("Malformed record '{key}': {reason}")]
    Malformed { key: String, reason: String },

    /// Encoding a record failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}
