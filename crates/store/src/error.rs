//! Persistence error model.

use thiserror::Error;

/// Persistence failure.
///
/// The in-memory ledger keeps its state when one of these surfaces from a
/// write-through; only durability is lost, never consistency.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read key {key}: {message}")]
    Read { key: String, message: String },

    #[error("failed to write key {key}: {message}")]
    Write { key: String, message: String },

    #[error("snapshot under key {key} failed to decode: {message}")]
    Decode { key: String, message: String },

    /// Keys are restricted to `[A-Za-z0-9_-]` so file-backed stores can map
    /// them to filenames safely.
    #[error("invalid store key {0:?}")]
    InvalidKey(String),
}

impl StoreError {
    pub fn read(key: impl Into<String>, message: impl ToString) -> Self {
        Self::Read {
            key: key.into(),
            message: message.to_string(),
        }
    }

    pub fn write(key: impl Into<String>, message: impl ToString) -> Self {
        Self::Write {
            key: key.into(),
            message: message.to_string(),
        }
    }

    pub fn decode(key: impl Into<String>, message: impl ToString) -> Self {
        Self::Decode {
            key: key.into(),
            message: message.to_string(),
        }
    }
}
