//! Error types for store operations.

use std::path::PathBuf;
use thiserror::Error;

use quotekeeper_models::QuoteId;

/// Errors that can occur during store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read from the file system.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write to the file system.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the storage directory.
    #[error("failed to create directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize or deserialize a record.
    #[error("failed to serialize: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Counter file exists but holds an unusable value.
    #[error("corrupt id counter at {path}: {reason}")]
    Counter { path: PathBuf, reason: String },

    /// Insert with an identifier the allocator did not just hand out.
    #[error("out-of-sequence insert: expected id {expected}, got {got}")]
    OutOfSequence { expected: u64, got: u64 },

    /// No record exists for the given identifier.
    #[error("quote not found: {id}")]
    NotFound { id: QuoteId },
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
