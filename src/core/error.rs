//! Error types for the HSC study service
//!
//! Not-found is never an error here: lookups return `Option` and queries return empty
//! sequences. Everything below is a real failure.

use thiserror::Error;
use crate::types::ValidationError;

/// Main result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage layer errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// A record failed schema validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// I/O errors from std
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Storage-specific errors
#[derive(Error, Debug)]
pub enum StorageError {
    /// No store connection is configured
    #[error("Database not configured")]
    Unavailable,

    /// Collection name cannot be used by this backend
    #[error("Invalid collection name: {0:?}")]
    InvalidCollection(String),

    /// Disk I/O operation failed
    #[error("Disk I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted data could not be read back
    #[error("Data corruption detected in {collection}: {message}")]
    Corruption {
        /// Collection whose snapshot is unreadable
        collection: String,
        /// Parser diagnostic
        message: String,
    },

    /// Encoding a record for persistence failed
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
