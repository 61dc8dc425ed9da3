//! Error types for storage operations.

use fourier_core::ModelError;
use thiserror::Error;

/// Errors that can occur while loading, saving, or deleting database blobs.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No blob exists for the named database.
    #[error("database not found: {name}")]
    NotFound { name: String },

    /// The name cannot be used as a storage key.
    #[error("invalid database name: {name}: {reason}")]
    InvalidName { name: String, reason: String },

    /// A blob exists but does not deserialize into a database snapshot.
    /// Never retried; the blob stays unreadable until replaced externally.
    #[error("corrupt database blob: {name}: {reason}")]
    Corrupt { name: String, reason: String },

    /// Snapshot serialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error during blob operations.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ModelError> for StoreError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::InvalidName { name, reason } => StoreError::InvalidName { name, reason },
            ModelError::CollectionNotFound { name } => StoreError::NotFound { name },
        }
    }
}

/// Convenience type alias for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
