//! Error types for model operations.

use thiserror::Error;

/// Errors that can occur when mutating the in-memory hierarchy.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The named collection is not present in the database.
    #[error("collection not found: {name}")]
    CollectionNotFound { name: String },

    /// The resource name cannot be used as a database or collection name.
    #[error("invalid name: {name}: {reason}")]
    InvalidName { name: String, reason: String },
}

/// Convenience type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
