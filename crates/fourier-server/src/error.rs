//! Gateway error taxonomy and its HTTP rendering.
//!
//! `NotFound` and conflict cases are expected outcomes, recovered locally
//! and rendered as their documented status codes with no side effects.
//! Store I/O and corruption failures are not recoverable at this level;
//! they terminate the single in-flight request as a generic server failure
//! and are never retried.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::{json, Value};
use thiserror::Error;

use fourier_core::ModelError;
use fourier_store::StoreError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("database not found: {0}")]
    DatabaseNotFound(String),

    #[error("collection not found: {0}")]
    CollectionNotFound(String),

    #[error("database already exists: {0}")]
    DatabaseExists(String),

    #[error("collection already exists: {0}")]
    CollectionExists(String),

    #[error("invalid name: {name}: {reason}")]
    InvalidName { name: String, reason: String },

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ModelError> for GatewayError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::CollectionNotFound { name } => GatewayError::CollectionNotFound(name),
            ModelError::InvalidName { name, reason } => GatewayError::InvalidName { name, reason },
        }
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Human-readable reason phrase for a status code, used as the `message`
/// field of every response body.
pub(crate) fn status_message(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown")
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, name) = match &self {
            GatewayError::DatabaseNotFound(name) | GatewayError::CollectionNotFound(name) => {
                (StatusCode::NOT_FOUND, Some(name.clone()))
            }
            GatewayError::DatabaseExists(name) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Some(name.clone()))
            }
            GatewayError::CollectionExists(name) => (StatusCode::CONFLICT, Some(name.clone())),
            GatewayError::InvalidName { name, .. } => (StatusCode::BAD_REQUEST, Some(name.clone())),
            GatewayError::Store(StoreError::NotFound { name }) => {
                (StatusCode::NOT_FOUND, Some(name.clone()))
            }
            GatewayError::Store(StoreError::InvalidName { name, .. }) => {
                (StatusCode::BAD_REQUEST, Some(name.clone()))
            }
            GatewayError::Store(_) | GatewayError::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }

        let mut body = json!({ "message": status_message(status) });
        if let Some(name) = name {
            body["name"] = Value::String(name);
        }
        (status, Json(body)).into_response()
    }
}
