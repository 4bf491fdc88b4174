//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use crate::core::error::{Error, StorageError};
use crate::types::ValidationError;

/// Error body: `{"detail": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable reason
    pub detail: String,
}

/// Errors surfaced by request handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Store missing or failing
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Input rejected by schema validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Anything else
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Storage(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Storage(e) => ApiError::Storage(e),
            Error::Validation(e) => ApiError::Validation(e),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Storage(StorageError::Unavailable) => {
                tracing::warn!("Request needs a database but none is configured");
            }
            _ if status.is_server_error() => tracing::error!("Request failed: {}", self),
            _ => tracing::debug!("Request rejected: {}", self),
        }

        (status, Json(ErrorResponse { detail: self.to_string() })).into_response()
    }
}
