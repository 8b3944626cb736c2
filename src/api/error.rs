//! # API Errors
//!
//! Error-to-response mapping for the resource layer. Store messages are
//! surfaced verbatim; no error is recovered or retried.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors a handler can surface.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The store reported a failure; HTTP 500 with the store's message.
    #[error("{0}")]
    Store(String),

    /// An insert came back with zero rows and no error; HTTP 500.
    #[error("No data returned after insertion")]
    NoDataReturned,

    /// Single-item lookup found nothing (or the store failed); HTTP 404.
    ///
    /// Carries the raw path id so the message echoes whatever the caller
    /// sent.
    #[error("Item with id {0} not found")]
    NotFound(String),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NoDataReturned => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// JSON error body: `{"error": message}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            // Not-found is plain text, everything else is the JSON body.
            ApiError::NotFound(_) => (status, self.to_string()).into_response(),
            other => {
                let body = ErrorBody {
                    error: other.to_string(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
