//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all endpoints. It implements
//! `axum::response::IntoResponse` to produce a JSON body of the form
//! `{"error": "<message>"}` with the matching HTTP status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use report_storage::StorageError;

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Entity not found (404).
    #[error("{0}")]
    NotFound(String),

    /// Malformed or incomplete request (400).
    #[error("{0}")]
    BadRequest(String),

    /// Unknown listing criteria on the page surface (400).
    #[error("Invalid criteria")]
    InvalidCriteria,

    /// Internal server error (500).
    #[error("{0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) | ApiError::InvalidCriteria => StatusCode::BAD_REQUEST,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match &err {
            StorageError::ReportNotFound(id) => {
                ApiError::NotFound(format!("report {} not found", id))
            }
            StorageError::EmptyField { .. } => ApiError::BadRequest(err.to_string()),
            StorageError::Sqlite(_) | StorageError::Migration(_) => {
                ApiError::InternalError(err.to_string())
            }
        }
    }
}
