//! Unified error types for the Lumis API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Top-level error type for startup and process lifecycle.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Document store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Document store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error reported by the MongoDB driver.
    #[error("mongodb error: {0}")]
    Backend(#[from] mongodb::error::Error),

    /// Store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A stored document could not be turned back into a record.
    #[error("invalid stored document: {0}")]
    InvalidDocument(String),
}

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field name as it appears in the request body.
    pub field: &'static str,
    /// Human readable reason.
    pub message: String,
}

impl FieldError {
    /// Field absent or blank.
    pub fn missing(field: &'static str) -> Self {
        Self {
            field,
            message: "field required".to_string(),
        }
    }

    /// Field present but malformed.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Request-level errors, rendered as JSON `{"detail": ...}` bodies.
#[derive(Error, Debug)]
pub enum ApiError {
    /// One or more fields failed validation.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Request body could not be decoded.
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// Requested record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Persistence failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": fields })),
            )
                .into_response(),
            ApiError::MalformedBody(reason) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": reason })),
            )
                .into_response(),
            ApiError::NotFound(detail) => {
                (StatusCode::NOT_FOUND, Json(json!({ "detail": detail }))).into_response()
            }
            ApiError::Store(err) => {
                error!(error = %err, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

/// Convenient Result type alias for request handling.
pub type Result<T> = std::result::Result<T, ApiError>;
