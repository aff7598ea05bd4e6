//! Error types for the property service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Property Error Enum ==
/// Unified error type for the property service.
///
/// Degenerate numeric input (a zero denominator) is never an error; the
/// statistics layer resolves it to 0 where it happens.
#[derive(Error, Debug)]
pub enum PropertyError {
    /// Requested property does not exist
    #[error("Property not found: {0}")]
    NotFound(String),

    /// Request payload could not be parsed
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Cache backend unreachable or returned a protocol error
    #[error("Cache unavailable: {0}")]
    CacheUnavailable(String),

    /// Property store failure
    #[error("Store error: {0}")]
    Store(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for PropertyError {
    fn from(err: serde_json::Error) -> Self {
        PropertyError::MalformedInput(err.to_string())
    }
}

impl From<redis::RedisError> for PropertyError {
    fn from(err: redis::RedisError) -> Self {
        PropertyError::CacheUnavailable(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for PropertyError {
    fn into_response(self) -> Response {
        let status = match &self {
            PropertyError::NotFound(_) => StatusCode::NOT_FOUND,
            PropertyError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            PropertyError::CacheUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            PropertyError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PropertyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the property service.
pub type Result<T> = std::result::Result<T, PropertyError>;
