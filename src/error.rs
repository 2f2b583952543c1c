//! Error types for the community service
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == App Error Enum ==
/// Unified error type for the community service.
#[derive(Error, Debug)]
pub enum AppError {
    /// No credentials were supplied for an authenticated resource
    #[error("{0}")]
    Unauthorized(String),

    /// Token signature was valid but the token has expired
    #[error("Token expired")]
    TokenExpired,

    /// Token could not be decoded or verified
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Authenticated, but not allowed to perform the action
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Record not found in the document store
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Record clashes with an existing one
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Document store read or write failed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Cache client failed
    #[error("Cache error: {0}")]
    Cache(String),

    /// Outbound mail transport failed
    #[error("Mail error: {0}")]
    Mail(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) | AppError::TokenExpired | AppError::InvalidToken(_) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Mail(_) => StatusCode::BAD_GATEWAY,
            AppError::Persistence(_) | AppError::Cache(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("serialization failed: {}", err))
    }
}

impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        AppError::Cache(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the community service.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_map_to_unauthorized() {
        assert_eq!(
            AppError::Unauthorized("missing".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::TokenExpired.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::InvalidToken("bad".into()).status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_unauthorized_message_is_passed_through() {
        let err = AppError::Unauthorized("you must be logged in".into());
        assert_eq!(err.to_string(), "you must be logged in");
    }

    #[test]
    fn test_storage_errors_map_to_internal() {
        assert_eq!(
            AppError::Persistence("down".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Cache("down".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
