//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Receipt Points                         │
//! │                                                                         │
//! │  Handler: Result<Json<T>, ApiError>                                    │
//! │         │                                                               │
//! │         ├── JsonRejection (bad JSON, wrong types) ──┐                  │
//! │         ├── ValidationError (field required) ───────┼──► 400 {"msg"}   │
//! │         ├── ScoreError (only under Reject policy) ──┘                  │
//! │         │                                                               │
//! │         └── StoreError ──► logged ──────────────────────► 500 {"msg"}  │
//! │                                                                         │
//! │  Not errors: unknown id (→ 0 points), bad date/time (→ rule scores 0)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use points_core::{ScoreError, ValidationError};
use points_store::StoreError;
use serde::Serialize;

/// Body of every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub msg: String,
}

/// Errors returned from HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request is malformed; the message is shown to the client.
    #[error("{0}")]
    BadRequest(String),

    /// Something failed on our side; details are logged, not returned.
    #[error("internal error")]
    Internal(String),
}

/// Convenience type alias for handler results.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!(detail = %detail, "Request failed");
        }

        let body = ErrorBody {
            msg: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Malformed bodies never reach validation.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<ScoreError> for ApiError {
    fn from(err: ScoreError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err: ApiError = ValidationError::Required {
            field: "retailer".to_string(),
        }
        .into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "retailer is required");
    }

    #[test]
    fn test_store_error_is_hidden() {
        let err: ApiError = StoreError::LockPoisoned.into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "internal error");
    }
}
