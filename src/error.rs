//! Error types for the store boundary and the HTTP boundary.
//!
//! [`StoreError`] carries full diagnostic detail and never leaves the
//! persistence layer except as a log line. [`ApiError`] is what handlers
//! return; each variant maps to an HTTP status and a structured JSON body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::UnknownCompanyError;

/// Structured JSON error response body.
///
/// ```json
/// {
///   "error": {
///     "code": 1003,
///     "message": "unknown company: Not A Company"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Failures inside the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Statement, connection or acquire-timeout failure reported by sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The schema bootstrap failed; the pool was discarded.
    #[error("schema bootstrap failed: {0}")]
    Bootstrap(#[source] sqlx::Error),

    /// The pool has been shut down.
    #[error("connection pool is closed")]
    PoolClosed,
}

/// Client-facing error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status               |
/// |-----------|------------|---------------------------|
/// | 1000–1999 | Validation | 400 Bad Request           |
/// | 3000–3999 | Server     | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The `Authorization` header was not supplied.
    #[error("missing authorization header")]
    MissingAuthorization,

    /// The request body could not be read as a scraper payload.
    #[error("bad data: {0}")]
    InvalidRequest(String),

    /// The payload names an employer outside the known set.
    #[error(transparent)]
    UnknownCompany(#[from] UnknownCompanyError),

    /// The store rejected or failed the write. Detail is logged, not returned.
    #[error("database error")]
    PersistenceError,

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::MissingAuthorization => 1001,
            Self::InvalidRequest(_) => 1002,
            Self::UnknownCompany(_) => 1003,
            Self::Internal(_) => 3000,
            Self::PersistenceError => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingAuthorization | Self::InvalidRequest(_) | Self::UnknownCompany(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::PersistenceError | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        let unknown = ApiError::from(UnknownCompanyError("Nope".to_string()));
        assert_eq!(unknown.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(unknown.error_code(), 1003);
        assert_eq!(unknown.to_string(), "unknown company: Nope");

        assert_eq!(
            ApiError::MissingAuthorization.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidRequest("empty body".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn store_failure_maps_to_server_error_without_detail() {
        let err = ApiError::PersistenceError;
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "database error");
    }

    #[test]
    fn into_response_sets_status() {
        let response = ApiError::PersistenceError.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
