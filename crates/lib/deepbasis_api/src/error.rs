//! HTTP error mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal Server Error")]
    Internal(String),
}

/// JSON error body: `{"message": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, m.as_str()),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, m.as_str()),
            AppError::Internal(detail) => {
                // Full detail stays server-side.
                error!(%detail, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };
        let body = Json(ErrorResponse {
            message: message.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<deepbasis_core::Error> for AppError {
    fn from(e: deepbasis_core::Error) -> Self {
        use deepbasis_core::Error;
        match e {
            Error::Validation(m) => AppError::Validation(m),
            Error::NotFound(m) => AppError::NotFound(m),
            // Constraint errors are translated by the managers; one reaching
            // this point is a bug, surfaced as a 500.
            Error::Constraint(m) => AppError::Internal(format!("unhandled constraint: {m}")),
            Error::Database(e) => AppError::Internal(e.to_string()),
            Error::Internal(m) => AppError::Internal(m),
        }
    }
}
