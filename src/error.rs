//! Application error type and its HTTP representation.
//!
//! [`AppError`] is what every service and repository returns. The service layer
//! only cares about the *kind* of failure; translating a kind into a status code
//! happens in the [`IntoResponse`] impl below and nowhere else.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to API clients.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
}

/// Errors produced while creating, resolving or accounting short links.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Destination is malformed, oversized, not http(s), hostless, or the
    /// requested expiry is already in the past.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Alias or lookup code violates the length/alphabet rules.
    #[error("invalid code: {0}")]
    InvalidCode(String),

    /// The requested or generated code is already taken.
    #[error("code already exists: {0}")]
    Conflict(String),

    #[error("short link not found: {0}")]
    NotFound(String),

    /// The link exists but its expiry has passed.
    #[error("short link expired: {0}")]
    Expired(String),

    /// Request body failed shape validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The randomness source used for code generation failed.
    #[error("code generator failure: {0}")]
    Generator(String),

    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable identifier of the error kind, used in API responses and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidUrl(_) => "invalid_url",
            AppError::InvalidCode(_) => "invalid_code",
            AppError::Conflict(_) => "conflict",
            AppError::NotFound(_) => "not_found",
            AppError::Expired(_) => "expired",
            AppError::Validation(_) => "validation_error",
            AppError::Generator(_) | AppError::Storage(_) | AppError::Internal(_) => {
                "internal_error"
            }
        }
    }

    /// HTTP status this error maps to at the transport boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl(_) | AppError::InvalidCode(_) | AppError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Expired(_) => StatusCode::GONE,
            AppError::Generator(_) | AppError::Storage(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Converts the error into the payload shown to clients.
    ///
    /// Server-side failures are reduced to a generic message so that driver or
    /// OS details never leak into responses.
    pub fn to_error_info(&self) -> ErrorInfo {
        let message = match self {
            AppError::Generator(_) | AppError::Storage(_) | AppError::Internal(_) => {
                "internal error".to_string()
            }
            other => other.to_string(),
        };

        ErrorInfo {
            code: self.kind(),
            message,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}
