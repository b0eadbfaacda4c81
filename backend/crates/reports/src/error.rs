//! Report Error Types
//!
//! Report-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Report-specific result type alias
pub type ReportResult<T> = Result<T, ReportError>;

/// Report-specific error variants
#[derive(Debug, Error)]
pub enum ReportError {
    /// Report not found, or not owned by the caller.
    ///
    /// Ownership mismatches deliberately collapse into this variant so
    /// foreign report ids cannot be probed for existence.
    #[error("Report does not exist")]
    NotFound,

    /// A required field was empty or missing
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Input validation error
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Blockchain gateway call failed
    #[error("Blockchain gateway error: {0}")]
    Gateway(String),

    /// Gateway returned a record we could not decode
    #[error("Malformed gateway record: {0}")]
    GatewayDecode(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ReportError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReportError::NotFound => StatusCode::NOT_FOUND,
            ReportError::MissingField(_) | ReportError::Validation(_) => StatusCode::BAD_REQUEST,
            ReportError::Gateway(_) | ReportError::GatewayDecode(_) => StatusCode::BAD_GATEWAY,
            ReportError::Database(_) | ReportError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReportError::NotFound => ErrorKind::NotFound,
            ReportError::MissingField(_) | ReportError::Validation(_) => ErrorKind::BadRequest,
            ReportError::Gateway(_) | ReportError::GatewayDecode(_) => ErrorKind::BadGateway,
            ReportError::Database(_) | ReportError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ReportError::Database(e) => {
                tracing::error!(error = %e, "Reports database error");
            }
            ReportError::Internal(msg) => {
                tracing::error!(message = %msg, "Reports internal error");
            }
            ReportError::Gateway(msg) => {
                tracing::error!(message = %msg, "Blockchain gateway call failed");
            }
            ReportError::GatewayDecode(msg) => {
                tracing::error!(message = %msg, "Malformed blockchain gateway record");
            }
            _ => {
                tracing::debug!(error = %self, "Report error");
            }
        }
    }
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
