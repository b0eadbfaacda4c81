//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// User not found
    #[error("User does not exist")]
    UserNotFound,

    /// Phone number already registered
    #[error("User with this phone number already exists")]
    PhoneTaken,

    /// Invalid credentials (wrong password)
    #[error("Invalid user credentials")]
    InvalidCredentials,

    /// Refresh token missing, malformed, forged, or revoked
    #[error("Invalid or expired session")]
    TokenInvalid,

    /// A required field was empty or missing
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Input validation error
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Password validation error
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::PhoneTaken => StatusCode::CONFLICT,
            AuthError::InvalidCredentials | AuthError::TokenInvalid => StatusCode::UNAUTHORIZED,
            AuthError::MissingField(_)
            | AuthError::Validation(_)
            | AuthError::PasswordValidation(_) => StatusCode::BAD_REQUEST,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::PhoneTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials | AuthError::TokenInvalid => ErrorKind::Unauthorized,
            AuthError::MissingField(_)
            | AuthError::Validation(_)
            | AuthError::PasswordValidation(_) => ErrorKind::BadRequest,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::TokenInvalid => {
                tracing::debug!("Rejected invalid refresh token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => AuthError::Validation(err.message().to_string()),
            _ => AuthError::Internal(err.to_string()),
        }
    }
}
