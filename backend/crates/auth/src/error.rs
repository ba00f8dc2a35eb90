//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. The `Display` text of each variant is
//! the message returned to the client.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::validation::ValidationError;
use thiserror::Error;

use crate::domain::token::TokenRejection;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("All fields are required.")]
    MissingSignUpFields,

    #[error("Email and password are required.")]
    MissingCredentials,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Invalid email format.")]
    InvalidEmail,

    /// Name, email or password rule violations
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("User already exists.")]
    UserAlreadyExists,

    /// Unknown email or wrong password; the two are not distinguished
    #[error("Invalid email or password.")]
    InvalidCredentials,

    #[error("Not authorized, token missing")]
    TokenMissing,

    #[error("Not authorized, token invalid")]
    TokenInvalid(TokenRejection),

    /// Token verified but its user no longer exists
    #[error("Not authorized, user not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingSignUpFields
            | AuthError::MissingCredentials
            | AuthError::PasswordMismatch
            | AuthError::InvalidEmail
            | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::UserAlreadyExists => ErrorKind::Conflict,
            AuthError::InvalidCredentials
            | AuthError::TokenMissing
            | AuthError::TokenInvalid(_)
            | AuthError::UserNotFound => ErrorKind::Unauthorized,
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
            AuthError::TokenInvalid(reason) => {
                tracing::warn!(?reason, "Rejected session token");
            }
            AuthError::UserNotFound => {
                tracing::warn!("Valid token for a deleted user");
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

impl From<TokenRejection> for AuthError {
    fn from(reason: TokenRejection) -> Self {
        AuthError::TokenInvalid(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::validation::Violations;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::PasswordMismatch.kind().status_code(), 400);
        assert_eq!(AuthError::UserAlreadyExists.kind().status_code(), 409);
        assert_eq!(AuthError::InvalidCredentials.kind().status_code(), 401);
        assert_eq!(
            AuthError::TokenInvalid(TokenRejection::Expired).kind().status_code(),
            401
        );
        assert_eq!(AuthError::Internal("x".into()).kind().status_code(), 500);
    }

    #[test]
    fn test_validation_message_passes_through() {
        let mut v = Violations::new();
        v.push("Name must be at least 2 characters");
        let err = AuthError::from(v.finish().unwrap_err());
        assert_eq!(err.to_app_error().message(), "Name must be at least 2 characters");
    }

    #[test]
    fn test_internal_detail_hidden_from_client() {
        let app = AuthError::Internal("argon2 exploded".into()).to_app_error();
        assert_eq!(app.public_message(), "Internal Server Error");
    }
}
