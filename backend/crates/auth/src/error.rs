//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Detail shared by every undecodable token so the response never reveals
/// whether a token decoded at all
const INVALID_TOKEN_DETAIL: &str = "Invalid or expired token";

#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password at login
    #[error("Invalid credentials")]
    CredentialsInvalid,

    #[error("Profile is disabled")]
    AccountDisabled,

    /// Unparseable token or bad signature
    #[error("Token is malformed or its signature does not verify")]
    TokenMalformed,

    #[error("Token has expired")]
    TokenExpired,

    /// Token was revoked by a prior sign-out
    #[error("Token is blacklisted")]
    TokenBlacklisted,

    /// A guarded route was reached without an authenticated context
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Email is already registered")]
    EmailTaken,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::CredentialsInvalid
            | AuthError::TokenMalformed
            | AuthError::TokenExpired
            | AuthError::TokenBlacklisted
            | AuthError::Unauthenticated => ErrorKind::Unauthorized,
            AuthError::AccountDisabled => ErrorKind::Forbidden,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Database(e) => AppError::from(e).kind(),
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Message sent to the caller
    pub fn public_message(&self) -> String {
        match self {
            AuthError::CredentialsInvalid => "Bad credentials".to_string(),
            AuthError::AccountDisabled => "Profile disabled".to_string(),
            AuthError::TokenMalformed | AuthError::TokenExpired => INVALID_TOKEN_DETAIL.to_string(),
            AuthError::TokenBlacklisted => "Token is blacklisted.".to_string(),
            AuthError::Unauthenticated => "Authentication required".to_string(),
            AuthError::EmailTaken => "Email is already registered".to_string(),
            AuthError::Validation(message) => message.clone(),
            AuthError::Database(e) => AppError::from(e).message().to_string(),
            AuthError::Internal(_) => "An unexpected error occurred".to_string(),
        }
    }

    pub fn to_app_error(&self) -> AppError {
        if let AuthError::Database(e) = self {
            return AppError::from(e);
        }

        let err = AppError::new(self.kind(), self.public_message());
        match self {
            AuthError::EmailTaken => err.with_action("Sign in or use a different email"),
            AuthError::Unauthenticated => {
                err.with_action("Send a token as 'Authorization: Bearer <token>'")
            }
            _ => err,
        }
    }

    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::CredentialsInvalid => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::AccountDisabled => {
                tracing::warn!("Login attempt on disabled profile");
            }
            AuthError::TokenBlacklisted => {
                tracing::warn!("Rejected revoked token");
            }
            AuthError::TokenMalformed => {
                tracing::debug!("Rejected malformed token");
            }
            AuthError::TokenExpired => {
                tracing::debug!("Rejected expired token");
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_failures_share_public_detail() {
        assert_eq!(
            AuthError::TokenMalformed.public_message(),
            AuthError::TokenExpired.public_message()
        );
        assert_ne!(
            AuthError::TokenMalformed.to_string(),
            AuthError::TokenExpired.to_string()
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::CredentialsInvalid.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::AccountDisabled.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AuthError::TokenBlacklisted.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AuthError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let app_err = AuthError::Internal("pool exploded".into()).to_app_error();
        assert!(!app_err.message().contains("pool exploded"));
    }

    #[test]
    fn test_database_errors_use_shared_mapping() {
        let err = AuthError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_app_error().kind(), ErrorKind::ServiceUnavailable);

        let err = AuthError::Database(sqlx::Error::Protocol("handshake bytes".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.public_message().contains("handshake bytes"));
    }

    #[test]
    fn test_from_app_error() {
        let err: AuthError = AppError::bad_request("Invalid email format").into();
        assert!(matches!(err, AuthError::Validation(ref m) if m == "Invalid email format"));

        let err: AuthError = AppError::internal("hash failure").into();
        assert!(matches!(err, AuthError::Internal(_)));
    }
}
