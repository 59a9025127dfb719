//! Boundary conversions for [`AppError`](super::app_error::AppError)
//!
//! - `&sqlx::Error` to `AppError` (feature `sqlx`), used by the `Database`
//!   variants of each context's error type
//! - `AppError` to an RFC 7807 response (feature `axum`)

#[cfg(any(feature = "sqlx", feature = "axum"))]
use super::app_error::AppError;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

/// Classify a database failure by SQLSTATE
///
/// Borrowed so callers can keep the original error for logging. Messages are
/// fixed strings and never carry driver output.
#[cfg(feature = "sqlx")]
impl From<&sqlx::Error> for AppError {
    fn from(err: &sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found"),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                AppError::service_unavailable("Database connection pool exhausted")
            }
            sqlx::Error::Io(_) => AppError::service_unavailable("Database connection error"),
            // https://www.postgresql.org/docs/current/errcodes-appendix.html
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some("23502") => AppError::bad_request("Required field is null"),
                Some("23503") => AppError::conflict("Referenced record does not exist"),
                Some("23505") => AppError::conflict("Duplicate key value"),
                Some("23514") => AppError::bad_request("Check constraint violation"),
                Some(code) if code.starts_with("53") => {
                    AppError::service_unavailable("Database resource exhausted")
                }
                Some(code) if code.starts_with("57") => {
                    AppError::service_unavailable("Database unavailable")
                }
                _ => AppError::internal("Database error"),
            },
            _ => AppError::internal("Database error"),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}
