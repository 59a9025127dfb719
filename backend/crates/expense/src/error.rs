//! Expense Error Types
//!
//! Expense-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type ExpenseResult<T> = Result<T, ExpenseError>;

#[derive(Debug, Error)]
pub enum ExpenseError {
    /// Unknown id, malformed id, or an id owned by another profile
    #[error("Expense not found for the expense id {0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ExpenseError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ExpenseError::NotFound(_) => ErrorKind::NotFound,
            ExpenseError::Validation(_) => ErrorKind::BadRequest,
            ExpenseError::Database(e) => AppError::from(e).kind(),
            ExpenseError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    fn log(&self) {
        match self {
            ExpenseError::Database(e) => {
                tracing::error!(error = %e, "Expense database error");
            }
            ExpenseError::Internal(msg) => {
                tracing::error!(message = %msg, "Expense internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Expense error");
            }
        }
    }
}

impl From<ExpenseError> for AppError {
    fn from(err: ExpenseError) -> Self {
        if let ExpenseError::Database(e) = &err {
            return AppError::from(e);
        }

        let kind = err.kind();
        if kind.is_server_error() {
            return AppError::new(kind, "An unexpected error occurred");
        }
        AppError::new(kind, err.to_string())
    }
}

impl IntoResponse for ExpenseError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
