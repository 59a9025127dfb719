//! Expense Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Expense entity, validated drafts, repository trait
//! - `application/` - Expense use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Every operation is scoped to the profile of the caller's
//! `auth::AuthContext`. Another profile's expense is reported as not found.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ExpenseError, ExpenseResult};
pub use infra::{memory::InMemoryExpenseRepository, postgres::PgExpenseRepository};
pub use presentation::handlers::ExpenseAppState;
pub use presentation::router::expense_router;

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
