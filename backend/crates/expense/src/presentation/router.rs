//! Expense Router

use axum::{Router, routing::get};

use crate::domain::repository::ExpenseRepository;
use crate::presentation::handlers::{self, ExpenseAppState};

/// Expense CRUD routes
///
/// Expects the auth request gate to be layered over the merged router.
pub fn expense_router<E>(state: ExpenseAppState<E>) -> Router
where
    E: ExpenseRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/expenses",
            get(handlers::list_expenses::<E>).post(handlers::create_expense::<E>),
        )
        .route(
            "/expenses/{expense_id}",
            get(handlers::get_expense::<E>)
                .put(handlers::update_expense::<E>)
                .delete(handlers::delete_expense::<E>),
        )
        .with_state(state)
}
