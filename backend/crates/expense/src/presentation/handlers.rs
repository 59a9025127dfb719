//! HTTP Handlers
//!
//! Every handler takes an [`AuthContext`]; without one the extractor
//! rejects with 401 before the handler runs.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use auth::AuthContext;

use crate::application::ExpenseUseCase;
use crate::domain::repository::ExpenseRepository;
use crate::error::ExpenseResult;
use crate::presentation::dto::{ExpenseRequest, ExpenseResponse};

#[derive(Clone)]
pub struct ExpenseAppState<E>
where
    E: ExpenseRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<E>,
}

impl<E> ExpenseAppState<E>
where
    E: ExpenseRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: E) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }

    fn use_case(&self) -> ExpenseUseCase<E> {
        ExpenseUseCase::new(self.repo.clone())
    }
}

/// GET /expenses
pub async fn list_expenses<E>(
    State(state): State<ExpenseAppState<E>>,
    ctx: AuthContext,
) -> ExpenseResult<Json<Vec<ExpenseResponse>>>
where
    E: ExpenseRepository + Clone + Send + Sync + 'static,
{
    let expenses = state.use_case().list(&ctx.profile_id).await?;
    Ok(Json(expenses.into_iter().map(Into::into).collect()))
}

/// GET /expenses/{expense_id}
pub async fn get_expense<E>(
    State(state): State<ExpenseAppState<E>>,
    ctx: AuthContext,
    Path(expense_id): Path<String>,
) -> ExpenseResult<Json<ExpenseResponse>>
where
    E: ExpenseRepository + Clone + Send + Sync + 'static,
{
    let expense = state.use_case().get(&ctx.profile_id, &expense_id).await?;
    Ok(Json(expense.into()))
}

/// POST /expenses
pub async fn create_expense<E>(
    State(state): State<ExpenseAppState<E>>,
    ctx: AuthContext,
    Json(req): Json<ExpenseRequest>,
) -> ExpenseResult<(StatusCode, Json<ExpenseResponse>)>
where
    E: ExpenseRepository + Clone + Send + Sync + 'static,
{
    let draft = req.into_draft()?;
    let expense = state.use_case().create(&ctx.profile_id, draft).await?;
    Ok((StatusCode::CREATED, Json(expense.into())))
}

/// PUT /expenses/{expense_id}
pub async fn update_expense<E>(
    State(state): State<ExpenseAppState<E>>,
    ctx: AuthContext,
    Path(expense_id): Path<String>,
    Json(req): Json<ExpenseRequest>,
) -> ExpenseResult<Json<ExpenseResponse>>
where
    E: ExpenseRepository + Clone + Send + Sync + 'static,
{
    let draft = req.into_draft()?;
    let expense = state
        .use_case()
        .update(&ctx.profile_id, &expense_id, draft)
        .await?;
    Ok(Json(expense.into()))
}

/// DELETE /expenses/{expense_id}
pub async fn delete_expense<E>(
    State(state): State<ExpenseAppState<E>>,
    ctx: AuthContext,
    Path(expense_id): Path<String>,
) -> ExpenseResult<StatusCode>
where
    E: ExpenseRepository + Clone + Send + Sync + 'static,
{
    state.use_case().delete(&ctx.profile_id, &expense_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
