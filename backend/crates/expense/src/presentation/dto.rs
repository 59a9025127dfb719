//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Expense, ExpenseDraft};
use crate::error::ExpenseResult;

/// Body of both create and update
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRequest {
    pub name: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub amount_minor: i64,
    pub date: NaiveDate,
}

impl ExpenseRequest {
    pub fn into_draft(self) -> ExpenseResult<ExpenseDraft> {
        ExpenseDraft::new(
            self.name,
            self.note,
            self.category,
            self.amount_minor,
            self.date,
        )
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseResponse {
    pub expense_id: String,
    pub name: String,
    pub note: Option<String>,
    pub category: Option<String>,
    pub amount_minor: i64,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        Self {
            expense_id: expense.expense_id.to_string(),
            name: expense.name,
            note: expense.note,
            category: expense.category,
            amount_minor: expense.amount_minor,
            date: expense.spent_on,
            created_at: expense.created_at,
            updated_at: expense.updated_at,
        }
    }
}
