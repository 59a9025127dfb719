//! PostgreSQL Repository Implementation

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{ExpenseId, ProfileId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Expense;
use crate::domain::repository::ExpenseRepository;
use crate::error::ExpenseResult;

#[derive(Clone)]
pub struct PgExpenseRepository {
    pool: PgPool,
}

impl PgExpenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ExpenseRepository for PgExpenseRepository {
    async fn create(&self, expense: &Expense) -> ExpenseResult<()> {
        sqlx::query(
            r#"
            INSERT INTO expenses (
                expense_id,
                profile_id,
                name,
                note,
                category,
                amount_minor,
                spent_on,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(expense.expense_id.as_uuid())
        .bind(expense.owner_id.as_uuid())
        .bind(&expense.name)
        .bind(expense.note.as_deref())
        .bind(expense.category.as_deref())
        .bind(expense.amount_minor)
        .bind(expense.spent_on)
        .bind(expense.created_at)
        .bind(expense.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(
        &self,
        owner_id: &ProfileId,
        expense_id: &ExpenseId,
    ) -> ExpenseResult<Option<Expense>> {
        let row = sqlx::query_as::<_, ExpenseRow>(
            r#"
            SELECT
                expense_id,
                profile_id,
                name,
                note,
                category,
                amount_minor,
                spent_on,
                created_at,
                updated_at
            FROM expenses
            WHERE expense_id = $1 AND profile_id = $2
            "#,
        )
        .bind(expense_id.as_uuid())
        .bind(owner_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ExpenseRow::into_expense))
    }

    async fn list_for_owner(&self, owner_id: &ProfileId) -> ExpenseResult<Vec<Expense>> {
        let rows = sqlx::query_as::<_, ExpenseRow>(
            r#"
            SELECT
                expense_id,
                profile_id,
                name,
                note,
                category,
                amount_minor,
                spent_on,
                created_at,
                updated_at
            FROM expenses
            WHERE profile_id = $1
            ORDER BY spent_on DESC, created_at DESC
            "#,
        )
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ExpenseRow::into_expense).collect())
    }

    async fn update(&self, expense: &Expense) -> ExpenseResult<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE expenses SET
                name = $3,
                note = $4,
                category = $5,
                amount_minor = $6,
                spent_on = $7,
                updated_at = $8
            WHERE expense_id = $1 AND profile_id = $2
            "#,
        )
        .bind(expense.expense_id.as_uuid())
        .bind(expense.owner_id.as_uuid())
        .bind(&expense.name)
        .bind(expense.note.as_deref())
        .bind(expense.category.as_deref())
        .bind(expense.amount_minor)
        .bind(expense.spent_on)
        .bind(expense.updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }

    async fn delete(&self, owner_id: &ProfileId, expense_id: &ExpenseId) -> ExpenseResult<bool> {
        let deleted = sqlx::query("DELETE FROM expenses WHERE expense_id = $1 AND profile_id = $2")
            .bind(expense_id.as_uuid())
            .bind(owner_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ExpenseRow {
    expense_id: Uuid,
    profile_id: Uuid,
    name: String,
    note: Option<String>,
    category: Option<String>,
    amount_minor: i64,
    spent_on: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ExpenseRow {
    fn into_expense(self) -> Expense {
        Expense {
            expense_id: ExpenseId::from_uuid(self.expense_id),
            owner_id: ProfileId::from_uuid(self.profile_id),
            name: self.name,
            note: self.note,
            category: self.category,
            amount_minor: self.amount_minor,
            spent_on: self.spent_on,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
