//! Expense Use Cases
//!
//! Ids arrive as raw path segments. A segment that is not a UUID is reported
//! the same way as an id that does not exist.

use std::sync::Arc;

use kernel::id::{ExpenseId, ProfileId};

use crate::domain::entities::{Expense, ExpenseDraft};
use crate::domain::repository::ExpenseRepository;
use crate::error::{ExpenseError, ExpenseResult};

pub struct ExpenseUseCase<E>
where
    E: ExpenseRepository,
{
    repo: Arc<E>,
}

impl<E> ExpenseUseCase<E>
where
    E: ExpenseRepository,
{
    pub fn new(repo: Arc<E>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, owner_id: &ProfileId) -> ExpenseResult<Vec<Expense>> {
        self.repo.list_for_owner(owner_id).await
    }

    pub async fn get(&self, owner_id: &ProfileId, raw_id: &str) -> ExpenseResult<Expense> {
        let expense_id = parse_id(raw_id)?;
        self.repo
            .find(owner_id, &expense_id)
            .await?
            .ok_or_else(|| ExpenseError::NotFound(raw_id.to_string()))
    }

    pub async fn create(&self, owner_id: &ProfileId, draft: ExpenseDraft) -> ExpenseResult<Expense> {
        let expense = Expense::create(*owner_id, draft);
        self.repo.create(&expense).await?;

        tracing::info!(
            profile_id = %owner_id,
            expense_id = %expense.expense_id,
            "Expense created"
        );

        Ok(expense)
    }

    pub async fn update(
        &self,
        owner_id: &ProfileId,
        raw_id: &str,
        draft: ExpenseDraft,
    ) -> ExpenseResult<Expense> {
        let mut expense = self.get(owner_id, raw_id).await?;
        expense.apply(draft);

        // Deleted between the read and the write
        if !self.repo.update(&expense).await? {
            return Err(ExpenseError::NotFound(raw_id.to_string()));
        }

        tracing::info!(
            profile_id = %owner_id,
            expense_id = %expense.expense_id,
            "Expense updated"
        );

        Ok(expense)
    }

    pub async fn delete(&self, owner_id: &ProfileId, raw_id: &str) -> ExpenseResult<()> {
        let expense_id = parse_id(raw_id)?;
        if !self.repo.delete(owner_id, &expense_id).await? {
            return Err(ExpenseError::NotFound(raw_id.to_string()));
        }

        tracing::info!(profile_id = %owner_id, expense_id = %expense_id, "Expense deleted");
        Ok(())
    }
}

fn parse_id(raw_id: &str) -> ExpenseResult<ExpenseId> {
    ExpenseId::parse_str(raw_id).map_err(|_| ExpenseError::NotFound(raw_id.to_string()))
}
