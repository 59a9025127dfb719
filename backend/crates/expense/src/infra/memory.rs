//! In-memory Repository

use std::sync::Arc;

use dashmap::DashMap;
use kernel::id::{ExpenseId, ProfileId};

use crate::domain::entities::Expense;
use crate::domain::repository::ExpenseRepository;
use crate::error::{ExpenseError, ExpenseResult};

#[derive(Clone, Default)]
pub struct InMemoryExpenseRepository {
    expenses: Arc<DashMap<ExpenseId, Expense>>,
}

impl InMemoryExpenseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExpenseRepository for InMemoryExpenseRepository {
    async fn create(&self, expense: &Expense) -> ExpenseResult<()> {
        if self.expenses.contains_key(&expense.expense_id) {
            return Err(ExpenseError::Internal(format!(
                "expense id {} already exists",
                expense.expense_id
            )));
        }
        self.expenses.insert(expense.expense_id, expense.clone());
        Ok(())
    }

    async fn find(
        &self,
        owner_id: &ProfileId,
        expense_id: &ExpenseId,
    ) -> ExpenseResult<Option<Expense>> {
        Ok(self
            .expenses
            .get(expense_id)
            .filter(|e| e.is_owned_by(owner_id))
            .map(|e| e.value().clone()))
    }

    async fn list_for_owner(&self, owner_id: &ProfileId) -> ExpenseResult<Vec<Expense>> {
        let mut expenses: Vec<Expense> = self
            .expenses
            .iter()
            .filter(|e| e.is_owned_by(owner_id))
            .map(|e| e.value().clone())
            .collect();
        expenses.sort_by(|a, b| {
            b.spent_on
                .cmp(&a.spent_on)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(expenses)
    }

    async fn update(&self, expense: &Expense) -> ExpenseResult<bool> {
        match self.expenses.get_mut(&expense.expense_id) {
            Some(mut stored) if stored.is_owned_by(&expense.owner_id) => {
                *stored = expense.clone();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, owner_id: &ProfileId, expense_id: &ExpenseId) -> ExpenseResult<bool> {
        Ok(self
            .expenses
            .remove_if(expense_id, |_, e| e.is_owned_by(owner_id))
            .is_some())
    }
}
