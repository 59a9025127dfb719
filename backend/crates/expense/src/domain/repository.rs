//! Repository Traits
//!
//! Every lookup is keyed by owner as well as id, so a profile can never read
//! or change another profile's expense.

use kernel::id::{ExpenseId, ProfileId};

use crate::domain::entities::Expense;
use crate::error::ExpenseResult;

#[trait_variant::make(ExpenseRepository: Send)]
pub trait LocalExpenseRepository {
    async fn create(&self, expense: &Expense) -> ExpenseResult<()>;

    async fn find(&self, owner_id: &ProfileId, expense_id: &ExpenseId)
    -> ExpenseResult<Option<Expense>>;

    /// Newest `spent_on` first, then newest `created_at`
    async fn list_for_owner(&self, owner_id: &ProfileId) -> ExpenseResult<Vec<Expense>>;

    /// Returns false if no expense with that id belongs to the owner
    async fn update(&self, expense: &Expense) -> ExpenseResult<bool>;

    /// Returns false if no expense with that id belongs to the owner
    async fn delete(&self, owner_id: &ProfileId, expense_id: &ExpenseId) -> ExpenseResult<bool>;
}
