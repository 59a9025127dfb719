//! Domain Entities

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::{ExpenseId, ProfileId};

use crate::error::{ExpenseError, ExpenseResult};

/// Maximum expense name length (characters)
pub const NAME_MAX_LENGTH: usize = 200;

/// A single expense record owned by one profile
///
/// Amounts are integer minor currency units (cents), never floats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub expense_id: ExpenseId,
    pub owner_id: ProfileId,
    pub name: String,
    pub note: Option<String>,
    pub category: Option<String>,
    pub amount_minor: i64,
    pub spent_on: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Expense {
    pub fn create(owner_id: ProfileId, draft: ExpenseDraft) -> Self {
        let now = Utc::now();
        Self {
            expense_id: ExpenseId::new(),
            owner_id,
            name: draft.name,
            note: draft.note,
            category: draft.category,
            amount_minor: draft.amount_minor,
            spent_on: draft.spent_on,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields; id, owner and `created_at` are kept
    pub fn apply(&mut self, draft: ExpenseDraft) {
        self.name = draft.name;
        self.note = draft.note;
        self.category = draft.category;
        self.amount_minor = draft.amount_minor;
        self.spent_on = draft.spent_on;
        self.updated_at = Utc::now().max(self.created_at);
    }

    #[inline]
    pub fn is_owned_by(&self, profile_id: &ProfileId) -> bool {
        &self.owner_id == profile_id
    }
}

/// Validated editable fields of an expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    name: String,
    note: Option<String>,
    category: Option<String>,
    amount_minor: i64,
    spent_on: NaiveDate,
}

impl ExpenseDraft {
    pub fn new(
        name: String,
        note: Option<String>,
        category: Option<String>,
        amount_minor: i64,
        spent_on: NaiveDate,
    ) -> ExpenseResult<Self> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ExpenseError::Validation(
                "Expense name cannot be empty".to_string(),
            ));
        }
        if name.chars().count() > NAME_MAX_LENGTH {
            return Err(ExpenseError::Validation(format!(
                "Expense name must be at most {} characters",
                NAME_MAX_LENGTH
            )));
        }
        if amount_minor < 0 {
            return Err(ExpenseError::Validation(
                "Expense amount cannot be negative".to_string(),
            ));
        }

        Ok(Self {
            name,
            note: non_blank(note),
            category: non_blank(category),
            amount_minor,
            spent_on,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
