//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Expense, ExpenseDraft)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
