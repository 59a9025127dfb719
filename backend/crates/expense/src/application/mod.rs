//! Application Layer
//!
//! Use cases for the caller's expenses.

pub mod expenses;

pub use expenses::ExpenseUseCase;
