//! Personal ledger and write validation.
//!
//! This module implements the ledger core:
//! - Recorded entries (income, budgets, expenses, investments, savings goals)
//! - Inputs and their validated forms
//! - Aggregate snapshots the checks run against
//! - Input parsing and normalization
//! - Ledger service for write validation

pub mod entry;
pub mod error;
pub mod investment;
pub mod service;
pub mod snapshot;
pub mod types;
pub mod validation;

#[cfg(test)]
mod service_props;
#[cfg(test)]
mod validation_props;

pub use entry::{BudgetEntry, ExpenseEntry, IncomeEntry, InvestmentEntry, SavingsGoalEntry};
pub use error::{ErrorKind, FinanceError};
pub use investment::InvestmentType;
pub use service::LedgerService;
pub use snapshot::{CategorySnapshot, LedgerSnapshot};
pub use types::{
    NewBudget, NewExpense, NewInvestment, NewSavingsGoal, ValidBudget, ValidExpense,
    ValidInvestment, ValidSavingsGoal,
};
pub use validation::{
    normalize_amount, validate_amount, validate_category, validate_date, validate_investment_type,
};
