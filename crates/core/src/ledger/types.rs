//! Domain types for ledger writes.
//!
//! `New*` inputs carry already-decoded values from the caller. The
//! validation engine turns them into `Valid*` values that are safe to
//! persist: amounts truncated to cents, categories trimmed, investment
//! types resolved.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::investment::InvestmentType;

/// Input for creating a category budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBudget {
    /// Budget category.
    pub category: String,
    /// Budgeted amount.
    pub amount: Decimal,
}

/// Input for recording an expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpense {
    /// Amount spent.
    pub amount: Decimal,
    /// Spending category.
    pub category: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// Input for recording an investment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInvestment {
    /// Amount invested.
    pub amount: Decimal,
    /// Investment kind label as submitted.
    pub investment_type: String,
}

/// Input for setting a savings goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSavingsGoal {
    /// Amount to save.
    pub amount: Decimal,
    /// Target date.
    pub target_date: NaiveDate,
}

/// A budget that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBudget {
    /// Trimmed category.
    pub category: String,
    /// Truncated amount.
    pub amount: Decimal,
}

/// An expense that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidExpense {
    /// Truncated amount.
    pub amount: Decimal,
    /// Trimmed category.
    pub category: String,
    /// Trimmed description.
    pub description: String,
}

/// An investment that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidInvestment {
    /// Truncated amount.
    pub amount: Decimal,
    /// Resolved kind.
    pub investment_type: InvestmentType,
}

/// A savings goal that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidSavingsGoal {
    /// Truncated amount.
    pub amount: Decimal,
    /// Target date.
    pub target_date: NaiveDate,
}
