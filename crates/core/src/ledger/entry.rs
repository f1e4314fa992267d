//! Ledger entry domain types.
//!
//! Entries are immutable once recorded. The only way to remove them is the
//! full-ledger clear.

use chrono::{DateTime, NaiveDate, Utc};
use fintrack_shared::types::{BudgetId, ExpenseId, IncomeId, InvestmentId, SavingsGoalId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::investment::InvestmentType;

/// A recorded income figure. Only the most recent one is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeEntry {
    /// Row identifier.
    pub id: IncomeId,
    /// Income amount.
    pub amount: Decimal,
    /// When the entry was written.
    pub recorded_at: DateTime<Utc>,
}

/// A spending cap reserved for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEntry {
    /// Row identifier.
    pub id: BudgetId,
    /// Budget category; unique across budgets.
    pub category: String,
    /// Budgeted amount.
    pub amount: Decimal,
    /// When the entry was written.
    pub recorded_at: DateTime<Utc>,
}

/// Money spent in a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Row identifier.
    pub id: ExpenseId,
    /// Amount spent.
    pub amount: Decimal,
    /// Spending category.
    pub category: String,
    /// Free-form description.
    pub description: String,
    /// When the entry was written.
    pub recorded_at: DateTime<Utc>,
}

/// Money put into an investment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentEntry {
    /// Row identifier.
    pub id: InvestmentId,
    /// Amount invested.
    pub amount: Decimal,
    /// Kind of investment.
    pub investment_type: InvestmentType,
    /// When the entry was written.
    pub recorded_at: DateTime<Utc>,
}

/// A savings target with a deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoalEntry {
    /// Row identifier.
    pub id: SavingsGoalId,
    /// Amount to save.
    pub amount: Decimal,
    /// Date the goal should be reached by.
    pub target_date: NaiveDate,
    /// When the entry was written.
    pub recorded_at: DateTime<Utc>,
}
