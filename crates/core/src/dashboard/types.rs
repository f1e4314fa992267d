//! Dashboard data types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::BudgetOverviewLine;
use crate::ledger::{ExpenseEntry, InvestmentEntry, SavingsGoalEntry};

/// Dashboard summary response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Latest income, zero if none.
    pub total_income: Decimal,
    /// Sum of expenses.
    pub total_expenses: Decimal,
    /// Sum of investments.
    pub total_investments: Decimal,
    /// Sum of budgets.
    pub total_budgets: Decimal,
    /// Expenses + investments + budgets.
    pub total_allocations: Decimal,
    /// Income minus allocations.
    pub unallocated: Decimal,
    /// Income minus expenses.
    pub savings: Decimal,
    /// Latest savings goal.
    pub savings_goal: Option<SavingsGoalEntry>,
    /// Progress toward the latest savings goal.
    pub savings_progress: Option<SavingsProgress>,
    /// Whether any income has been recorded.
    pub has_income: bool,
    /// Most recent expenses, newest first.
    pub recent_expenses: Vec<ExpenseEntry>,
    /// Most recent investments, newest first.
    pub recent_investments: Vec<InvestmentEntry>,
    /// Budget versus spending per category.
    pub budget_overview: Vec<BudgetOverviewLine>,
}

/// Savings measured against a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsProgress {
    /// Income minus expenses.
    pub savings: Decimal,
    /// Goal amount.
    pub target: Decimal,
    /// Amount still missing, never negative.
    pub shortfall: Decimal,
    /// Whether savings reached the target.
    pub achieved: bool,
}

/// Kind of ledger activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// An expense.
    Expense,
    /// An investment.
    Investment,
}

/// One line of the activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    /// Activity kind.
    pub kind: ActivityKind,
    /// Category for expenses, investment type for investments.
    pub label: String,
    /// Amount.
    pub amount: Decimal,
    /// When the entry was written.
    pub recorded_at: DateTime<Utc>,
}

impl From<ExpenseEntry> for ActivityItem {
    fn from(entry: ExpenseEntry) -> Self {
        Self {
            kind: ActivityKind::Expense,
            label: entry.category,
            amount: entry.amount,
            recorded_at: entry.recorded_at,
        }
    }
}

impl From<InvestmentEntry> for ActivityItem {
    fn from(entry: InvestmentEntry) -> Self {
        Self {
            kind: ActivityKind::Investment,
            label: entry.investment_type.to_string(),
            amount: entry.amount,
            recorded_at: entry.recorded_at,
        }
    }
}
