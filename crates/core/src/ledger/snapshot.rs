//! Aggregate ledger state a validation decision is made against.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Point-in-time aggregates read inside the write transaction.
///
/// Every check in [`LedgerService`](super::LedgerService) is a pure function
/// of one snapshot plus the proposed value, so the decision and the write
/// that follows observe the same state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Most recent income, if any was recorded.
    pub income: Option<Decimal>,
    /// Sum of all expenses.
    pub total_expenses: Decimal,
    /// Sum of all investments.
    pub total_investments: Decimal,
    /// Sum of all budgets.
    pub total_budgets: Decimal,
    /// Per-category figures, present when the write targets a category.
    pub category: Option<CategorySnapshot>,
}

impl LedgerSnapshot {
    /// Expenses + investments + budgets.
    #[must_use]
    pub fn total_allocations(&self) -> Decimal {
        self.total_expenses + self.total_investments + self.total_budgets
    }

    /// Income, or zero when none is recorded.
    #[must_use]
    pub fn income_or_zero(&self) -> Decimal {
        self.income.unwrap_or(Decimal::ZERO)
    }

    /// Income left after allocations. Negative only if the ledger was
    /// written outside the validation engine.
    #[must_use]
    pub fn headroom(&self) -> Decimal {
        self.income_or_zero() - self.total_allocations()
    }

    /// Attaches category figures to the snapshot.
    #[must_use]
    pub fn with_category(mut self, category: CategorySnapshot) -> Self {
        self.category = Some(category);
        self
    }
}

/// Budget and spending for a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySnapshot {
    /// Category name.
    pub category: String,
    /// Budgeted amount, if a budget exists for the category.
    pub budget: Option<Decimal>,
    /// Sum of expenses recorded in the category.
    pub spent: Decimal,
}

impl CategorySnapshot {
    /// Creates a category snapshot with no budget and nothing spent.
    #[must_use]
    pub fn unbudgeted(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            budget: None,
            spent: Decimal::ZERO,
        }
    }

    /// Budget left in the category, `None` when the category has no cap.
    #[must_use]
    pub fn remaining(&self) -> Option<Decimal> {
        self.budget.map(|budget| budget - self.spent)
    }
}
