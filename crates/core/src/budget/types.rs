//! Budget data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Budget versus spending for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetOverviewLine {
    /// Category name.
    pub category: String,
    /// Budgeted amount.
    pub budgeted: Decimal,
    /// Sum of expenses in the category.
    pub spent: Decimal,
    /// `budgeted - spent`; negative when an expense predates the budget.
    pub remaining: Decimal,
    /// `spent / budgeted * 100`, rounded to two places.
    pub percentage_used: Decimal,
}
