//! Budget service for overview calculation.

use rust_decimal::Decimal;

use super::types::BudgetOverviewLine;

/// Budget service for business logic.
pub struct BudgetService;

impl BudgetService {
    /// Builds the overview line for a category.
    ///
    /// `percentage_used` is zero when `budgeted` is zero.
    #[must_use]
    pub fn overview_line(
        category: impl Into<String>,
        budgeted: Decimal,
        spent: Decimal,
    ) -> BudgetOverviewLine {
        BudgetOverviewLine {
            category: category.into(),
            budgeted,
            spent,
            remaining: budgeted - spent,
            percentage_used: Self::percentage_used(budgeted, spent),
        }
    }

    /// Share of the budget already spent, in percent.
    #[must_use]
    pub fn percentage_used(budgeted: Decimal, spent: Decimal) -> Decimal {
        if budgeted.is_zero() {
            Decimal::ZERO
        } else {
            (spent / budgeted * Decimal::ONE_HUNDRED).round_dp(2)
        }
    }

    /// Sorts overview lines by category name.
    pub fn sort_overview(lines: &mut [BudgetOverviewLine]) {
        lines.sort_by(|a, b| a.category.cmp(&b.category));
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_overview_line() {
        let line = BudgetService::overview_line("food", dec!(150), dec!(200));
        assert_eq!(line.remaining, dec!(-50));
        assert_eq!(line.percentage_used, dec!(133.33));
    }

    #[test]
    fn test_percentage_zero_budget() {
        assert_eq!(BudgetService::percentage_used(dec!(0), dec!(10)), Decimal::ZERO);
    }

    #[test]
    fn test_sort_overview() {
        let mut lines = vec![
            BudgetService::overview_line("rent", dec!(1), dec!(0)),
            BudgetService::overview_line("food", dec!(1), dec!(0)),
        ];
        BudgetService::sort_overview(&mut lines);
        assert_eq!(lines[0].category, "food");
    }
}
