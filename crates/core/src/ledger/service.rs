//! Ledger service for write validation.
//!
//! This module provides the validation engine every ledger write passes
//! through before it is persisted. All functions are pure: they read a
//! [`LedgerSnapshot`] and the proposed value and never touch storage.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

use super::error::FinanceError;
use super::snapshot::{CategorySnapshot, LedgerSnapshot};
use super::types::{
    NewBudget, NewExpense, NewInvestment, NewSavingsGoal, ValidBudget, ValidExpense,
    ValidInvestment, ValidSavingsGoal,
};
use super::validation::{normalize_amount, validate_category, validate_investment_type};

/// Ledger service for write validation.
pub struct LedgerService;

impl LedgerService {
    // ========================================================================
    // Individual checks
    // ========================================================================

    /// Returns the latest income.
    ///
    /// # Errors
    ///
    /// Returns `FinanceError::NoIncomeSet` if no income was recorded.
    pub fn require_income_set(snapshot: &LedgerSnapshot) -> Result<Decimal, FinanceError> {
        snapshot.income.ok_or(FinanceError::NoIncomeSet)
    }

    /// Checks that `allocations + proposed <= income`.
    ///
    /// # Errors
    ///
    /// Returns `FinanceError::AllocationExceedsIncome` when the proposed
    /// amount does not fit.
    pub fn check_allocation_capacity(
        snapshot: &LedgerSnapshot,
        proposed: Decimal,
    ) -> Result<(), FinanceError> {
        let income = snapshot.income_or_zero();
        let allocations = snapshot.total_allocations();

        if allocations + proposed > income {
            return Err(FinanceError::AllocationExceedsIncome {
                income,
                allocations,
                proposed,
            });
        }

        Ok(())
    }

    /// Checks that `spent + proposed <= budget` for a budgeted category.
    ///
    /// Categories without a budget have no cap.
    ///
    /// # Errors
    ///
    /// Returns `FinanceError::ExpenseExceedsBudget` when the expense would
    /// overspend the category.
    pub fn check_budget_capacity(
        category: &CategorySnapshot,
        proposed: Decimal,
    ) -> Result<(), FinanceError> {
        let Some(budget) = category.budget else {
            return Ok(());
        };

        if category.spent + proposed > budget {
            return Err(FinanceError::ExpenseExceedsBudget {
                category: category.category.clone(),
                budget,
                spent: category.spent,
                proposed,
            });
        }

        Ok(())
    }

    /// Checks that a new income still covers current allocations.
    ///
    /// # Errors
    ///
    /// Returns `FinanceError::IncomeBelowAllocations` when
    /// `new_income < allocations`.
    pub fn check_income_decrease_floor(
        snapshot: &LedgerSnapshot,
        new_income: Decimal,
    ) -> Result<(), FinanceError> {
        let allocations = snapshot.total_allocations();

        if new_income < allocations {
            return Err(FinanceError::IncomeBelowAllocations {
                income: new_income,
                allocations,
            });
        }

        Ok(())
    }

    /// Checks that a savings target lies at most `horizon_years` calendar
    /// years after `today`.
    ///
    /// # Errors
    ///
    /// Returns `FinanceError::DateTooFarInFuture` past the horizon.
    pub fn check_savings_horizon(
        target_date: NaiveDate,
        today: NaiveDate,
        horizon_years: u32,
    ) -> Result<(), FinanceError> {
        let Some(latest) = Self::savings_horizon(today, horizon_years) else {
            return Ok(());
        };

        if target_date > latest {
            return Err(FinanceError::DateTooFarInFuture {
                target: target_date,
                latest,
            });
        }

        Ok(())
    }

    /// Latest date a savings goal may target, `None` if it overflows the
    /// calendar.
    #[must_use]
    pub fn savings_horizon(today: NaiveDate, horizon_years: u32) -> Option<NaiveDate> {
        today.checked_add_months(Months::new(horizon_years.checked_mul(12)?))
    }

    /// Checks that the category has no budget yet.
    ///
    /// # Errors
    ///
    /// Returns `FinanceError::DuplicateBudgetCategory` if one exists.
    pub fn check_duplicate_budget_category(
        category: &CategorySnapshot,
    ) -> Result<(), FinanceError> {
        if category.budget.is_some() {
            return Err(FinanceError::DuplicateBudgetCategory(
                category.category.clone(),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Per-write validation
    // ========================================================================

    /// Validates a new income figure.
    ///
    /// Order: amount, then floor against current allocations.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn validate_income(
        snapshot: &LedgerSnapshot,
        amount: Decimal,
    ) -> Result<Decimal, FinanceError> {
        let amount = normalize_amount(amount)?;
        Self::check_income_decrease_floor(snapshot, amount)?;
        Ok(amount)
    }

    /// Validates a new category budget.
    ///
    /// Order: amount, category, income set, allocation capacity, duplicate.
    /// The snapshot must carry figures for the budget's category.
    /// Expenses already recorded in the category are not re-checked against
    /// the new cap; budgets only constrain later expenses.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn validate_budget(
        snapshot: &LedgerSnapshot,
        input: &NewBudget,
    ) -> Result<ValidBudget, FinanceError> {
        let amount = normalize_amount(input.amount)?;
        let category = validate_category(&input.category)?;
        Self::require_income_set(snapshot)?;
        Self::check_allocation_capacity(snapshot, amount)?;

        Self::check_duplicate_budget_category(Self::category_for(snapshot, &category)?)?;

        Ok(ValidBudget { category, amount })
    }

    /// Validates a new expense.
    ///
    /// Order: amount, category, income set, allocation capacity, category
    /// budget capacity. The snapshot must carry figures for the expense's
    /// category.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn validate_expense(
        snapshot: &LedgerSnapshot,
        input: &NewExpense,
    ) -> Result<ValidExpense, FinanceError> {
        let amount = normalize_amount(input.amount)?;
        let category = validate_category(&input.category)?;
        Self::require_income_set(snapshot)?;
        Self::check_allocation_capacity(snapshot, amount)?;

        Self::check_budget_capacity(Self::category_for(snapshot, &category)?, amount)?;

        Ok(ValidExpense {
            amount,
            category,
            description: input.description.trim().to_string(),
        })
    }

    /// Validates a new investment.
    ///
    /// Order: amount, non-empty type, income set, allocation capacity, type
    /// membership.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn validate_investment(
        snapshot: &LedgerSnapshot,
        input: &NewInvestment,
    ) -> Result<ValidInvestment, FinanceError> {
        let amount = normalize_amount(input.amount)?;
        if input.investment_type.trim().is_empty() {
            return Err(FinanceError::InvalidInvestmentType(
                input.investment_type.clone(),
            ));
        }
        Self::require_income_set(snapshot)?;
        Self::check_allocation_capacity(snapshot, amount)?;
        let investment_type = validate_investment_type(&input.investment_type)?;

        Ok(ValidInvestment {
            amount,
            investment_type,
        })
    }

    /// Validates a new savings goal.
    ///
    /// Order: amount, income set, allocation capacity, horizon. Savings goals
    /// must fit in the remaining income but are not counted as allocations
    /// once recorded.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn validate_savings_goal(
        snapshot: &LedgerSnapshot,
        input: &NewSavingsGoal,
        today: NaiveDate,
        horizon_years: u32,
    ) -> Result<ValidSavingsGoal, FinanceError> {
        let amount = normalize_amount(input.amount)?;
        Self::require_income_set(snapshot)?;
        Self::check_allocation_capacity(snapshot, amount)?;
        Self::check_savings_horizon(input.target_date, today, horizon_years)?;

        Ok(ValidSavingsGoal {
            amount,
            target_date: input.target_date,
        })
    }

    /// Category figures for `category`.
    ///
    /// A snapshot without figures, or loaded for another category, is an
    /// error: the category checks never pass on missing data.
    fn category_for<'a>(
        snapshot: &'a LedgerSnapshot,
        category: &str,
    ) -> Result<&'a CategorySnapshot, FinanceError> {
        match &snapshot.category {
            Some(existing) if existing.category == category => Ok(existing),
            other => Err(FinanceError::CategoryNotLoaded {
                expected: category.to_string(),
                loaded: other.as_ref().map(|existing| existing.category.clone()),
            }),
        }
    }
}
