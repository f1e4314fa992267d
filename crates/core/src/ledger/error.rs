//! Ledger error types for validation and capacity failures.
//!
//! Every rejection carries the offending value(s) so a presentation layer
//! can render a message without re-querying the store.

use chrono::NaiveDate;
use fintrack_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the validation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FinanceError {
    // ========== Input Errors ==========
    /// Amount could not be parsed or is not strictly positive after truncation.
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// Date is not a valid `YYYY-MM-DD` string.
    #[error("Invalid date format {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Category is empty after trimming.
    #[error("Category cannot be empty")]
    EmptyCategory,

    /// Investment type is empty or not one of the supported kinds.
    #[error("Invalid investment type {0:?}, must be one of: Stocks, Bonds, Mutual Funds, Real Estate, Other")]
    InvalidInvestmentType(String),

    /// Savings goal target date lies beyond the allowed horizon.
    #[error("Target date {target} is after the latest allowed date {latest}")]
    DateTooFarInFuture {
        /// Requested target date.
        target: NaiveDate,
        /// Latest date accepted.
        latest: NaiveDate,
    },

    // ========== Capacity Errors ==========
    /// No income has been recorded yet.
    #[error("Please set your income first")]
    NoIncomeSet,

    /// Proposed allocation would push total allocations above income.
    #[error(
        "Total allocations cannot exceed income: {allocations} allocated + {proposed} proposed > {income} income"
    )]
    AllocationExceedsIncome {
        /// Latest recorded income.
        income: Decimal,
        /// Current allocations (expenses + investments + budgets).
        allocations: Decimal,
        /// Amount being added.
        proposed: Decimal,
    },

    /// Proposed expense would overspend its category budget.
    #[error(
        "Expense exceeds budget for category {category}: {spent} spent + {proposed} proposed > {budget} budgeted"
    )]
    ExpenseExceedsBudget {
        /// Budget category.
        category: String,
        /// Budgeted amount for the category.
        budget: Decimal,
        /// Amount already spent in the category.
        spent: Decimal,
        /// Amount being added.
        proposed: Decimal,
    },

    /// New income would be lower than what is already allocated.
    #[error("New income {income} cannot be less than current allocations {allocations}")]
    IncomeBelowAllocations {
        /// Proposed income.
        income: Decimal,
        /// Current allocations.
        allocations: Decimal,
    },

    /// A budget for the category already exists.
    #[error("Budget already exists for category: {0}")]
    DuplicateBudgetCategory(String),

    // ========== Caller Errors ==========
    /// The snapshot carries no figures, or figures for another category.
    #[error("Snapshot has no figures for category {expected} (loaded: {loaded:?})")]
    CategoryNotLoaded {
        /// Category the write targets.
        expected: String,
        /// Category the snapshot was loaded for, if any.
        loaded: Option<String>,
    },
}

/// Flat classification of every failure a ledger operation can surface.
///
/// Includes the storage kinds raised by the persistence layer so callers
/// can match on one enum regardless of where the failure originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`FinanceError::InvalidAmount`].
    InvalidAmount,
    /// See [`FinanceError::InvalidDate`].
    InvalidDate,
    /// See [`FinanceError::NoIncomeSet`].
    NoIncomeSet,
    /// See [`FinanceError::AllocationExceedsIncome`].
    AllocationExceedsIncome,
    /// See [`FinanceError::ExpenseExceedsBudget`].
    ExpenseExceedsBudget,
    /// See [`FinanceError::IncomeBelowAllocations`].
    IncomeBelowAllocations,
    /// See [`FinanceError::DateTooFarInFuture`].
    DateTooFarInFuture,
    /// See [`FinanceError::DuplicateBudgetCategory`].
    DuplicateBudgetCategory,
    /// See [`FinanceError::EmptyCategory`].
    EmptyCategory,
    /// See [`FinanceError::InvalidInvestmentType`].
    InvalidInvestmentType,
    /// See [`FinanceError::CategoryNotLoaded`].
    CategoryNotLoaded,
    /// The store could not be reached.
    StorageUnavailable,
    /// The store was reachable but the operation failed.
    ///
    /// Includes lock conflicts under concurrent writers, such as SQLite
    /// `database is locked` when another transaction holds the write lock.
    /// Nothing was written; the caller may retry.
    Storage,
}

impl ErrorKind {
    /// Returns the stable error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::InvalidDate => "INVALID_DATE",
            Self::NoIncomeSet => "NO_INCOME_SET",
            Self::AllocationExceedsIncome => "ALLOCATION_EXCEEDS_INCOME",
            Self::ExpenseExceedsBudget => "EXPENSE_EXCEEDS_BUDGET",
            Self::IncomeBelowAllocations => "INCOME_BELOW_ALLOCATIONS",
            Self::DateTooFarInFuture => "DATE_TOO_FAR_IN_FUTURE",
            Self::DuplicateBudgetCategory => "DUPLICATE_BUDGET_CATEGORY",
            Self::EmptyCategory => "EMPTY_CATEGORY",
            Self::InvalidInvestmentType => "INVALID_INVESTMENT_TYPE",
            Self::CategoryNotLoaded => "CATEGORY_NOT_LOADED",
            Self::StorageUnavailable => "STORAGE_UNAVAILABLE",
            Self::Storage => "STORAGE_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FinanceError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidAmount(_) => ErrorKind::InvalidAmount,
            Self::InvalidDate(_) => ErrorKind::InvalidDate,
            Self::EmptyCategory => ErrorKind::EmptyCategory,
            Self::InvalidInvestmentType(_) => ErrorKind::InvalidInvestmentType,
            Self::DateTooFarInFuture { .. } => ErrorKind::DateTooFarInFuture,
            Self::NoIncomeSet => ErrorKind::NoIncomeSet,
            Self::AllocationExceedsIncome { .. } => ErrorKind::AllocationExceedsIncome,
            Self::ExpenseExceedsBudget { .. } => ErrorKind::ExpenseExceedsBudget,
            Self::IncomeBelowAllocations { .. } => ErrorKind::IncomeBelowAllocations,
            Self::DuplicateBudgetCategory(_) => ErrorKind::DuplicateBudgetCategory,
            Self::CategoryNotLoaded { .. } => ErrorKind::CategoryNotLoaded,
        }
    }

    /// Returns true for errors caused by the shape of the input rather than
    /// by the current ledger state.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::InvalidDate(_)
                | Self::EmptyCategory
                | Self::InvalidInvestmentType(_)
                | Self::DateTooFarInFuture { .. }
        )
    }
}

impl From<FinanceError> for AppError {
    fn from(err: FinanceError) -> Self {
        let message = err.to_string();
        match err {
            FinanceError::DuplicateBudgetCategory(_) => Self::Conflict(message),
            FinanceError::CategoryNotLoaded { .. } => Self::Internal(message),
            e if e.is_input_error() => Self::Validation(message),
            _ => Self::BusinessRule(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_kind_codes() {
        assert_eq!(
            FinanceError::InvalidAmount("x".into()).kind().as_str(),
            "INVALID_AMOUNT"
        );
        assert_eq!(FinanceError::NoIncomeSet.kind(), ErrorKind::NoIncomeSet);
        assert_eq!(
            FinanceError::DuplicateBudgetCategory("food".into()).kind(),
            ErrorKind::DuplicateBudgetCategory
        );
        assert_eq!(ErrorKind::StorageUnavailable.to_string(), "STORAGE_UNAVAILABLE");
    }

    #[test]
    fn test_error_display_carries_values() {
        let err = FinanceError::ExpenseExceedsBudget {
            category: "food".into(),
            budget: dec!(150),
            spent: dec!(100),
            proposed: dec!(60),
        };
        let text = err.to_string();
        assert!(text.contains("food"));
        assert!(text.contains("150"));
        assert!(text.contains("60"));
    }

    #[test]
    fn test_app_error_mapping() {
        let validation: AppError = FinanceError::EmptyCategory.into();
        assert_eq!(validation.status_code(), 400);

        let rule: AppError = FinanceError::AllocationExceedsIncome {
            income: dec!(1000),
            allocations: dec!(900),
            proposed: dec!(200),
        }
        .into();
        assert_eq!(rule.status_code(), 422);

        let conflict: AppError = FinanceError::DuplicateBudgetCategory("rent".into()).into();
        assert_eq!(conflict.status_code(), 409);
        assert_eq!(conflict.error_code(), "CONFLICT");

        let caller: AppError = FinanceError::CategoryNotLoaded {
            expected: "food".into(),
            loaded: None,
        }
        .into();
        assert_eq!(caller.status_code(), 500);
        assert!(!caller.is_user_error());
    }
}
