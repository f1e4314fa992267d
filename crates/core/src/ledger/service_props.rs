//! Property-based tests for the allocation rules.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::FinanceError;
use super::service::LedgerService;
use super::snapshot::{CategorySnapshot, LedgerSnapshot};
use super::types::{NewBudget, NewExpense, NewInvestment};

fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

/// One proposed write against the ledger.
#[derive(Debug, Clone)]
enum Write {
    Expense(i64),
    Investment(i64),
    Budget(i64),
}

fn write_strategy() -> impl Strategy<Value = Write> {
    prop_oneof![
        (1i64..50_000).prop_map(Write::Expense),
        (1i64..50_000).prop_map(Write::Investment),
        (1i64..50_000).prop_map(Write::Budget),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Applying only accepted writes never pushes allocations past income.
    #[test]
    fn prop_accepted_writes_stay_within_income(
        income in 1i64..1_000_000,
        writes in prop::collection::vec(write_strategy(), 0..40),
    ) {
        let mut state = LedgerSnapshot {
            income: Some(cents(income)),
            ..LedgerSnapshot::default()
        };

        for (index, write) in writes.into_iter().enumerate() {
            match write {
                Write::Expense(c) => {
                    let input = NewExpense {
                        amount: cents(c),
                        category: "misc".to_string(),
                        description: String::new(),
                    };
                    let scoped = state.clone().with_category(CategorySnapshot::unbudgeted("misc"));
                    if let Ok(valid) = LedgerService::validate_expense(&scoped, &input) {
                        state.total_expenses += valid.amount;
                    }
                }
                Write::Investment(c) => {
                    let input = NewInvestment {
                        amount: cents(c),
                        investment_type: "Stocks".to_string(),
                    };
                    if let Ok(valid) = LedgerService::validate_investment(&state, &input) {
                        state.total_investments += valid.amount;
                    }
                }
                Write::Budget(c) => {
                    // Fresh category each time so the duplicate check never fires.
                    let input = NewBudget {
                        category: format!("category-{index}"),
                        amount: cents(c),
                    };
                    let scoped = state
                        .clone()
                        .with_category(CategorySnapshot::unbudgeted(input.category.clone()));
                    if let Ok(valid) = LedgerService::validate_budget(&scoped, &input) {
                        state.total_budgets += valid.amount;
                    }
                }
            }

            prop_assert!(state.total_allocations() <= cents(income));
        }
    }

    /// The capacity check accepts exactly when the proposal fits.
    #[test]
    fn prop_capacity_matches_headroom(
        income in 0i64..1_000_000,
        allocated in 0i64..1_000_000,
        proposed in 1i64..1_000_000,
    ) {
        let state = LedgerSnapshot {
            income: Some(cents(income)),
            total_expenses: cents(allocated),
            ..LedgerSnapshot::default()
        };

        let fits = cents(allocated) + cents(proposed) <= cents(income);
        let result = LedgerService::check_allocation_capacity(&state, cents(proposed));

        prop_assert_eq!(result.is_ok(), fits);
        if !fits {
            let is_allocation_error =
                matches!(result, Err(FinanceError::AllocationExceedsIncome { .. }));
            prop_assert!(is_allocation_error);
        }
    }

    /// Accepted expenses in a budgeted category never exceed its budget.
    #[test]
    fn prop_category_spending_stays_within_budget(
        budget in 1i64..100_000,
        expenses in prop::collection::vec(1i64..20_000, 0..30),
    ) {
        let mut category = CategorySnapshot {
            category: "food".to_string(),
            budget: Some(cents(budget)),
            spent: Decimal::ZERO,
        };

        for expense in expenses {
            if LedgerService::check_budget_capacity(&category, cents(expense)).is_ok() {
                category.spent += cents(expense);
            }
            prop_assert!(category.spent <= cents(budget));
        }
    }

    /// An income change is accepted exactly when it still covers allocations.
    #[test]
    fn prop_income_floor(
        allocated in 0i64..1_000_000,
        new_income in 1i64..1_000_000,
    ) {
        let state = LedgerSnapshot {
            income: Some(cents(2_000_000)),
            total_investments: cents(allocated),
            ..LedgerSnapshot::default()
        };

        let result = LedgerService::validate_income(&state, cents(new_income));
        prop_assert_eq!(result.is_ok(), new_income >= allocated);
    }
}
