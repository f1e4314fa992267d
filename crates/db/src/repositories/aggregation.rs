//! Aggregation queries over the ledger.
//!
//! Every query is a free function generic over [`ConnectionTrait`] so the
//! write paths can run it on their own transaction handle. The decision and
//! the append that follows then observe the same state. [`AggregationRepository`]
//! wraps the same functions for read-only callers.
//!
//! Failures are propagated; a store error is never reported as a zero total.

use std::collections::BTreeMap;

use fintrack_core::budget::{BudgetOverviewLine, BudgetService};
use fintrack_core::ledger::{CategorySnapshot, LedgerSnapshot, SavingsGoalEntry};
use fintrack_shared::types::money::from_minor_units;
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use super::error::LedgerError;
use crate::entities::{budgets, expenses, income, investments, savings_goals};

// ============================================================================
// Totals
// ============================================================================

/// Most recent income, `None` if none was ever recorded.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn latest_income<C: ConnectionTrait>(conn: &C) -> Result<Option<Decimal>, DbErr> {
    let cents: Option<i64> = income::Entity::find()
        .select_only()
        .column(income::Column::AmountCents)
        .order_by_desc(income::Column::RecordedAt)
        .order_by_desc(income::Column::Id)
        .into_tuple()
        .one(conn)
        .await?;

    Ok(cents.map(from_minor_units))
}

/// Most recent income, zero if none was recorded.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn total_income<C: ConnectionTrait>(conn: &C) -> Result<Decimal, DbErr> {
    Ok(latest_income(conn).await?.unwrap_or(Decimal::ZERO))
}

/// Sum of all expenses.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn total_expenses<C: ConnectionTrait>(conn: &C) -> Result<Decimal, DbErr> {
    let cents: Vec<i64> = expenses::Entity::find()
        .select_only()
        .column(expenses::Column::AmountCents)
        .into_tuple()
        .all(conn)
        .await?;

    Ok(sum_cents(&cents))
}

/// Sum of all investments.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn total_investments<C: ConnectionTrait>(conn: &C) -> Result<Decimal, DbErr> {
    let cents: Vec<i64> = investments::Entity::find()
        .select_only()
        .column(investments::Column::AmountCents)
        .into_tuple()
        .all(conn)
        .await?;

    Ok(sum_cents(&cents))
}

/// Sum of all budgets.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn total_budgets<C: ConnectionTrait>(conn: &C) -> Result<Decimal, DbErr> {
    let cents: Vec<i64> = budgets::Entity::find()
        .select_only()
        .column(budgets::Column::AmountCents)
        .into_tuple()
        .all(conn)
        .await?;

    Ok(sum_cents(&cents))
}

/// Expenses + investments + budgets. Savings goals are not allocations.
///
/// # Errors
///
/// Returns an error if any query fails.
pub async fn total_allocations<C: ConnectionTrait>(conn: &C) -> Result<Decimal, DbErr> {
    Ok(total_expenses(conn).await? + total_investments(conn).await? + total_budgets(conn).await?)
}

// ============================================================================
// Per-category
// ============================================================================

/// Expense totals keyed by category, ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn expense_totals_by_category<C: ConnectionTrait>(
    conn: &C,
) -> Result<BTreeMap<String, Decimal>, DbErr> {
    let rows: Vec<(String, i64)> = expenses::Entity::find()
        .select_only()
        .column(expenses::Column::Category)
        .column(expenses::Column::AmountCents)
        .into_tuple()
        .all(conn)
        .await?;

    let mut totals = BTreeMap::new();
    for (category, cents) in rows {
        *totals.entry(category).or_insert(Decimal::ZERO) += from_minor_units(cents);
    }
    Ok(totals)
}

/// Sum of expenses recorded in one category, zero if none.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn expenses_by_category<C: ConnectionTrait>(
    conn: &C,
    category: &str,
) -> Result<Decimal, DbErr> {
    let cents: Vec<i64> = expenses::Entity::find()
        .select_only()
        .column(expenses::Column::AmountCents)
        .filter(expenses::Column::Category.eq(category))
        .into_tuple()
        .all(conn)
        .await?;

    Ok(sum_cents(&cents))
}

/// Budget for one category, `None` if the category has no budget.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn budget_for_category<C: ConnectionTrait>(
    conn: &C,
    category: &str,
) -> Result<Option<Decimal>, DbErr> {
    let cents: Option<i64> = budgets::Entity::find()
        .select_only()
        .column(budgets::Column::AmountCents)
        .filter(budgets::Column::Category.eq(category))
        .into_tuple()
        .one(conn)
        .await?;

    Ok(cents.map(from_minor_units))
}

/// Budget versus spending for every budgeted category, sorted by category.
///
/// # Errors
///
/// Returns an error if any query fails.
pub async fn budget_overview<C: ConnectionTrait>(
    conn: &C,
) -> Result<Vec<BudgetOverviewLine>, DbErr> {
    let budget_rows: Vec<(String, i64)> = budgets::Entity::find()
        .select_only()
        .column(budgets::Column::Category)
        .column(budgets::Column::AmountCents)
        .into_tuple()
        .all(conn)
        .await?;

    let spent = expense_totals_by_category(conn).await?;

    let mut lines: Vec<BudgetOverviewLine> = budget_rows
        .into_iter()
        .map(|(category, cents)| {
            let spent = spent.get(&category).copied().unwrap_or(Decimal::ZERO);
            BudgetService::overview_line(category, from_minor_units(cents), spent)
        })
        .collect();
    BudgetService::sort_overview(&mut lines);

    Ok(lines)
}

// ============================================================================
// Snapshots
// ============================================================================

/// Most recent savings goal.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn latest_savings_goal<C: ConnectionTrait>(
    conn: &C,
) -> Result<Option<SavingsGoalEntry>, DbErr> {
    let goal = savings_goals::Entity::find()
        .order_by_desc(savings_goals::Column::RecordedAt)
        .order_by_desc(savings_goals::Column::Id)
        .one(conn)
        .await?;

    Ok(goal.map(Into::into))
}

/// Loads the aggregates a validation decision needs.
///
/// When `category` is given, its budget and spending are attached.
///
/// # Errors
///
/// Returns an error if any query fails.
pub async fn load_snapshot<C: ConnectionTrait>(
    conn: &C,
    category: Option<&str>,
) -> Result<LedgerSnapshot, DbErr> {
    let snapshot = LedgerSnapshot {
        income: latest_income(conn).await?,
        total_expenses: total_expenses(conn).await?,
        total_investments: total_investments(conn).await?,
        total_budgets: total_budgets(conn).await?,
        category: None,
    };

    let Some(category) = category else {
        return Ok(snapshot);
    };

    let figures = CategorySnapshot {
        category: category.to_string(),
        budget: budget_for_category(conn, category).await?,
        spent: expenses_by_category(conn, category).await?,
    };
    Ok(snapshot.with_category(figures))
}

fn sum_cents(cents: &[i64]) -> Decimal {
    cents.iter().copied().map(from_minor_units).sum()
}

// ============================================================================
// Repository
// ============================================================================

/// Read-only aggregation queries over a connection pool.
#[derive(Debug, Clone)]
pub struct AggregationRepository {
    db: DatabaseConnection,
}

impl AggregationRepository {
    /// Creates a new aggregation repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Most recent income, zero if none.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn total_income(&self) -> Result<Decimal, LedgerError> {
        Ok(total_income(&self.db).await?)
    }

    /// Sum of all expenses.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn total_expenses(&self) -> Result<Decimal, LedgerError> {
        Ok(total_expenses(&self.db).await?)
    }

    /// Sum of all investments.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn total_investments(&self) -> Result<Decimal, LedgerError> {
        Ok(total_investments(&self.db).await?)
    }

    /// Sum of all budgets.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn total_budgets(&self) -> Result<Decimal, LedgerError> {
        Ok(total_budgets(&self.db).await?)
    }

    /// Expenses + investments + budgets.
    ///
    /// # Errors
    ///
    /// Returns an error if any query fails.
    pub async fn total_allocations(&self) -> Result<Decimal, LedgerError> {
        Ok(total_allocations(&self.db).await?)
    }

    /// Sum of expenses recorded in one category.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn expenses_by_category(&self, category: &str) -> Result<Decimal, LedgerError> {
        Ok(expenses_by_category(&self.db, category).await?)
    }

    /// Expense totals keyed by category.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn expense_totals_by_category(
        &self,
    ) -> Result<BTreeMap<String, Decimal>, LedgerError> {
        Ok(expense_totals_by_category(&self.db).await?)
    }

    /// Budget versus spending per category.
    ///
    /// # Errors
    ///
    /// Returns an error if any query fails.
    pub async fn budget_overview(&self) -> Result<Vec<BudgetOverviewLine>, LedgerError> {
        Ok(budget_overview(&self.db).await?)
    }

    /// Aggregates for a validation decision, read outside any write.
    ///
    /// # Errors
    ///
    /// Returns an error if any query fails.
    pub async fn snapshot(&self, category: Option<&str>) -> Result<LedgerSnapshot, LedgerError> {
        Ok(load_snapshot(&self.db, category).await?)
    }
}
