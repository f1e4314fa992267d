//! Dashboard repository for summary and activity queries.

use fintrack_core::dashboard::{ActivityItem, DashboardService, DashboardSummary};
use sea_orm::{DatabaseConnection, TransactionTrait};

use super::aggregation::{
    budget_overview, latest_income, latest_savings_goal, total_budgets, total_expenses,
    total_investments,
};
use super::error::LedgerError;
use super::ledger::{recent_expenses, recent_investments};

/// Dashboard repository for read-only views.
#[derive(Debug, Clone)]
pub struct DashboardRepository {
    db: DatabaseConnection,
    recent_limit: u64,
}

impl DashboardRepository {
    /// Creates a new dashboard repository showing `recent_limit` rows per
    /// recent list.
    #[must_use]
    pub const fn new(db: DatabaseConnection, recent_limit: u64) -> Self {
        Self { db, recent_limit }
    }

    /// Builds the dashboard summary.
    ///
    /// All figures are read in one transaction so they agree with each other.
    ///
    /// # Errors
    ///
    /// Returns a storage error if any query fails.
    pub async fn summary(&self) -> Result<DashboardSummary, LedgerError> {
        let txn = self.db.begin().await?;

        let income = latest_income(&txn).await?;
        let total_income = income.unwrap_or_default();
        let total_expenses = total_expenses(&txn).await?;
        let total_investments = total_investments(&txn).await?;
        let total_budgets = total_budgets(&txn).await?;
        let total_allocations = total_expenses + total_investments + total_budgets;

        let savings_goal = latest_savings_goal(&txn).await?;
        let savings_progress = savings_goal.as_ref().map(|goal| {
            DashboardService::savings_progress(total_income, total_expenses, goal.amount)
        });

        let recent_expenses = recent_expenses(&txn, self.recent_limit).await?;
        let recent_investments = recent_investments(&txn, self.recent_limit).await?;
        let budget_overview = budget_overview(&txn).await?;

        txn.commit().await?;

        Ok(DashboardSummary {
            total_income,
            total_expenses,
            total_investments,
            total_budgets,
            total_allocations,
            unallocated: total_income - total_allocations,
            savings: total_income - total_expenses,
            savings_goal,
            savings_progress,
            has_income: income.is_some(),
            recent_expenses,
            recent_investments,
            budget_overview,
        })
    }

    /// Expenses and investments merged newest first, at most `limit` items.
    ///
    /// # Errors
    ///
    /// Returns a storage error if any query fails.
    pub async fn recent_activity(&self, limit: u64) -> Result<Vec<ActivityItem>, LedgerError> {
        let txn = self.db.begin().await?;
        let expenses = recent_expenses(&txn, limit).await?;
        let investments = recent_investments(&txn, limit).await?;
        txn.commit().await?;

        let items = expenses
            .into_iter()
            .map(ActivityItem::from)
            .chain(investments.into_iter().map(ActivityItem::from))
            .collect();

        Ok(DashboardService::merge_activity(
            items,
            usize::try_from(limit).unwrap_or(usize::MAX),
        ))
    }
}
