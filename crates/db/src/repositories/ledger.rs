//! Ledger store and validated write paths.
//!
//! The `append_*` functions are raw inserts; they trust their input. The
//! [`LedgerRepository`] write paths are the only entry points callers should
//! use: each one opens a store transaction, loads a [`LedgerSnapshot`] on that
//! transaction, runs the matching [`LedgerService`] validator, appends, and
//! commits. A rejected write leaves the store untouched.
//!
//! [`LedgerSnapshot`]: fintrack_core::ledger::LedgerSnapshot

use chrono::Utc;
use fintrack_core::ledger::{
    BudgetEntry, ExpenseEntry, FinanceError, IncomeEntry, InvestmentEntry, LedgerService,
    NewBudget, NewExpense, NewInvestment, NewSavingsGoal, SavingsGoalEntry, ValidBudget,
    ValidExpense, ValidInvestment, ValidSavingsGoal,
};
use fintrack_shared::LedgerPolicy;
use fintrack_shared::types::money::to_minor_units;
use fintrack_shared::types::{PageRequest, PageResponse};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryOrder, QuerySelect, SqlErr, TransactionTrait,
};
use tracing::{error, info, warn};

use super::aggregation::load_snapshot;
use super::error::LedgerError;
use crate::entities::{budgets, expenses, income, investments, savings_goals};

// ============================================================================
// Store appends
// ============================================================================

/// Appends an income row.
///
/// # Errors
///
/// Returns an error if the amount does not fit the store or the insert fails.
pub async fn append_income<C: ConnectionTrait>(
    conn: &C,
    amount: Decimal,
) -> Result<IncomeEntry, LedgerError> {
    let model = income::ActiveModel {
        amount_cents: Set(amount_cents(amount)?),
        recorded_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    Ok(model.into())
}

/// Appends a budget row.
///
/// # Errors
///
/// Returns `FinanceError::DuplicateBudgetCategory` if the category already
/// has a budget, or a storage error if the insert fails.
pub async fn append_budget<C: ConnectionTrait>(
    conn: &C,
    budget: &ValidBudget,
) -> Result<BudgetEntry, LedgerError> {
    let model = budgets::ActiveModel {
        category: Set(budget.category.clone()),
        amount_cents: Set(amount_cents(budget.amount)?),
        recorded_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(conn)
    .await
    .map_err(|err| match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            LedgerError::Rejected(FinanceError::DuplicateBudgetCategory(budget.category.clone()))
        }
        _ => err.into(),
    })?;

    Ok(model.into())
}

/// Appends an expense row.
///
/// # Errors
///
/// Returns an error if the amount does not fit the store or the insert fails.
pub async fn append_expense<C: ConnectionTrait>(
    conn: &C,
    expense: &ValidExpense,
) -> Result<ExpenseEntry, LedgerError> {
    let model = expenses::ActiveModel {
        amount_cents: Set(amount_cents(expense.amount)?),
        category: Set(expense.category.clone()),
        description: Set(expense.description.clone()),
        recorded_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    Ok(model.into())
}

/// Appends an investment row.
///
/// # Errors
///
/// Returns an error if the amount does not fit the store or the insert fails.
pub async fn append_investment<C: ConnectionTrait>(
    conn: &C,
    investment: &ValidInvestment,
) -> Result<InvestmentEntry, LedgerError> {
    let model = investments::ActiveModel {
        amount_cents: Set(amount_cents(investment.amount)?),
        investment_type: Set(investment.investment_type.as_str().to_string()),
        recorded_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    Ok(InvestmentEntry::try_from(model)?)
}

/// Appends a savings goal row.
///
/// # Errors
///
/// Returns an error if the amount does not fit the store or the insert fails.
pub async fn append_savings_goal<C: ConnectionTrait>(
    conn: &C,
    goal: &ValidSavingsGoal,
) -> Result<SavingsGoalEntry, LedgerError> {
    let model = savings_goals::ActiveModel {
        amount_cents: Set(amount_cents(goal.amount)?),
        target_date: Set(goal.target_date),
        recorded_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    Ok(model.into())
}

fn amount_cents(amount: Decimal) -> Result<i64, LedgerError> {
    to_minor_units(amount)
        .filter(|cents| *cents > 0)
        .ok_or_else(|| FinanceError::InvalidAmount(amount.to_string()).into())
}

/// Category key used to load per-category figures; blank names have none.
fn category_key(raw: &str) -> Option<&str> {
    Some(raw.trim()).filter(|category| !category.is_empty())
}

fn log_failure(operation: &'static str, err: &LedgerError) {
    match err {
        LedgerError::Rejected(e) => {
            warn!(operation, kind = %e.kind(), error = %e, "Ledger write rejected");
        }
        other => error!(operation, kind = %other.kind(), error = %other, "Ledger store failure"),
    }
}

// ============================================================================
// Repository
// ============================================================================

/// Repository for ledger writes and entry listings.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    db: DatabaseConnection,
    policy: LedgerPolicy,
}

impl LedgerRepository {
    /// Creates a new ledger repository with the default policy.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_policy(db, LedgerPolicy::default())
    }

    /// Creates a new ledger repository with an explicit policy.
    #[must_use]
    pub const fn with_policy(db: DatabaseConnection, policy: LedgerPolicy) -> Self {
        Self { db, policy }
    }

    /// Returns the policy the write paths validate against.
    #[must_use]
    pub const fn policy(&self) -> LedgerPolicy {
        self.policy
    }

    // ========================================================================
    // Validated writes
    // ========================================================================

    /// Records a new income figure.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` or `IncomeBelowAllocations` on rejection, or a
    /// storage error.
    pub async fn set_income(&self, amount: Decimal) -> Result<IncomeEntry, LedgerError> {
        let entry = async {
            let txn = self.db.begin().await?;
            let snapshot = load_snapshot(&txn, None).await?;
            let amount = LedgerService::validate_income(&snapshot, amount)?;
            let entry = append_income(&txn, amount).await?;
            txn.commit().await?;
            Ok::<_, LedgerError>(entry)
        }
        .await
        .inspect_err(|e| log_failure("set_income", e))?;

        info!(id = %entry.id, amount = %entry.amount, "Income recorded");
        Ok(entry)
    }

    /// Creates a budget for a category that has none.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount`, `EmptyCategory`, `NoIncomeSet`,
    /// `AllocationExceedsIncome` or `DuplicateBudgetCategory` on rejection,
    /// or a storage error.
    pub async fn set_budget(&self, input: &NewBudget) -> Result<BudgetEntry, LedgerError> {
        let entry = async {
            let txn = self.db.begin().await?;
            let snapshot = load_snapshot(&txn, category_key(&input.category)).await?;
            let budget = LedgerService::validate_budget(&snapshot, input)?;
            let entry = append_budget(&txn, &budget).await?;
            txn.commit().await?;
            Ok::<_, LedgerError>(entry)
        }
        .await
        .inspect_err(|e| log_failure("set_budget", e))?;

        info!(id = %entry.id, category = %entry.category, amount = %entry.amount, "Budget recorded");
        Ok(entry)
    }

    /// Records an expense.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount`, `EmptyCategory`, `NoIncomeSet`,
    /// `AllocationExceedsIncome` or `ExpenseExceedsBudget` on rejection, or a
    /// storage error.
    pub async fn add_expense(&self, input: &NewExpense) -> Result<ExpenseEntry, LedgerError> {
        let entry = async {
            let txn = self.db.begin().await?;
            let snapshot = load_snapshot(&txn, category_key(&input.category)).await?;
            let expense = LedgerService::validate_expense(&snapshot, input)?;
            let entry = append_expense(&txn, &expense).await?;
            txn.commit().await?;
            Ok::<_, LedgerError>(entry)
        }
        .await
        .inspect_err(|e| log_failure("add_expense", e))?;

        info!(id = %entry.id, category = %entry.category, amount = %entry.amount, "Expense recorded");
        Ok(entry)
    }

    /// Records an investment.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount`, `InvalidInvestmentType`, `NoIncomeSet` or
    /// `AllocationExceedsIncome` on rejection, or a storage error.
    pub async fn add_investment(
        &self,
        input: &NewInvestment,
    ) -> Result<InvestmentEntry, LedgerError> {
        let entry = async {
            let txn = self.db.begin().await?;
            let snapshot = load_snapshot(&txn, None).await?;
            let investment = LedgerService::validate_investment(&snapshot, input)?;
            let entry = append_investment(&txn, &investment).await?;
            txn.commit().await?;
            Ok::<_, LedgerError>(entry)
        }
        .await
        .inspect_err(|e| log_failure("add_investment", e))?;

        info!(id = %entry.id, kind = %entry.investment_type, amount = %entry.amount, "Investment recorded");
        Ok(entry)
    }

    /// Records a savings goal. The latest goal is the active one.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount`, `NoIncomeSet`, `AllocationExceedsIncome` or
    /// `DateTooFarInFuture` on rejection, or a storage error.
    pub async fn set_savings_goal(
        &self,
        input: &NewSavingsGoal,
    ) -> Result<SavingsGoalEntry, LedgerError> {
        let today = Utc::now().date_naive();
        let horizon_years = self.policy.savings_horizon_years;

        let entry = async {
            let txn = self.db.begin().await?;
            let snapshot = load_snapshot(&txn, None).await?;
            let goal =
                LedgerService::validate_savings_goal(&snapshot, input, today, horizon_years)?;
            let entry = append_savings_goal(&txn, &goal).await?;
            txn.commit().await?;
            Ok::<_, LedgerError>(entry)
        }
        .await
        .inspect_err(|e| log_failure("set_savings_goal", e))?;

        info!(id = %entry.id, target_date = %entry.target_date, amount = %entry.amount, "Savings goal recorded");
        Ok(entry)
    }

    /// Deletes every entry from all five collections in one transaction.
    ///
    /// # Errors
    ///
    /// Returns a storage error; on failure nothing is deleted.
    pub async fn clear_all(&self) -> Result<(), LedgerError> {
        async {
            let txn = self.db.begin().await?;
            income::Entity::delete_many().exec(&txn).await?;
            budgets::Entity::delete_many().exec(&txn).await?;
            expenses::Entity::delete_many().exec(&txn).await?;
            investments::Entity::delete_many().exec(&txn).await?;
            savings_goals::Entity::delete_many().exec(&txn).await?;
            txn.commit().await?;
            Ok::<_, LedgerError>(())
        }
        .await
        .inspect_err(|e| log_failure("clear_all", e))?;

        info!("Ledger cleared");
        Ok(())
    }

    // ========================================================================
    // Listings
    // ========================================================================

    /// Most recent expenses, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub async fn recent_expenses(&self, limit: u64) -> Result<Vec<ExpenseEntry>, LedgerError> {
        Ok(recent_expenses(&self.db, limit).await?)
    }

    /// Most recent investments, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub async fn recent_investments(
        &self,
        limit: u64,
    ) -> Result<Vec<InvestmentEntry>, LedgerError> {
        Ok(recent_investments(&self.db, limit).await?)
    }

    /// One page of expenses, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub async fn list_expenses(
        &self,
        request: PageRequest,
    ) -> Result<PageResponse<ExpenseEntry>, LedgerError> {
        let total = expenses::Entity::find().count(&self.db).await?;
        let rows = expenses::Entity::find()
            .order_by_desc(expenses::Column::RecordedAt)
            .order_by_desc(expenses::Column::Id)
            .offset(request.offset())
            .limit(request.limit())
            .all(&self.db)
            .await?;

        let data = rows.into_iter().map(Into::into).collect();
        Ok(PageResponse::new(data, request, total))
    }

    /// One page of investments, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the query fails.
    pub async fn list_investments(
        &self,
        request: PageRequest,
    ) -> Result<PageResponse<InvestmentEntry>, LedgerError> {
        let total = investments::Entity::find().count(&self.db).await?;
        let rows = investments::Entity::find()
            .order_by_desc(investments::Column::RecordedAt)
            .order_by_desc(investments::Column::Id)
            .offset(request.offset())
            .limit(request.limit())
            .all(&self.db)
            .await?;

        let data = rows
            .into_iter()
            .map(InvestmentEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PageResponse::new(data, request, total))
    }
}

/// Most recent expenses, newest first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn recent_expenses<C: ConnectionTrait>(
    conn: &C,
    limit: u64,
) -> Result<Vec<ExpenseEntry>, sea_orm::DbErr> {
    let rows = expenses::Entity::find()
        .order_by_desc(expenses::Column::RecordedAt)
        .order_by_desc(expenses::Column::Id)
        .limit(limit)
        .all(conn)
        .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

/// Most recent investments, newest first.
///
/// # Errors
///
/// Returns an error if the query fails or a stored type is unknown.
pub async fn recent_investments<C: ConnectionTrait>(
    conn: &C,
    limit: u64,
) -> Result<Vec<InvestmentEntry>, sea_orm::DbErr> {
    let rows = investments::Entity::find()
        .order_by_desc(investments::Column::RecordedAt)
        .order_by_desc(investments::Column::Id)
        .limit(limit)
        .all(conn)
        .await?;

    rows.into_iter().map(InvestmentEntry::try_from).collect()
}
