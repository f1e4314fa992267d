//! Ledger migration.
//!
//! Creates the five append-only ledger tables. Amounts are stored as integer
//! cents so that sums stay exact.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for statement in UP_SQL {
            db.execute_unprepared(statement).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        for table in ["savings_goals", "investments", "expenses", "budgets", "income"] {
            db.execute_unprepared(&format!("DROP TABLE IF EXISTS {table};"))
                .await?;
        }
        Ok(())
    }
}

/// Executed in order, one statement each.
const UP_SQL: [&str; 10] = [
    INCOME_SQL,
    INCOME_RECENT_IDX,
    BUDGETS_SQL,
    BUDGETS_CATEGORY_IDX,
    EXPENSES_SQL,
    EXPENSES_CATEGORY_IDX,
    INVESTMENTS_SQL,
    INVESTMENTS_RECENT_IDX,
    SAVINGS_GOALS_SQL,
    SAVINGS_GOALS_RECENT_IDX,
];

const INCOME_SQL: &str = r"
CREATE TABLE income (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    amount_cents INTEGER NOT NULL CHECK (amount_cents > 0),
    recorded_at TEXT NOT NULL
);
";

const INCOME_RECENT_IDX: &str =
    "CREATE INDEX idx_income_recent ON income(recorded_at DESC, id DESC);";

const BUDGETS_SQL: &str = r"
CREATE TABLE budgets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    category TEXT NOT NULL CHECK (length(trim(category)) > 0),
    amount_cents INTEGER NOT NULL CHECK (amount_cents > 0),
    recorded_at TEXT NOT NULL
);
";

const BUDGETS_CATEGORY_IDX: &str =
    "CREATE UNIQUE INDEX uq_budgets_category ON budgets(category);";

const EXPENSES_SQL: &str = r"
CREATE TABLE expenses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    amount_cents INTEGER NOT NULL CHECK (amount_cents > 0),
    category TEXT NOT NULL CHECK (length(trim(category)) > 0),
    description TEXT NOT NULL DEFAULT '',
    recorded_at TEXT NOT NULL
);
";

const EXPENSES_CATEGORY_IDX: &str =
    "CREATE INDEX idx_expenses_category ON expenses(category);";

const INVESTMENTS_SQL: &str = r"
CREATE TABLE investments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    amount_cents INTEGER NOT NULL CHECK (amount_cents > 0),
    investment_type TEXT NOT NULL CHECK (
        investment_type IN ('Stocks', 'Bonds', 'Mutual Funds', 'Real Estate', 'Other')
    ),
    recorded_at TEXT NOT NULL
);
";

const INVESTMENTS_RECENT_IDX: &str =
    "CREATE INDEX idx_investments_recent ON investments(recorded_at DESC, id DESC);";

const SAVINGS_GOALS_SQL: &str = r"
CREATE TABLE savings_goals (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    amount_cents INTEGER NOT NULL CHECK (amount_cents > 0),
    target_date TEXT NOT NULL,
    recorded_at TEXT NOT NULL
);
";

const SAVINGS_GOALS_RECENT_IDX: &str =
    "CREATE INDEX idx_savings_goals_recent ON savings_goals(recorded_at DESC, id DESC);";
