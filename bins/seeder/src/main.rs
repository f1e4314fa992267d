//! Demo ledger seeder for Fintrack development.
//!
//! Migrates the configured database and records a small month of activity
//! through the validated write paths.
//!
//! The seeder refuses to touch a ledger that already holds data. Pass
//! `--reset` to wipe every collection of the configured database first.
//!
//! Usage: cargo run --bin seeder [-- --reset]

use anyhow::{Context, bail};
use chrono::{Months, Utc};
use fintrack_core::ledger::{NewBudget, NewExpense, NewInvestment, NewSavingsGoal};
use fintrack_db::migration::{Migrator, MigratorTrait};
use fintrack_db::repositories::aggregation;
use fintrack_db::{DashboardRepository, LedgerRepository, connect};
use fintrack_shared::AppConfig;
use rust_decimal_macros::dec;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fintrack=debug,seeder=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;

    let db = connect(&config.database)
        .await
        .context("failed to connect to database")?;
    info!(url = %config.database.url, "Connected to database");

    Migrator::up(&db, None).await.context("failed to run migrations")?;

    let ledger = LedgerRepository::with_policy(db.clone(), config.ledger);
    let reset = std::env::args().skip(1).any(|arg| arg == "--reset");
    if reset {
        warn!(url = %config.database.url, "Clearing existing ledger");
        ledger.clear_all().await?;
    } else if aggregation::latest_income(&db).await?.is_some() {
        bail!(
            "ledger at {} already holds data; rerun with --reset to clear it",
            config.database.url
        );
    }

    info!("Seeding income and budgets...");
    ledger.set_income(dec!(4200)).await?;
    for (category, amount) in [("groceries", dec!(600)), ("transport", dec!(180))] {
        ledger
            .set_budget(&NewBudget {
                category: category.to_string(),
                amount,
            })
            .await?;
    }

    info!("Seeding expenses...");
    let expenses = [
        (dec!(1450), "rent", "Monthly rent"),
        (dec!(84.37), "groceries", "Weekly shop"),
        (dec!(112.90), "groceries", "Market run"),
        (dec!(45), "transport", "Transit pass"),
        (dec!(23.5), "dining", "Lunch with team"),
    ];
    for (amount, category, description) in expenses {
        ledger
            .add_expense(&NewExpense {
                amount,
                category: category.to_string(),
                description: description.to_string(),
            })
            .await?;
    }

    info!("Seeding investments...");
    for (amount, kind) in [(dec!(500), "Stocks"), (dec!(250), "Bonds")] {
        ledger
            .add_investment(&NewInvestment {
                amount,
                investment_type: kind.to_string(),
            })
            .await?;
    }

    let target_date = Utc::now()
        .date_naive()
        .checked_add_months(Months::new(12))
        .context("savings target date out of range")?;
    ledger
        .set_savings_goal(&NewSavingsGoal {
            amount: dec!(800),
            target_date,
        })
        .await?;

    // Over the transport budget on purpose.
    if let Err(err) = ledger
        .add_expense(&NewExpense {
            amount: dec!(200),
            category: "transport".to_string(),
            description: "Taxi".to_string(),
        })
        .await
    {
        warn!(kind = %err.kind(), "Demo write rejected as expected");
    }

    let dashboard = DashboardRepository::new(db, config.ledger.recent_limit);
    let summary = dashboard.summary().await?;
    info!(
        income = %summary.total_income,
        allocations = %summary.total_allocations,
        unallocated = %summary.unallocated,
        savings = %summary.savings,
        "Seeding complete"
    );
    for line in &summary.budget_overview {
        info!(
            category = %line.category,
            budgeted = %line.budgeted,
            spent = %line.spent,
            used = %line.percentage_used,
            "Budget"
        );
    }

    Ok(())
}
