//! Integration tests for aggregation queries.

use chrono::Utc;
use fintrack_core::ledger::{NewBudget, NewExpense, NewInvestment, NewSavingsGoal};
use fintrack_db::migration::{Migrator, MigratorTrait};
use fintrack_db::repositories::aggregation;
use fintrack_db::{AggregationRepository, LedgerRepository, connect};
use fintrack_shared::DatabaseConfig;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{DatabaseConnection, TransactionTrait};

async fn setup() -> DatabaseConnection {
    let db = connect(&DatabaseConfig::in_memory()).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

async fn seed(repo: &LedgerRepository) {
    repo.set_income(dec!(3000)).await.unwrap();
    for (category, amount) in [("food", dec!(120.50)), ("rent", dec!(900)), ("food", dec!(30))] {
        repo.add_expense(&NewExpense {
            amount,
            category: category.into(),
            description: String::new(),
        })
        .await
        .unwrap();
    }
    repo.set_budget(&NewBudget {
        category: "food".into(),
        amount: dec!(300),
    })
    .await
    .unwrap();
    repo.set_budget(&NewBudget {
        category: "fun".into(),
        amount: dec!(100),
    })
    .await
    .unwrap();
    repo.add_investment(&NewInvestment {
        amount: dec!(250.25),
        investment_type: "Bonds".into(),
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn test_empty_ledger_totals_are_zero() {
    let repo = AggregationRepository::new(setup().await);

    assert_eq!(repo.total_income().await.unwrap(), Decimal::ZERO);
    assert_eq!(repo.total_expenses().await.unwrap(), Decimal::ZERO);
    assert_eq!(repo.total_investments().await.unwrap(), Decimal::ZERO);
    assert_eq!(repo.total_budgets().await.unwrap(), Decimal::ZERO);
    assert_eq!(repo.total_allocations().await.unwrap(), Decimal::ZERO);
    assert_eq!(repo.expenses_by_category("food").await.unwrap(), Decimal::ZERO);
    assert!(repo.expense_totals_by_category().await.unwrap().is_empty());
    assert!(repo.budget_overview().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_totals() {
    let db = setup().await;
    seed(&LedgerRepository::new(db.clone())).await;
    let repo = AggregationRepository::new(db);

    assert_eq!(repo.total_income().await.unwrap(), dec!(3000));
    assert_eq!(repo.total_expenses().await.unwrap(), dec!(1050.50));
    assert_eq!(repo.total_investments().await.unwrap(), dec!(250.25));
    assert_eq!(repo.total_budgets().await.unwrap(), dec!(400));
    assert_eq!(repo.total_allocations().await.unwrap(), dec!(1700.75));
}

#[tokio::test]
async fn test_latest_income_wins() {
    let db = setup().await;
    let ledger = LedgerRepository::new(db.clone());

    assert_eq!(aggregation::latest_income(&db).await.unwrap(), None);
    ledger.set_income(dec!(1000)).await.unwrap();
    ledger.set_income(dec!(2500)).await.unwrap();
    ledger.set_income(dec!(1800)).await.unwrap();

    assert_eq!(aggregation::latest_income(&db).await.unwrap(), Some(dec!(1800)));
}

#[tokio::test]
async fn test_expenses_by_category() {
    let db = setup().await;
    seed(&LedgerRepository::new(db.clone())).await;
    let repo = AggregationRepository::new(db);

    assert_eq!(repo.expenses_by_category("food").await.unwrap(), dec!(150.50));
    assert_eq!(repo.expenses_by_category("rent").await.unwrap(), dec!(900));
    assert_eq!(repo.expenses_by_category("fun").await.unwrap(), Decimal::ZERO);
}

#[tokio::test]
async fn test_expense_totals_by_category() {
    let db = setup().await;
    seed(&LedgerRepository::new(db.clone())).await;

    let by_category = aggregation::expense_totals_by_category(&db).await.unwrap();

    assert_eq!(by_category.len(), 2);
    assert_eq!(by_category["food"], dec!(150.50));
    assert_eq!(by_category["rent"], dec!(900));
}

#[tokio::test]
async fn test_budget_overview() {
    let db = setup().await;
    seed(&LedgerRepository::new(db.clone())).await;

    let overview = aggregation::budget_overview(&db).await.unwrap();

    assert_eq!(overview.len(), 2);
    assert_eq!(overview[0].category, "food");
    assert_eq!(overview[0].budgeted, dec!(300));
    assert_eq!(overview[0].spent, dec!(150.50));
    assert_eq!(overview[0].remaining, dec!(149.50));
    assert_eq!(overview[0].percentage_used, dec!(50.17));

    assert_eq!(overview[1].category, "fun");
    assert_eq!(overview[1].spent, Decimal::ZERO);
    assert_eq!(overview[1].percentage_used, Decimal::ZERO);
}

#[tokio::test]
async fn test_snapshot_inside_transaction() {
    let db = setup().await;
    seed(&LedgerRepository::new(db.clone())).await;

    let txn = db.begin().await.unwrap();
    let snapshot = aggregation::load_snapshot(&txn, Some("food")).await.unwrap();
    txn.commit().await.unwrap();

    assert_eq!(snapshot.income, Some(dec!(3000)));
    assert_eq!(snapshot.total_allocations(), dec!(1700.75));
    let food = snapshot.category.unwrap();
    assert_eq!(food.budget, Some(dec!(300)));
    assert_eq!(food.spent, dec!(150.50));
    assert_eq!(food.remaining(), Some(dec!(149.50)));

    let rent = aggregation::load_snapshot(&db, Some("rent"))
        .await
        .unwrap()
        .category
        .unwrap();
    assert_eq!(rent.budget, None);
    assert_eq!(rent.spent, dec!(900));
}

#[tokio::test]
async fn test_latest_savings_goal() {
    let db = setup().await;
    let ledger = LedgerRepository::new(db.clone());
    ledger.set_income(dec!(1000)).await.unwrap();

    assert!(aggregation::latest_savings_goal(&db).await.unwrap().is_none());

    let today = Utc::now().date_naive();
    ledger
        .set_savings_goal(&NewSavingsGoal {
            amount: dec!(100),
            target_date: today,
        })
        .await
        .unwrap();
    ledger
        .set_savings_goal(&NewSavingsGoal {
            amount: dec!(400),
            target_date: today,
        })
        .await
        .unwrap();

    let goal = aggregation::latest_savings_goal(&db).await.unwrap().unwrap();
    assert_eq!(goal.amount, dec!(400));
}
