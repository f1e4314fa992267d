//! Property-based tests for ledger invariants against a real store.
//!
//! Random write sequences go through the validated write paths; whatever is
//! accepted, the stored aggregates must keep allocations within income.

use fintrack_core::ledger::{NewBudget, NewExpense, NewInvestment};
use fintrack_db::migration::{Migrator, MigratorTrait};
use fintrack_db::repositories::aggregation;
use fintrack_db::{LedgerRepository, connect};
use fintrack_shared::DatabaseConfig;
use proptest::prelude::*;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
enum Write {
    Income(i64),
    Expense(i64, u8),
    Investment(i64),
    Budget(i64, u8),
}

fn write_strategy() -> impl Strategy<Value = Write> {
    prop_oneof![
        (1i64..200_000).prop_map(Write::Income),
        (1i64..50_000, 0u8..3).prop_map(|(c, k)| Write::Expense(c, k)),
        (1i64..50_000).prop_map(Write::Investment),
        (1i64..50_000, 0u8..3).prop_map(|(c, k)| Write::Budget(c, k)),
    ]
}

async fn apply(repo: &LedgerRepository, write: Write) {
    // Rejections are expected; only the resulting state is checked.
    let _ = match write {
        Write::Income(c) => repo.set_income(Decimal::new(c, 2)).await.map(|_| ()),
        Write::Expense(c, k) => repo
            .add_expense(&NewExpense {
                amount: Decimal::new(c, 2),
                category: format!("category-{k}"),
                description: String::new(),
            })
            .await
            .map(|_| ()),
        Write::Investment(c) => repo
            .add_investment(&NewInvestment {
                amount: Decimal::new(c, 2),
                investment_type: "Other".into(),
            })
            .await
            .map(|_| ()),
        Write::Budget(c, k) => repo
            .set_budget(&NewBudget {
                category: format!("category-{k}"),
                amount: Decimal::new(c, 2),
            })
            .await
            .map(|_| ()),
    };
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Allocations never exceed the latest income after any accepted write.
    #[test]
    fn prop_store_allocations_within_income(writes in prop::collection::vec(write_strategy(), 1..25)) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async {
            let db = connect(&DatabaseConfig::in_memory()).await.unwrap();
            Migrator::up(&db, None).await.unwrap();
            let repo = LedgerRepository::new(db.clone());

            for write in writes {
                apply(&repo, write).await;

                let income = aggregation::total_income(&db).await.unwrap();
                let allocations = aggregation::total_allocations(&db).await.unwrap();
                assert!(allocations <= income, "{allocations} > {income}");
            }
        });
    }
}
