//! `SeaORM` Entity for budgets table.

use fintrack_core::ledger::BudgetEntry;
use fintrack_shared::types::{BudgetId, money::from_minor_units};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub category: String,
    pub amount_cents: i64,
    pub recorded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for BudgetEntry {
    fn from(model: Model) -> Self {
        Self {
            id: BudgetId::from_raw(model.id),
            category: model.category,
            amount: from_minor_units(model.amount_cents),
            recorded_at: model.recorded_at,
        }
    }
}
