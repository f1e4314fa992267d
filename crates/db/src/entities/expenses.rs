//! `SeaORM` Entity for expenses table.

use fintrack_core::ledger::ExpenseEntry;
use fintrack_shared::types::{ExpenseId, money::from_minor_units};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub amount_cents: i64,
    pub category: String,
    pub description: String,
    pub recorded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ExpenseEntry {
    fn from(model: Model) -> Self {
        Self {
            id: ExpenseId::from_raw(model.id),
            amount: from_minor_units(model.amount_cents),
            category: model.category,
            description: model.description,
            recorded_at: model.recorded_at,
        }
    }
}
