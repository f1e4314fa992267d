//! `SeaORM` Entity for income table.

use fintrack_core::ledger::IncomeEntry;
use fintrack_shared::types::{IncomeId, money::from_minor_units};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "income")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub amount_cents: i64,
    pub recorded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for IncomeEntry {
    fn from(model: Model) -> Self {
        Self {
            id: IncomeId::from_raw(model.id),
            amount: from_minor_units(model.amount_cents),
            recorded_at: model.recorded_at,
        }
    }
}
