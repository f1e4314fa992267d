//! `SeaORM` Entity for savings goals table.

use fintrack_core::ledger::SavingsGoalEntry;
use fintrack_shared::types::{SavingsGoalId, money::from_minor_units};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "savings_goals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub amount_cents: i64,
    pub target_date: Date,
    pub recorded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SavingsGoalEntry {
    fn from(model: Model) -> Self {
        Self {
            id: SavingsGoalId::from_raw(model.id),
            amount: from_minor_units(model.amount_cents),
            target_date: model.target_date,
            recorded_at: model.recorded_at,
        }
    }
}
