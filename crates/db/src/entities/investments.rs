//! `SeaORM` Entity for investments table.

use fintrack_core::ledger::{InvestmentEntry, InvestmentType};
use fintrack_shared::types::{InvestmentId, money::from_minor_units};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "investments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub amount_cents: i64,
    pub investment_type: String,
    pub recorded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for InvestmentEntry {
    type Error = DbErr;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let investment_type = model
            .investment_type
            .parse::<InvestmentType>()
            .map_err(|e| DbErr::Type(e.to_string()))?;

        Ok(Self {
            id: InvestmentId::from_raw(model.id),
            amount: from_minor_units(model.amount_cents),
            investment_type,
            recorded_at: model.recorded_at,
        })
    }
}
