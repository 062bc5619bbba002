use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `company_land_prices` table.
///
/// Same shape as `land_prices` but scoped to one company; consulted before
/// the public table on every lookup.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company_land_prices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub company_id: Uuid,
    pub wilaya: String,
    pub region: String,
    #[sea_orm(column_type = "Double", nullable)]
    pub price_housing: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub price_commercial: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub price_industrial: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub price_agricultural: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub price_per_sqm: Option<f64>,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CompanyId",
        to = "super::users::Column::Id"
    )]
    Company,
}

impl ActiveModelBehavior for ActiveModel {}
