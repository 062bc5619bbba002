use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the public `land_prices` table.
///
/// Keyed by (wilaya, region). The four category columns came later; the
/// legacy `price_per_sqm` column predates them and is kept as the final
/// fallback (`pricing::resolve_price`).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "land_prices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
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
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Body for the spreadsheet import endpoints: a header row plus data rows,
/// column order variable. Cell text arrives exactly as typed (Arabic digits,
/// ranges, dashes); `pricing::cells` handles the mess.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceImport {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Result summary for an import.
#[derive(Debug, Clone, Serialize)]
pub struct PriceImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Query parameters for GET /api/prices.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceLookupQuery {
    pub wilaya: String,
    pub region: String,
    pub category: Option<String>,
    pub company_id: Option<Uuid>,
}
