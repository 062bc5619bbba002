use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `company_approved_banks` join table.
///
/// A row records a bank's explicit approval of a company. `credit_limit`,
/// when present, overrides the company's profile-wide limit for this bank
/// only.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company_approved_banks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub company_id: Uuid,
    pub bank_id: Uuid,
    #[sea_orm(column_type = "Double", nullable)]
    pub credit_limit: Option<f64>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CompanyId",
        to = "super::users::Column::Id"
    )]
    Company,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::BankId",
        to = "super::users::Column::Id"
    )]
    Bank,
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Body for POST /api/approvals (the authenticated bank approves a company).
#[derive(Debug, Clone, Deserialize)]
pub struct ApproveCompany {
    pub company_id: Uuid,
    pub credit_limit: Option<f64>,
}
