use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Loan product category a policy applies to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum LoanType {
    #[sea_orm(string_value = "housing")]
    Housing,
    #[sea_orm(string_value = "commercial")]
    Commercial,
    #[sea_orm(string_value = "personal")]
    Personal,
}

/// SeaORM entity for the `loan_policies` table.
///
/// One row per (bank, loan type): the payment-to-income ceiling and the
/// defaults the affordability calculator pre-fills for that bank's product.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "loan_policies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub bank_id: Uuid,
    pub loan_type: LoanType,
    #[sea_orm(column_type = "Double")]
    pub max_ratio: f64,
    pub default_years: i32,
    #[sea_orm(column_type = "Double")]
    pub default_annual_rate: f64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::BankId",
        to = "super::users::Column::Id"
    )]
    Bank,
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Query parameters for GET /api/banks/{slug}/policies.
#[derive(Debug, Clone, Deserialize)]
pub struct LoanPolicyQuery {
    pub loan_type: Option<LoanType>,
}

/// Body for POST /api/banks/policies (the authenticated bank upserts one).
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertLoanPolicy {
    pub loan_type: LoanType,
    pub max_ratio: f64,
    pub default_years: i32,
    pub default_annual_rate: f64,
}
