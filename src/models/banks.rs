use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `bank_profiles` table.
///
/// `slug` is the stable identifier banks are addressed by in discovery URLs.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bank_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    #[sea_orm(unique)]
    pub slug: String,
    pub logo_path: Option<String>,
    pub contact_phone: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Body for POST /api/admin/banks — creates the user and its profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBankAccount {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub slug: String,
}

/// One entry of the public bank directory.
#[derive(Debug, Clone, Serialize)]
pub struct BankDirectoryEntry {
    pub bank_id: Uuid,
    pub name: String,
    pub slug: String,
    pub logo_path: Option<String>,
}

/// One qualifying company in a bank-matching response.
#[derive(Debug, Clone, Serialize)]
pub struct CertifiedCompany {
    pub company_id: Uuid,
    pub name: String,
    pub effective_limit: f64,
    /// Present only in offers mode; None means no price resolved for the
    /// requested location.
    pub estimated_value: Option<f64>,
    pub estimated_fee: Option<f64>,
}
