use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `company_profiles` table.
///
/// `credit_limit` is the profile-wide ceiling; a per-bank approval row may
/// override it (`matching::effective_limit`).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub logo_path: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub credit_limit: Option<f64>,
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

/// Body for POST /api/admin/companies — creates the user and its profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompanyAccount {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub credit_limit: Option<f64>,
}

/// One entry of the public company directory.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyDirectoryEntry {
    pub company_id: Uuid,
    pub name: String,
    pub logo_path: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
}
