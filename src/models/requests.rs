use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Valuation request status stored as a lowercase string in the database.
///
/// The full transition table lives in `crate::lifecycle::transitions`; no
/// handler mutates `status` outside those functions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum RequestStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "revision_requested")]
    RevisionRequested,
    #[sea_orm(string_value = "rejected")]
    Rejected,
    #[sea_orm(string_value = "approved")]
    Approved,
}

/// What kind of property the client wants valued.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ValuationType {
    #[sea_orm(string_value = "land")]
    Land,
    #[sea_orm(string_value = "property")]
    Property,
    #[sea_orm(string_value = "house")]
    House,
}

/// SeaORM entity for the `valuation_requests` table.
///
/// `value` is the company-submitted estimate and stays NULL until the request
/// reaches `completed`; `rejection_reason`/`rejected_at` are only ever set
/// together when the status becomes `rejected`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "valuation_requests")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub valuation_type: ValuationType,
    #[sea_orm(column_type = "Double", nullable)]
    pub requested_amount: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub value: Option<f64>,
    pub status: RequestStatus,
    pub rejection_reason: Option<String>,
    pub rejected_at: Option<DateTimeUtc>,
    pub client_id: Uuid,
    pub company_id: Option<Uuid>,
    pub bank_id: Option<Uuid>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ClientId",
        to = "super::users::Column::Id"
    )]
    Client,
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
    #[sea_orm(has_many = "super::documents::Entity")]
    Documents,
    #[sea_orm(has_many = "super::appointments::Entity")]
    Appointments,
}

impl Related<super::documents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Documents.def()
    }
}

impl Related<super::appointments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for POST /api/requests.
/// `client_id` comes from the JWT; a preselected company or bank is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRequest {
    pub title: String,
    pub description: String,
    pub valuation_type: ValuationType,
    pub requested_amount: Option<f64>,
    pub company_id: Option<Uuid>,
    pub bank_id: Option<Uuid>,
}

/// Body for POST /api/requests/{id}/reject.
#[derive(Debug, Clone, Deserialize)]
pub struct RejectRequest {
    pub reason: String,
}

/// Body for POST /api/requests/{id}/revision.
#[derive(Debug, Clone, Deserialize)]
pub struct RevisionRequest {
    pub notes: String,
}

/// Body for POST /api/requests/{id}/value.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitValue {
    pub value: f64,
}

/// Body for POST /api/requests/{id}/transfer.
#[derive(Debug, Clone, Deserialize)]
pub struct TransferRequest {
    pub company_id: Uuid,
}
