use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Visit appointment status stored as a lowercase string in the database.
///
/// At most one appointment per request may hold `final`; finalizing one slot
/// force-rejects every non-final sibling (`lifecycle::transitions`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum AppointmentStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "accepted")]
    Accepted,
    #[sea_orm(string_value = "rejected")]
    Rejected,
    #[sea_orm(string_value = "final")]
    Final,
}

/// Which side of the request proposed the slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ProposedBy {
    #[sea_orm(string_value = "client")]
    Client,
    #[sea_orm(string_value = "company")]
    Company,
}

/// SeaORM entity for the `visit_appointments` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "visit_appointments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub request_id: Uuid,
    pub proposed_time: DateTimeUtc,
    pub proposed_by: ProposedBy,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::requests::Entity",
        from = "Column::RequestId",
        to = "super::requests::Column::Id"
    )]
    Request,
}

impl Related<super::requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Request.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Body for POST /api/requests/{id}/appointments.
#[derive(Debug, Clone, Deserialize)]
pub struct ProposeAppointment {
    pub proposed_time: chrono::DateTime<chrono::Utc>,
    pub notes: Option<String>,
}
