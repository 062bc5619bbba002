use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Conversation status. Only the company side may change it; a closed
/// conversation rejects new messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ConversationStatus {
    #[sea_orm(string_value = "open")]
    Open,
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "closed")]
    Closed,
}

/// SeaORM entity for the `conversations` table.
///
/// A conversation is uniquely keyed by (client_id, company_id); lifecycle
/// notices and interactive messages share the same thread.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "conversations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub client_id: Uuid,
    pub company_id: Uuid,
    pub status: ConversationStatus,
    pub created_at: DateTimeUtc,
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
    #[sea_orm(has_many = "super::messages::Entity")]
    Messages,
}

impl Related<super::messages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Messages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Body for POST /api/conversations/{id}/status.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateConversationStatus {
    pub status: ConversationStatus,
}

/// Optional initial message for POST /api/conversations/start/{company_id}.
#[derive(Debug, Clone, Deserialize)]
pub struct StartConversation {
    pub content: Option<String>,
}

/// Response for the conversations list endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationSummary {
    pub conversation_id: Uuid,
    pub other_user_id: Uuid,
    pub other_user_name: Option<String>,
    pub status: ConversationStatus,
    pub last_message: Option<String>,
    pub last_message_at: Option<chrono::DateTime<chrono::Utc>>,
    pub unread_count: u64,
}
