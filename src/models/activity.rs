use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Audit breadcrumb actions. These are observability only — nothing reads
/// them back for business decisions.
pub const ACTION_CONVERSATION_CREATED: &str = "conversation_created";
pub const ACTION_MESSAGE_SENT: &str = "message_sent";
pub const ACTION_STATUS_CHANGED: &str = "status_changed";

/// SeaORM entity for the `activity_log` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activity_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub actor_id: Uuid,
    pub action: String,
    pub meta: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::conversations::Entity",
        from = "Column::ConversationId",
        to = "super::conversations::Column::Id"
    )]
    Conversation,
}

impl Related<super::conversations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Conversation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
