use sea_orm::prelude::Expr;
use sea_orm::*;
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::activity::{self, ACTION_CONVERSATION_CREATED, ACTION_MESSAGE_SENT};
use crate::models::conversations::{self, ConversationStatus};
use crate::models::messages;
use crate::models::users::Role;

/// Append an audit breadcrumb. Observability only — never read back for
/// business decisions.
pub async fn record_activity<C: ConnectionTrait>(
    db: &C,
    conversation_id: Uuid,
    actor_id: Uuid,
    action: &str,
    meta: Option<String>,
) -> Result<(), DbErr> {
    let entry = activity::ActiveModel {
        id: Set(Uuid::new_v4()),
        conversation_id: Set(conversation_id),
        actor_id: Set(actor_id),
        action: Set(action.to_string()),
        meta: Set(meta),
        created_at: Set(chrono::Utc::now()),
    };
    entry.insert(db).await?;
    Ok(())
}

/// Fetch or create the unique (client, company) conversation. Lifecycle
/// transitions call this inside their transaction so the notice and the
/// status change land together.
pub async fn ensure_conversation<C: ConnectionTrait>(
    db: &C,
    client_id: Uuid,
    company_id: Uuid,
    actor_id: Uuid,
) -> Result<conversations::Model, DbErr> {
    if let Some(existing) = conversations::Entity::find()
        .filter(conversations::Column::ClientId.eq(client_id))
        .filter(conversations::Column::CompanyId.eq(company_id))
        .one(db)
        .await?
    {
        return Ok(existing);
    }

    let conv = conversations::ActiveModel {
        id: Set(Uuid::new_v4()),
        client_id: Set(client_id),
        company_id: Set(company_id),
        status: Set(ConversationStatus::Open),
        created_at: Set(chrono::Utc::now()),
    };
    let conv = conv.insert(db).await?;
    record_activity(db, conv.id, actor_id, ACTION_CONVERSATION_CREATED, None).await?;
    Ok(conv)
}

/// Append a message to a conversation, with its audit row.
///
/// Content rules (length, external-contact filter, closed conversations)
/// are enforced by the handler for interactive messages; lifecycle notices
/// are system-generated and bypass them.
pub async fn append_message<C: ConnectionTrait>(
    db: &C,
    conversation_id: Uuid,
    sender_id: Uuid,
    content: &str,
) -> Result<messages::Model, DbErr> {
    let new_message = messages::ActiveModel {
        id: Set(Uuid::new_v4()),
        conversation_id: Set(conversation_id),
        sender_id: Set(sender_id),
        content: Set(content.to_string()),
        is_read: Set(false),
        created_at: Set(chrono::Utc::now()),
    };
    let message = new_message.insert(db).await?;
    record_activity(db, conversation_id, sender_id, ACTION_MESSAGE_SENT, None).await?;
    Ok(message)
}

pub async fn get_conversation_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<conversations::Model>, DbErr> {
    conversations::Entity::find_by_id(id).one(db).await
}

/// Conversations the user participates in, newest first.
pub async fn list_for_user(
    db: &DatabaseConnection,
    user_id: Uuid,
    role: Role,
) -> Result<Vec<conversations::Model>, DbErr> {
    let column = match role {
        Role::Client => conversations::Column::ClientId,
        Role::Company => conversations::Column::CompanyId,
        // Admin and bank have no conversation surface.
        _ => return Ok(Vec::new()),
    };
    conversations::Entity::find()
        .filter(column.eq(user_id))
        .order_by_desc(conversations::Column::CreatedAt)
        .all(db)
        .await
}

pub async fn set_status(
    db: &DatabaseConnection,
    conversation: conversations::Model,
    status: ConversationStatus,
) -> Result<conversations::Model, DbErr> {
    let mut active: conversations::ActiveModel = conversation.into();
    active.status = Set(status);
    active.update(db).await
}

/// Messages in a conversation, oldest first, optionally only those strictly
/// newer than `since` (the polling cursor).
pub async fn messages_since(
    db: &DatabaseConnection,
    conversation_id: Uuid,
    since: Option<chrono::DateTime<chrono::Utc>>,
) -> Result<Vec<messages::Model>, DbErr> {
    let mut query =
        messages::Entity::find().filter(messages::Column::ConversationId.eq(conversation_id));
    if let Some(since) = since {
        query = query.filter(messages::Column::CreatedAt.gt(since));
    }
    query
        .order_by_asc(messages::Column::CreatedAt)
        .order_by_asc(messages::Column::Id)
        .all(db)
        .await
}

/// Mark everything the other party sent as read.
pub async fn mark_all_read(
    db: &DatabaseConnection,
    conversation_id: Uuid,
    reader_id: Uuid,
) -> Result<u64, DbErr> {
    let result = messages::Entity::update_many()
        .col_expr(messages::Column::IsRead, Expr::value(true))
        .filter(messages::Column::ConversationId.eq(conversation_id))
        .filter(messages::Column::SenderId.ne(reader_id))
        .filter(messages::Column::IsRead.eq(false))
        .exec(db)
        .await?;

    Ok(result.rows_affected)
}

/// Unread counts for many conversations in one query.
pub async fn count_unread_for_conversations(
    db: &DatabaseConnection,
    conversation_ids: Vec<Uuid>,
    user_id: Uuid,
) -> Result<HashMap<Uuid, u64>, DbErr> {
    if conversation_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let unread = messages::Entity::find()
        .filter(messages::Column::ConversationId.is_in(conversation_ids))
        .filter(messages::Column::SenderId.ne(user_id))
        .filter(messages::Column::IsRead.eq(false))
        .all(db)
        .await?;

    let mut counts: HashMap<Uuid, u64> = HashMap::new();
    for message in unread {
        *counts.entry(message.conversation_id).or_insert(0) += 1;
    }

    Ok(counts)
}

/// Latest message per conversation for the list view.
pub async fn latest_messages_for_conversations(
    db: &DatabaseConnection,
    conversation_ids: Vec<Uuid>,
) -> Result<HashMap<Uuid, messages::Model>, DbErr> {
    if conversation_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = messages::Entity::find()
        .filter(messages::Column::ConversationId.is_in(conversation_ids))
        .order_by_asc(messages::Column::ConversationId)
        .order_by_desc(messages::Column::CreatedAt)
        .order_by_desc(messages::Column::Id)
        .all(db)
        .await?;

    let mut latest: HashMap<Uuid, messages::Model> = HashMap::new();
    for row in rows {
        latest.entry(row.conversation_id).or_insert(row);
    }

    Ok(latest)
}
