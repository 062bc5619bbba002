use actix_web::{HttpResponse, Responder, web};
use regex::Regex;
use sea_orm::DatabaseConnection;
use std::sync::LazyLock;
use uuid::Uuid;

use crate::auth::authorization::{require_role, verify_conversation_party};
use crate::auth::middleware::AuthenticatedUser;
use crate::db::conversations as conversation_db;
use crate::db::users as user_db;
use crate::handlers::db_error_response;
use crate::models::activity::ACTION_STATUS_CHANGED;
use crate::models::conversations::{
    ConversationStatus, ConversationSummary, StartConversation, UpdateConversationStatus,
};
use crate::models::messages::{MessageQuery, MessageResponse, SendMessage};
use crate::models::users::Role;

const MAX_MESSAGE_LEN: usize = 3000;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9_.+-]+@[a-z0-9-]+\.[a-z0-9-.]+").expect("email pattern"));
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://|www\.").expect("url pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d\s\-]{7,}\d").expect("phone pattern"));
static MESSENGER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"whats(app)?|wa\.me|chat\.whatsapp\.com|\bsms\b").expect("messenger pattern")
});

/// Crude screen for attempts to move the deal off-platform: emails, links,
/// phone numbers, and messenger handles.
pub fn detect_external_contact(content: &str) -> bool {
    let text = content.to_lowercase();
    EMAIL_RE.is_match(&text)
        || URL_RE.is_match(&text)
        || PHONE_RE.is_match(&text)
        || MESSENGER_RE.is_match(&text)
}

/// Content rules for interactive messages. Lifecycle notices are
/// system-generated and skip this entirely.
pub fn validate_message_content(content: &str) -> Result<(), &'static str> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err("a message cannot be empty");
    }
    if trimmed.chars().count() > MAX_MESSAGE_LEN {
        return Err("the message is too long");
    }
    if detect_external_contact(trimmed) {
        return Err("sharing external contact details is not allowed here");
    }
    Ok(())
}

/// GET /api/conversations — the caller's threads, newest first, with the
/// other party's name, the latest message, and an unread count.
pub async fn get_conversations(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    let conversations =
        match conversation_db::list_for_user(db.get_ref(), user.0.id, user.0.role).await {
            Ok(list) => list,
            Err(e) => return db_error_response(e),
        };

    let ids: Vec<Uuid> = conversations.iter().map(|c| c.id).collect();
    let unread = match conversation_db::count_unread_for_conversations(
        db.get_ref(),
        ids.clone(),
        user.0.id,
    )
    .await
    {
        Ok(counts) => counts,
        Err(e) => return db_error_response(e),
    };
    let latest = match conversation_db::latest_messages_for_conversations(db.get_ref(), ids).await {
        Ok(latest) => latest,
        Err(e) => return db_error_response(e),
    };

    let other_ids: Vec<Uuid> = conversations
        .iter()
        .map(|c| {
            if user.0.role == Role::Client {
                c.company_id
            } else {
                c.client_id
            }
        })
        .collect();
    let others = match user_db::get_users_by_ids(db.get_ref(), other_ids).await {
        Ok(users) => users,
        Err(e) => return db_error_response(e),
    };

    let summaries: Vec<ConversationSummary> = conversations
        .into_iter()
        .map(|c| {
            let other_user_id = if user.0.role == Role::Client {
                c.company_id
            } else {
                c.client_id
            };
            let last = latest.get(&c.id);
            ConversationSummary {
                conversation_id: c.id,
                other_user_id,
                other_user_name: others
                    .iter()
                    .find(|u| u.id == other_user_id)
                    .map(|u| u.name.clone()),
                status: c.status,
                last_message: last.map(|m| m.content.clone()),
                last_message_at: last.map(|m| m.created_at),
                unread_count: unread.get(&c.id).copied().unwrap_or(0),
            }
        })
        .collect();

    HttpResponse::Ok().json(summaries)
}

/// POST /api/conversations/start/{company_id} — a client opens (or reuses)
/// the thread with a company, optionally sending a first message.
pub async fn start_conversation(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<StartConversation>,
) -> impl Responder {
    if let Err(resp) = require_role(&user.0, Role::Client) {
        return resp;
    }
    let company_id = path.into_inner();

    match user_db::get_user_with_role(db.get_ref(), company_id, Role::Company).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": "company not found",
            }));
        }
        Err(e) => return db_error_response(e),
    }

    let conversation = match conversation_db::ensure_conversation(
        db.get_ref(),
        user.0.id,
        company_id,
        user.0.id,
    )
    .await
    {
        Ok(conv) => conv,
        Err(e) => return db_error_response(e),
    };

    if let Some(content) = body.into_inner().content {
        if let Err(msg) = validate_message_content(&content) {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": msg }));
        }
        if let Err(e) =
            conversation_db::append_message(db.get_ref(), conversation.id, user.0.id, content.trim())
                .await
        {
            return db_error_response(e);
        }
    }

    HttpResponse::Ok().json(conversation)
}

/// GET /api/conversations/{id}/messages?since= — poll the thread. With
/// `since`, only strictly newer messages are returned.
pub async fn get_messages(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    query: web::Query<MessageQuery>,
) -> impl Responder {
    let conversation =
        match verify_conversation_party(db.get_ref(), path.into_inner(), &user.0).await {
            Ok(conv) => conv,
            Err(resp) => return resp,
        };

    match conversation_db::messages_since(db.get_ref(), conversation.id, query.since).await {
        Ok(messages) => HttpResponse::Ok().json(
            messages
                .into_iter()
                .map(MessageResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => db_error_response(e),
    }
}

/// POST /api/conversations/{id}/messages — send a message. Closed
/// conversations reject new messages.
pub async fn send_message(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<SendMessage>,
) -> impl Responder {
    let conversation =
        match verify_conversation_party(db.get_ref(), path.into_inner(), &user.0).await {
            Ok(conv) => conv,
            Err(resp) => return resp,
        };

    if conversation.status == ConversationStatus::Closed {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "this conversation is closed",
        }));
    }

    let content = body.into_inner().content;
    if let Err(msg) = validate_message_content(&content) {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": msg }));
    }

    match conversation_db::append_message(db.get_ref(), conversation.id, user.0.id, content.trim())
        .await
    {
        Ok(message) => HttpResponse::Created().json(MessageResponse::from(message)),
        Err(e) => db_error_response(e),
    }
}

/// POST /api/conversations/{id}/read — mark the other party's messages read.
pub async fn mark_read(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let conversation =
        match verify_conversation_party(db.get_ref(), path.into_inner(), &user.0).await {
            Ok(conv) => conv,
            Err(resp) => return resp,
        };

    match conversation_db::mark_all_read(db.get_ref(), conversation.id, user.0.id).await {
        Ok(count) => HttpResponse::Ok().json(serde_json::json!({ "marked_read": count })),
        Err(e) => db_error_response(e),
    }
}

/// POST /api/conversations/{id}/status — only the company side manages the
/// conversation status.
pub async fn update_status(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateConversationStatus>,
) -> impl Responder {
    let conversation =
        match verify_conversation_party(db.get_ref(), path.into_inner(), &user.0).await {
            Ok(conv) => conv,
            Err(resp) => return resp,
        };
    if user.0.role != Role::Company {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "only the company can change the conversation status",
        }));
    }

    let status = body.into_inner().status;
    let conversation_id = conversation.id;
    match conversation_db::set_status(db.get_ref(), conversation, status).await {
        Ok(updated) => {
            if let Err(e) = conversation_db::record_activity(
                db.get_ref(),
                conversation_id,
                user.0.id,
                ACTION_STATUS_CHANGED,
                Some(format!("{status:?}").to_lowercase()),
            )
            .await
            {
                tracing::warn!("failed to record status change activity: {e}");
            }
            HttpResponse::Ok().json(updated)
        }
        Err(e) => db_error_response(e),
    }
}
