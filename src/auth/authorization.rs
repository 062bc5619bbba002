//! Ownership and role checks shared by the handlers. Every function either
//! clears the actor or returns the HTTP response to send back — handlers
//! use them with `?` inside `match`-free guard blocks.

use actix_web::HttpResponse;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::db::conversations as conversation_db;
use crate::db::requests as request_db;
use crate::models::conversations;
use crate::models::requests;
use crate::models::users::{self, Role};

fn forbidden(message: &str) -> HttpResponse {
    HttpResponse::Forbidden().json(serde_json::json!({ "error": message }))
}

fn not_found(message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": message }))
}

fn db_error(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::InternalServerError().json(serde_json::json!({
        "error": format!("Database error: {e}"),
    }))
}

/// Hard role gate.
pub fn require_role(user: &users::Model, role: Role) -> Result<(), HttpResponse> {
    if user.role == role {
        Ok(())
    } else {
        Err(forbidden(&format!(
            "this action requires the {} role",
            role.as_str()
        )))
    }
}

async fn fetch_request(
    db: &DatabaseConnection,
    request_id: Uuid,
) -> Result<requests::Model, HttpResponse> {
    request_db::get_request_by_id(db, request_id)
        .await
        .map_err(db_error)?
        .ok_or_else(|| not_found("valuation request not found"))
}

/// The owning client, acting on their own request.
pub async fn verify_request_client(
    db: &DatabaseConnection,
    request_id: Uuid,
    user: &users::Model,
) -> Result<requests::Model, HttpResponse> {
    require_role(user, Role::Client)?;
    let request = fetch_request(db, request_id).await?;
    if request.client_id != user.id {
        return Err(forbidden("you can only act on your own requests"));
    }
    Ok(request)
}

/// The assigned company, acting on a request routed to it.
pub async fn verify_request_company(
    db: &DatabaseConnection,
    request_id: Uuid,
    user: &users::Model,
) -> Result<requests::Model, HttpResponse> {
    require_role(user, Role::Company)?;
    let request = fetch_request(db, request_id).await?;
    if request.company_id != Some(user.id) {
        return Err(forbidden("this request is not assigned to your company"));
    }
    Ok(request)
}

/// Any party with a stake in the request: the client, the assigned company,
/// the informational bank, or an admin.
pub async fn verify_request_party(
    db: &DatabaseConnection,
    request_id: Uuid,
    user: &users::Model,
) -> Result<requests::Model, HttpResponse> {
    let request = fetch_request(db, request_id).await?;
    let allowed = match user.role {
        Role::Admin => true,
        Role::Client => request.client_id == user.id,
        Role::Company => request.company_id == Some(user.id),
        Role::Bank => request.bank_id == Some(user.id),
    };
    if allowed {
        Ok(request)
    } else {
        Err(forbidden("you are not a party to this request"))
    }
}

/// A conversation participant: its client or its company.
pub async fn verify_conversation_party(
    db: &DatabaseConnection,
    conversation_id: Uuid,
    user: &users::Model,
) -> Result<conversations::Model, HttpResponse> {
    let conversation = conversation_db::get_conversation_by_id(db, conversation_id)
        .await
        .map_err(db_error)?
        .ok_or_else(|| not_found("conversation not found"))?;

    let allowed = match user.role {
        Role::Client => conversation.client_id == user.id,
        Role::Company => conversation.company_id == user.id,
        _ => false,
    };
    if allowed {
        Ok(conversation)
    } else {
        Err(forbidden("you are not a participant in this conversation"))
    }
}
