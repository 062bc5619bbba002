use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::authorization::{
    require_role, verify_request_client, verify_request_company, verify_request_party,
};
use crate::auth::middleware::AuthenticatedUser;
use crate::db::requests as request_db;
use crate::db::users as user_db;
use crate::handlers::{db_error_response, transition_error_response};
use crate::models::requests::{
    CreateRequest, RejectRequest, RevisionRequest, SubmitValue, TransferRequest,
};
use crate::models::users::Role;

/// POST /api/requests — a client submits a new valuation request.
///
/// The client may preselect a company (e.g. from the company detail page)
/// and name the bank the valuation is for; both are validated to actually
/// hold that role before assignment.
pub async fn create_request(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateRequest>,
) -> impl Responder {
    if let Err(resp) = require_role(&user.0, Role::Client) {
        return resp;
    }
    let input = body.into_inner();

    if input.title.trim().is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "a title is required",
        }));
    }
    if let Some(amount) = input.requested_amount {
        if !amount.is_finite() || amount <= 0.0 {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "the requested amount must be a positive number",
            }));
        }
    }

    // Preselected company/bank must really hold that role.
    if let Some(company_id) = input.company_id {
        match user_db::get_user_with_role(db.get_ref(), company_id, Role::Company).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return HttpResponse::BadRequest().json(serde_json::json!({
                    "error": "the selected company does not exist",
                }));
            }
            Err(e) => return db_error_response(e),
        }
    }
    if let Some(bank_id) = input.bank_id {
        match user_db::get_user_with_role(db.get_ref(), bank_id, Role::Bank).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return HttpResponse::BadRequest().json(serde_json::json!({
                    "error": "the selected bank does not exist",
                }));
            }
            Err(e) => return db_error_response(e),
        }
    }

    match request_db::insert_request(db.get_ref(), input, user.0.id).await {
        Ok(request) => HttpResponse::Created().json(request),
        Err(e) => db_error_response(e),
    }
}

/// GET /api/requests — list requests scoped to the caller's role.
pub async fn get_requests(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    let result = match user.0.role {
        Role::Client => request_db::get_requests_by_client(db.get_ref(), user.0.id).await,
        Role::Company => request_db::get_requests_by_company(db.get_ref(), user.0.id).await,
        Role::Bank => request_db::get_requests_by_bank(db.get_ref(), user.0.id).await,
        Role::Admin => request_db::get_all_requests(db.get_ref()).await,
    };

    match result {
        Ok(requests) => HttpResponse::Ok().json(requests),
        Err(e) => db_error_response(e),
    }
}

/// GET /api/requests/{id} — a single request, for any of its parties.
pub async fn get_request(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match verify_request_party(db.get_ref(), path.into_inner(), &user.0).await {
        Ok(request) => HttpResponse::Ok().json(request),
        Err(resp) => resp,
    }
}

/// POST /api/requests/{id}/reject — the assigned company rejects a pending
/// request. The reason reaches the client through the conversation thread;
/// the company is unassigned and proposals cleared, all in one transaction.
pub async fn reject(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<RejectRequest>,
) -> impl Responder {
    let request_id = path.into_inner();
    if let Err(resp) = verify_request_company(db.get_ref(), request_id, &user.0).await {
        return resp;
    }

    match request_db::reject_request(db.get_ref(), request_id, user.0.id, &body.reason).await {
        Ok(request) => HttpResponse::Ok().json(request),
        Err(e) => transition_error_response(e),
    }
}

/// POST /api/requests/{id}/revision — the assigned company flags missing
/// documents; the notes land in the client's conversation.
pub async fn request_revision(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<RevisionRequest>,
) -> impl Responder {
    let request_id = path.into_inner();
    if let Err(resp) = verify_request_company(db.get_ref(), request_id, &user.0).await {
        return resp;
    }

    match request_db::request_revision(db.get_ref(), request_id, user.0.id, &body.notes).await {
        Ok(request) => HttpResponse::Ok().json(request),
        Err(e) => transition_error_response(e),
    }
}

/// POST /api/requests/{id}/value — the assigned company submits its
/// valuation figure, completing the review.
pub async fn submit_value(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<SubmitValue>,
) -> impl Responder {
    let request_id = path.into_inner();
    if let Err(resp) = verify_request_company(db.get_ref(), request_id, &user.0).await {
        return resp;
    }

    match request_db::submit_value(db.get_ref(), request_id, body.value).await {
        Ok(request) => HttpResponse::Ok().json(request),
        Err(e) => transition_error_response(e),
    }
}

/// POST /api/requests/{id}/accept — the client accepts the valuation.
pub async fn accept(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let request_id = path.into_inner();
    if let Err(resp) = verify_request_client(db.get_ref(), request_id, &user.0).await {
        return resp;
    }

    match request_db::accept_request(db.get_ref(), request_id).await {
        Ok(request) => HttpResponse::Ok().json(request),
        Err(e) => transition_error_response(e),
    }
}

/// POST /api/requests/{id}/decline — the client declines the valuation and
/// the request reopens for the same company.
pub async fn decline(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let request_id = path.into_inner();
    if let Err(resp) = verify_request_client(db.get_ref(), request_id, &user.0).await {
        return resp;
    }

    match request_db::decline_request(db.get_ref(), request_id).await {
        Ok(request) => HttpResponse::Ok().json(request),
        Err(e) => transition_error_response(e),
    }
}

/// POST /api/requests/{id}/transfer — the client moves the request to a
/// different company. Completed valuations are never transferable.
pub async fn transfer(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<TransferRequest>,
) -> impl Responder {
    let request_id = path.into_inner();
    if let Err(resp) = verify_request_client(db.get_ref(), request_id, &user.0).await {
        return resp;
    }

    match user_db::get_user_with_role(db.get_ref(), body.company_id, Role::Company).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "the selected company does not exist",
            }));
        }
        Err(e) => return db_error_response(e),
    }

    match request_db::transfer_request(db.get_ref(), request_id, body.company_id).await {
        Ok(request) => HttpResponse::Ok().json(request),
        Err(e) => transition_error_response(e),
    }
}
