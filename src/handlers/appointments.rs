use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::authorization::{verify_request_company, verify_request_party};
use crate::auth::middleware::AuthenticatedUser;
use crate::db::appointments as appointment_db;
use crate::handlers::{db_error_response, transition_error_response};
use crate::models::appointments::{ProposeAppointment, ProposedBy};
use crate::models::users::Role;

/// POST /api/requests/{id}/appointments — either party proposes a visit
/// slot. Only possible once the valuation is approved.
pub async fn propose(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<ProposeAppointment>,
) -> impl Responder {
    let request_id = path.into_inner();
    if let Err(resp) = verify_request_party(db.get_ref(), request_id, &user.0).await {
        return resp;
    }

    let proposed_by = match user.0.role {
        Role::Client => ProposedBy::Client,
        Role::Company => ProposedBy::Company,
        _ => {
            return HttpResponse::Forbidden().json(serde_json::json!({
                "error": "only the client or the company can propose a visit",
            }));
        }
    };

    let input = body.into_inner();
    match appointment_db::propose_appointment(
        db.get_ref(),
        request_id,
        proposed_by,
        input.proposed_time,
        input.notes,
    )
    .await
    {
        Ok(appointment) => HttpResponse::Created().json(appointment),
        Err(e) => transition_error_response(e),
    }
}

/// GET /api/requests/{id}/appointments — proposal history for the request.
pub async fn get_appointments(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let request_id = path.into_inner();
    if let Err(resp) = verify_request_party(db.get_ref(), request_id, &user.0).await {
        return resp;
    }

    match appointment_db::get_appointments_by_request(db.get_ref(), request_id).await {
        Ok(appointments) => HttpResponse::Ok().json(appointments),
        Err(e) => db_error_response(e),
    }
}

/// Resolve the appointment and check the caller is the assigned company —
/// only the company decides on proposed slots.
async fn verify_company_on_appointment(
    db: &DatabaseConnection,
    appointment_id: Uuid,
    user: &crate::models::users::Model,
) -> Result<Uuid, HttpResponse> {
    let appointment = appointment_db::get_appointment_by_id(db, appointment_id)
        .await
        .map_err(db_error_response)?
        .ok_or_else(|| {
            HttpResponse::NotFound().json(serde_json::json!({
                "error": "appointment not found",
            }))
        })?;

    verify_request_company(db, appointment.request_id, user).await?;
    Ok(appointment.id)
}

/// POST /api/appointments/{id}/accept — the company accepts a proposed slot.
pub async fn accept(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let appointment_id = match verify_company_on_appointment(db.get_ref(), path.into_inner(), &user.0).await
    {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match appointment_db::accept_appointment(db.get_ref(), appointment_id).await {
        Ok(appointment) => HttpResponse::Ok().json(appointment),
        Err(e) => transition_error_response(e),
    }
}

/// POST /api/appointments/{id}/reject — the company rejects a proposed slot.
pub async fn reject(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let appointment_id = match verify_company_on_appointment(db.get_ref(), path.into_inner(), &user.0).await
    {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match appointment_db::reject_appointment(db.get_ref(), appointment_id).await {
        Ok(appointment) => HttpResponse::Ok().json(appointment),
        Err(e) => transition_error_response(e),
    }
}

/// POST /api/appointments/{id}/finalize — the company locks in one slot;
/// every other non-final proposal on the request is force-rejected.
pub async fn finalize(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let appointment_id = match verify_company_on_appointment(db.get_ref(), path.into_inner(), &user.0).await
    {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match appointment_db::finalize_appointment(db.get_ref(), appointment_id).await {
        Ok(appointment) => HttpResponse::Ok().json(appointment),
        Err(e) => transition_error_response(e),
    }
}
