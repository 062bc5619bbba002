pub mod appointments;
pub mod auth;
pub mod banks;
pub mod calculator;
pub mod conversations;
pub mod documents;
pub mod prices;
pub mod requests;
pub mod users;

use actix_web::{HttpResponse, web};

use crate::db::TransitionError;
use crate::lifecycle::LifecycleError;

/// Map a failed lifecycle transition onto the HTTP surface: validation is a
/// 400 with a corrective message, a guard violation is a 409 (the state is
/// unchanged), and a persistence failure rolled back and deserves only a
/// generic "try again".
pub(crate) fn transition_error_response(err: TransitionError) -> HttpResponse {
    match err {
        TransitionError::Rule(LifecycleError::Validation(msg)) => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": msg }))
        }
        TransitionError::Rule(LifecycleError::Guard(msg)) => {
            HttpResponse::Conflict().json(serde_json::json!({ "error": msg }))
        }
        TransitionError::NotFound => HttpResponse::NotFound().json(serde_json::json!({
            "error": "valuation request not found",
        })),
        TransitionError::Db(e) => {
            tracing::error!("lifecycle transaction failed: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "something went wrong, please try again",
            }))
        }
    }
}

pub(crate) fn db_error_response(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::InternalServerError().json(serde_json::json!({
        "error": format!("Database error: {e}"),
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Auth ──
    cfg.service(web::scope("/auth").route("/me", web::get().to(auth::me)));

    // ── Valuation requests and their lifecycle actions ──
    cfg.service(
        web::scope("/requests")
            .route("", web::get().to(requests::get_requests))
            .route("", web::post().to(requests::create_request))
            .route("/{id}", web::get().to(requests::get_request))
            .route("/{id}/reject", web::post().to(requests::reject))
            .route("/{id}/revision", web::post().to(requests::request_revision))
            .route("/{id}/value", web::post().to(requests::submit_value))
            .route("/{id}/accept", web::post().to(requests::accept))
            .route("/{id}/decline", web::post().to(requests::decline))
            .route("/{id}/transfer", web::post().to(requests::transfer))
            .route("/{id}/documents", web::get().to(documents::get_documents))
            .route("/{id}/documents", web::post().to(documents::upload_document))
            .route(
                "/{id}/appointments",
                web::get().to(appointments::get_appointments),
            )
            .route(
                "/{id}/appointments",
                web::post().to(appointments::propose),
            ),
    );

    // ── Appointment decisions (company side) ──
    cfg.service(
        web::scope("/appointments")
            .route("/{id}/accept", web::post().to(appointments::accept))
            .route("/{id}/reject", web::post().to(appointments::reject))
            .route("/{id}/finalize", web::post().to(appointments::finalize)),
    );

    // ── Conversations ──
    cfg.service(
        web::scope("/conversations")
            .route("", web::get().to(conversations::get_conversations))
            .route(
                "/start/{company_id}",
                web::post().to(conversations::start_conversation),
            )
            .route(
                "/{id}/messages",
                web::get().to(conversations::get_messages),
            )
            .route(
                "/{id}/messages",
                web::post().to(conversations::send_message),
            )
            .route("/{id}/read", web::post().to(conversations::mark_read))
            .route("/{id}/status", web::post().to(conversations::update_status)),
    );

    // ── Discovery: companies, banks, matching, policies ──
    cfg.service(web::resource("/companies").route(web::get().to(banks::get_companies)));
    cfg.service(
        web::scope("/banks")
            .route("", web::get().to(banks::get_banks))
            .route("/policies", web::post().to(banks::upsert_policy))
            .route(
                "/{slug}/companies",
                web::get().to(banks::certified_companies),
            )
            .route("/{slug}/offers", web::get().to(banks::certified_offers))
            .route("/{slug}/policies", web::get().to(banks::get_policies)),
    );
    cfg.service(
        web::resource("/approvals").route(web::post().to(banks::approve_company)),
    );
    cfg.service(
        web::resource("/approvals/{company_id}")
            .route(web::delete().to(banks::remove_approval)),
    );

    // ── Affordability calculator ──
    cfg.service(
        web::scope("/calculator")
            .route("/max-loan", web::get().to(calculator::max_loan))
            .route("/payment", web::get().to(calculator::payment)),
    );

    // ── Land prices ──
    cfg.service(web::resource("/prices").route(web::get().to(prices::lookup)));
    cfg.service(
        web::scope("/admin")
            .route("/land-prices", web::get().to(prices::list_public))
            .route(
                "/land-prices/import",
                web::post().to(prices::import_public),
            )
            .route("/banks", web::post().to(users::add_bank))
            .route("/companies", web::post().to(users::add_company)),
    );
    cfg.service(
        web::resource("/company/land-prices/import")
            .route(web::post().to(prices::import_company)),
    );

    // ── Users (admin) ──
    cfg.service(web::resource("/users").route(web::get().to(users::get_users)));
}
