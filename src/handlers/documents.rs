use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::authorization::verify_request_party;
use crate::auth::middleware::AuthenticatedUser;
use crate::db::documents as document_db;
use crate::handlers::{db_error_response, transition_error_response};
use crate::models::documents::UploadQuery;
use crate::models::users::Role;
use crate::storage::FileStore;

/// POST /api/requests/{id}/documents?kind=&filename= — attach an uploaded
/// file (raw request body) to a request.
///
/// Clients upload the evidence kinds; the assigned company uploads the
/// final report. The bytes go to the storage collaborator first (remote
/// attempt, local fallback) and only the returned reference is persisted.
pub async fn upload_document(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    store: web::Data<FileStore>,
    path: web::Path<Uuid>,
    query: web::Query<UploadQuery>,
    body: web::Bytes,
) -> impl Responder {
    let request_id = path.into_inner();
    let request = match verify_request_party(db.get_ref(), request_id, &user.0).await {
        Ok(request) => request,
        Err(resp) => return resp,
    };

    // Banks and admins read, they don't upload.
    let uploader_is_company = match user.0.role {
        Role::Client => false,
        Role::Company => true,
        _ => {
            return HttpResponse::Forbidden().json(serde_json::json!({
                "error": "only the client or the company can upload documents",
            }));
        }
    };

    if body.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "the uploaded file is empty",
        }));
    }

    let key = request.id.to_string();
    let file_path = match store.store(&body, &key, &query.filename).await {
        Ok(reference) => reference,
        Err(e) => {
            tracing::error!("document upload failed on both stores: {e}");
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "could not store the file, please try again",
            }));
        }
    };

    match document_db::add_document(
        db.get_ref(),
        request_id,
        query.kind,
        file_path,
        user.0.id,
        uploader_is_company,
    )
    .await
    {
        Ok(document) => HttpResponse::Created().json(document),
        Err(e) => transition_error_response(e),
    }
}

/// GET /api/requests/{id}/documents — the uploaded evidence, oldest first.
pub async fn get_documents(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let request_id = path.into_inner();
    if let Err(resp) = verify_request_party(db.get_ref(), request_id, &user.0).await {
        return resp;
    }

    match document_db::get_documents_by_request(db.get_ref(), request_id).await {
        Ok(documents) => HttpResponse::Ok().json(documents),
        Err(e) => db_error_response(e),
    }
}
