//! Persistence for request documents. An upload is a lifecycle-aware unit
//! of work: inserting the row can flip a `revision_requested` request back
//! to `pending` (the client's resubmission) or, for the final report,
//! append the delivery notice to the conversation.

use sea_orm::*;
use uuid::Uuid;

use super::TransitionError;
use super::conversations as conversations_db;
use crate::lifecycle::transitions;
use crate::models::documents::{self, DocumentKind};
use crate::models::requests::{self, RequestStatus};

pub async fn get_documents_by_request(
    db: &DatabaseConnection,
    request_id: Uuid,
) -> Result<Vec<documents::Model>, DbErr> {
    documents::Entity::find()
        .filter(documents::Column::RequestId.eq(request_id))
        .order_by_asc(documents::Column::CreatedAt)
        .all(db)
        .await
}

/// Attach an uploaded file to a request.
///
/// `file_path` is whatever reference the storage collaborator returned; by
/// the time we are here the bytes are already stored.
pub async fn add_document(
    db: &DatabaseConnection,
    request_id: Uuid,
    kind: DocumentKind,
    file_path: String,
    uploaded_by: Uuid,
    uploader_is_company: bool,
) -> Result<documents::Model, TransitionError> {
    let txn = db.begin().await?;

    let request = requests::Entity::find_by_id(request_id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or(TransitionError::NotFound)?;
    transitions::upload_document(&request, kind, uploader_is_company)?;

    let new_document = documents::ActiveModel {
        id: Set(Uuid::new_v4()),
        request_id: Set(request_id),
        kind: Set(kind),
        file_path: Set(file_path),
        uploaded_by: Set(uploaded_by),
        created_at: Set(chrono::Utc::now()),
    };
    let document = new_document.insert(&txn).await?;

    if uploader_is_company && kind == DocumentKind::FinalReport {
        // Report delivery notice to the client.
        if let Some(company_id) = request.company_id {
            let conv = conversations_db::ensure_conversation(
                &txn,
                request.client_id,
                company_id,
                company_id,
            )
            .await?;
            conversations_db::append_message(
                &txn,
                conv.id,
                company_id,
                "The final valuation report has been uploaded to your request.",
            )
            .await?;
        }
    } else if request.status == RequestStatus::RevisionRequested {
        // Client resubmission: the review can resume.
        let mut active: requests::ActiveModel = request.into();
        active.status = Set(RequestStatus::Pending);
        active.updated_at = Set(Some(chrono::Utc::now()));
        active.update(&txn).await?;
    }

    txn.commit().await?;
    Ok(document)
}
