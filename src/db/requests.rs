//! Persistence for valuation requests. Every lifecycle transition here is a
//! unit of work: open a transaction, lock the row, re-check the pure guard,
//! apply all mutations (status fields, conversation notice, appointment
//! cleanup), then commit. A guard failure or database error rolls the whole
//! transaction back, so no partial state is ever visible.

use sea_orm::*;
use uuid::Uuid;

use super::TransitionError;
use super::conversations as conversations_db;
use crate::lifecycle::transitions;
use crate::models::appointments;
use crate::models::requests::{self, CreateRequest, RequestStatus};

/// Insert a freshly submitted request (status `pending`). The optional
/// company/bank preselection is validated by the handler.
pub async fn insert_request(
    db: &DatabaseConnection,
    input: CreateRequest,
    client_id: Uuid,
) -> Result<requests::Model, DbErr> {
    let new_request = requests::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        description: Set(input.description),
        valuation_type: Set(input.valuation_type),
        requested_amount: Set(input.requested_amount),
        value: Set(None),
        status: Set(RequestStatus::Pending),
        rejection_reason: Set(None),
        rejected_at: Set(None),
        client_id: Set(client_id),
        company_id: Set(input.company_id),
        bank_id: Set(input.bank_id),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_request.insert(db).await
}

pub async fn get_request_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<requests::Model>, DbErr> {
    requests::Entity::find_by_id(id).one(db).await
}

pub async fn get_requests_by_client(
    db: &DatabaseConnection,
    client_id: Uuid,
) -> Result<Vec<requests::Model>, DbErr> {
    requests::Entity::find()
        .filter(requests::Column::ClientId.eq(client_id))
        .order_by_desc(requests::Column::CreatedAt)
        .all(db)
        .await
}

pub async fn get_requests_by_company(
    db: &DatabaseConnection,
    company_id: Uuid,
) -> Result<Vec<requests::Model>, DbErr> {
    requests::Entity::find()
        .filter(requests::Column::CompanyId.eq(company_id))
        .order_by_desc(requests::Column::CreatedAt)
        .all(db)
        .await
}

pub async fn get_requests_by_bank(
    db: &DatabaseConnection,
    bank_id: Uuid,
) -> Result<Vec<requests::Model>, DbErr> {
    requests::Entity::find()
        .filter(requests::Column::BankId.eq(bank_id))
        .order_by_desc(requests::Column::CreatedAt)
        .all(db)
        .await
}

pub async fn get_all_requests(db: &DatabaseConnection) -> Result<Vec<requests::Model>, DbErr> {
    requests::Entity::find()
        .order_by_desc(requests::Column::CreatedAt)
        .all(db)
        .await
}

/// Re-fetch the request inside the transaction with a row lock, so two
/// concurrent company actions serialize instead of silently losing one.
async fn lock_request(
    txn: &DatabaseTransaction,
    id: Uuid,
) -> Result<requests::Model, TransitionError> {
    requests::Entity::find_by_id(id)
        .lock_exclusive()
        .one(txn)
        .await?
        .ok_or(TransitionError::NotFound)
}

async fn delete_appointments(txn: &DatabaseTransaction, request_id: Uuid) -> Result<(), DbErr> {
    appointments::Entity::delete_many()
        .filter(appointments::Column::RequestId.eq(request_id))
        .exec(txn)
        .await?;
    Ok(())
}

/// Company rejects a pending request: rejection fields set together, the
/// company unassigned, proposals cleared, and the reason delivered to the
/// client's conversation thread.
pub async fn reject_request(
    db: &DatabaseConnection,
    request_id: Uuid,
    company_id: Uuid,
    reason: &str,
) -> Result<requests::Model, TransitionError> {
    let txn = db.begin().await?;
    let request = lock_request(&txn, request_id).await?;
    transitions::reject(&request, reason)?;

    let reason = reason.trim().to_string();
    let conv =
        conversations_db::ensure_conversation(&txn, request.client_id, company_id, company_id)
            .await?;
    conversations_db::append_message(
        &txn,
        conv.id,
        company_id,
        &format!("Your valuation request was rejected: {reason}"),
    )
    .await?;

    let now = chrono::Utc::now();
    let mut active: requests::ActiveModel = request.into();
    active.status = Set(RequestStatus::Rejected);
    active.rejection_reason = Set(Some(reason));
    active.rejected_at = Set(Some(now));
    active.company_id = Set(None);
    active.updated_at = Set(Some(now));
    let updated = active.update(&txn).await?;

    delete_appointments(&txn, request_id).await?;

    txn.commit().await?;
    Ok(updated)
}

/// Company flags missing documents; the notes land in the conversation and
/// the request waits in `revision_requested` until the client re-uploads.
pub async fn request_revision(
    db: &DatabaseConnection,
    request_id: Uuid,
    company_id: Uuid,
    notes: &str,
) -> Result<requests::Model, TransitionError> {
    let txn = db.begin().await?;
    let request = lock_request(&txn, request_id).await?;
    transitions::request_revision(&request, notes)?;

    let conv =
        conversations_db::ensure_conversation(&txn, request.client_id, company_id, company_id)
            .await?;
    conversations_db::append_message(
        &txn,
        conv.id,
        company_id,
        &format!("Documents are missing on your valuation request: {}", notes.trim()),
    )
    .await?;

    let mut active: requests::ActiveModel = request.into();
    active.status = Set(RequestStatus::RevisionRequested);
    active.updated_at = Set(Some(chrono::Utc::now()));
    let updated = active.update(&txn).await?;

    txn.commit().await?;
    Ok(updated)
}

/// Company submits its valuation figure; the request completes.
pub async fn submit_value(
    db: &DatabaseConnection,
    request_id: Uuid,
    value: f64,
) -> Result<requests::Model, TransitionError> {
    let txn = db.begin().await?;
    let request = lock_request(&txn, request_id).await?;
    transitions::submit_value(&request, value)?;

    let mut active: requests::ActiveModel = request.into();
    active.status = Set(RequestStatus::Completed);
    active.value = Set(Some(value));
    active.updated_at = Set(Some(chrono::Utc::now()));
    let updated = active.update(&txn).await?;

    txn.commit().await?;
    Ok(updated)
}

/// Client accepts the submitted valuation; the company is notified through
/// the conversation thread.
pub async fn accept_request(
    db: &DatabaseConnection,
    request_id: Uuid,
) -> Result<requests::Model, TransitionError> {
    let txn = db.begin().await?;
    let request = lock_request(&txn, request_id).await?;
    transitions::accept(&request)?;
    let company_id = assigned_company(&request)?;

    let conv =
        conversations_db::ensure_conversation(&txn, request.client_id, company_id, request.client_id)
            .await?;
    conversations_db::append_message(
        &txn,
        conv.id,
        request.client_id,
        "The client accepted the valuation. A visit can now be scheduled.",
    )
    .await?;

    let mut active: requests::ActiveModel = request.into();
    active.status = Set(RequestStatus::Approved);
    active.updated_at = Set(Some(chrono::Utc::now()));
    let updated = active.update(&txn).await?;

    txn.commit().await?;
    Ok(updated)
}

/// Client declines the valuation; the request reopens as pending with the
/// same company, which may submit a revised figure.
pub async fn decline_request(
    db: &DatabaseConnection,
    request_id: Uuid,
) -> Result<requests::Model, TransitionError> {
    let txn = db.begin().await?;
    let request = lock_request(&txn, request_id).await?;
    transitions::decline(&request)?;
    let company_id = assigned_company(&request)?;

    let conv =
        conversations_db::ensure_conversation(&txn, request.client_id, company_id, request.client_id)
            .await?;
    conversations_db::append_message(
        &txn,
        conv.id,
        request.client_id,
        "The client declined the valuation. The request is open for review again.",
    )
    .await?;

    let mut active: requests::ActiveModel = request.into();
    active.status = Set(RequestStatus::Pending);
    active.updated_at = Set(Some(chrono::Utc::now()));
    let updated = active.update(&txn).await?;

    txn.commit().await?;
    Ok(updated)
}

/// Client moves the request to a different company. Completed requests are
/// guarded off; all appointment history is cleared.
pub async fn transfer_request(
    db: &DatabaseConnection,
    request_id: Uuid,
    new_company_id: Uuid,
) -> Result<requests::Model, TransitionError> {
    let txn = db.begin().await?;
    let request = lock_request(&txn, request_id).await?;
    transitions::transfer(&request, new_company_id)?;

    let mut active: requests::ActiveModel = request.into();
    active.status = Set(RequestStatus::Pending);
    active.company_id = Set(Some(new_company_id));
    active.updated_at = Set(Some(chrono::Utc::now()));
    let updated = active.update(&txn).await?;

    delete_appointments(&txn, request_id).await?;

    txn.commit().await?;
    Ok(updated)
}

fn assigned_company(request: &requests::Model) -> Result<Uuid, TransitionError> {
    request.company_id.ok_or_else(|| {
        TransitionError::Rule(crate::lifecycle::LifecycleError::guard(
            "this request has no assigned company",
        ))
    })
}
