//! Persistence for visit appointments, including the transactional
//! finalize that force-rejects every non-final sibling.

use sea_orm::prelude::Expr;
use sea_orm::*;
use uuid::Uuid;

use super::TransitionError;
use crate::lifecycle::transitions;
use crate::models::appointments::{self, AppointmentStatus, ProposedBy};
use crate::models::requests;

/// Create a proposed slot on an approved request. The request is locked so
/// a concurrent transfer cannot clear appointments mid-insert.
pub async fn propose_appointment(
    db: &DatabaseConnection,
    request_id: Uuid,
    proposed_by: ProposedBy,
    proposed_time: chrono::DateTime<chrono::Utc>,
    notes: Option<String>,
) -> Result<appointments::Model, TransitionError> {
    let txn = db.begin().await?;

    let request = requests::Entity::find_by_id(request_id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or(TransitionError::NotFound)?;
    transitions::propose_appointment(&request)?;

    let new_appointment = appointments::ActiveModel {
        id: Set(Uuid::new_v4()),
        request_id: Set(request_id),
        proposed_time: Set(proposed_time),
        proposed_by: Set(proposed_by),
        status: Set(AppointmentStatus::Pending),
        notes: Set(notes),
        created_at: Set(chrono::Utc::now()),
    };
    let appointment = new_appointment.insert(&txn).await?;

    txn.commit().await?;
    Ok(appointment)
}

pub async fn get_appointment_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<appointments::Model>, DbErr> {
    appointments::Entity::find_by_id(id).one(db).await
}

pub async fn get_appointments_by_request(
    db: &DatabaseConnection,
    request_id: Uuid,
) -> Result<Vec<appointments::Model>, DbErr> {
    appointments::Entity::find()
        .filter(appointments::Column::RequestId.eq(request_id))
        .order_by_asc(appointments::Column::ProposedTime)
        .all(db)
        .await
}

async fn lock_appointment(
    txn: &DatabaseTransaction,
    id: Uuid,
) -> Result<appointments::Model, TransitionError> {
    appointments::Entity::find_by_id(id)
        .lock_exclusive()
        .one(txn)
        .await?
        .ok_or(TransitionError::NotFound)
}

pub async fn accept_appointment(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<appointments::Model, TransitionError> {
    let txn = db.begin().await?;
    let appointment = lock_appointment(&txn, id).await?;
    transitions::accept_appointment(&appointment)?;

    let mut active: appointments::ActiveModel = appointment.into();
    active.status = Set(AppointmentStatus::Accepted);
    let updated = active.update(&txn).await?;

    txn.commit().await?;
    Ok(updated)
}

pub async fn reject_appointment(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<appointments::Model, TransitionError> {
    let txn = db.begin().await?;
    let appointment = lock_appointment(&txn, id).await?;
    transitions::reject_appointment(&appointment)?;

    let mut active: appointments::ActiveModel = appointment.into();
    active.status = Set(AppointmentStatus::Rejected);
    let updated = active.update(&txn).await?;

    txn.commit().await?;
    Ok(updated)
}

/// Finalize one slot and force-reject its non-final siblings, as one unit.
pub async fn finalize_appointment(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<appointments::Model, TransitionError> {
    let txn = db.begin().await?;
    let appointment = lock_appointment(&txn, id).await?;

    let siblings = appointments::Entity::find()
        .filter(appointments::Column::RequestId.eq(appointment.request_id))
        .lock_exclusive()
        .all(&txn)
        .await?;
    let to_reject = transitions::finalize_appointment(&appointment, &siblings)?;

    if !to_reject.is_empty() {
        appointments::Entity::update_many()
            .col_expr(
                appointments::Column::Status,
                Expr::value(AppointmentStatus::Rejected),
            )
            .filter(appointments::Column::Id.is_in(to_reject))
            .exec(&txn)
            .await?;
    }

    let mut active: appointments::ActiveModel = appointment.into();
    active.status = Set(AppointmentStatus::Final);
    let updated = active.update(&txn).await?;

    txn.commit().await?;
    Ok(updated)
}
