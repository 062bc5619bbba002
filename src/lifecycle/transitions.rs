//! Pure transition guards for valuation requests and their visit
//! appointments. Each function inspects a snapshot and either clears the
//! transition or explains why it cannot happen. No side effects here —
//! callers apply the mutations transactionally after the guard passes.

use uuid::Uuid;

use super::LifecycleError;
use crate::models::appointments::{self, AppointmentStatus};
use crate::models::documents::DocumentKind;
use crate::models::requests::{Model as Request, RequestStatus};

/// Company rejects a pending request. The reason is mandatory — it is what
/// the client sees in the conversation thread.
pub fn reject(request: &Request, reason: &str) -> Result<(), LifecycleError> {
    if request.status != RequestStatus::Pending {
        return Err(LifecycleError::guard(
            "only a pending request can be rejected",
        ));
    }
    if reason.trim().is_empty() {
        return Err(LifecycleError::validation("a rejection reason is required"));
    }
    Ok(())
}

/// Company flags missing documents on a pending request.
pub fn request_revision(request: &Request, notes: &str) -> Result<(), LifecycleError> {
    if request.status != RequestStatus::Pending {
        return Err(LifecycleError::guard(
            "documents can only be requested on a pending request",
        ));
    }
    if notes.trim().is_empty() {
        return Err(LifecycleError::validation(
            "describe which documents are missing",
        ));
    }
    Ok(())
}

/// Company submits its valuation figure, completing the review. The same
/// transition covers a re-submission after the client declined, since
/// decline reopens the request as pending with the company still assigned.
pub fn submit_value(request: &Request, value: f64) -> Result<(), LifecycleError> {
    if request.status != RequestStatus::Pending {
        return Err(LifecycleError::guard(
            "a valuation can only be submitted on a pending request",
        ));
    }
    if !value.is_finite() || value <= 0.0 {
        return Err(LifecycleError::validation(
            "the valuation value must be a positive number",
        ));
    }
    Ok(())
}

/// Client accepts the submitted valuation.
pub fn accept(request: &Request) -> Result<(), LifecycleError> {
    if request.status != RequestStatus::Completed {
        return Err(LifecycleError::guard(
            "cannot accept before the company submits a valuation",
        ));
    }
    Ok(())
}

/// Client declines the submitted valuation; the request reopens as pending
/// with the same company.
pub fn decline(request: &Request) -> Result<(), LifecycleError> {
    if request.status != RequestStatus::Completed {
        return Err(LifecycleError::guard(
            "cannot decline before the company submits a valuation",
        ));
    }
    Ok(())
}

/// Either party proposes a visit slot. Only possible once the client has
/// accepted the valuation.
pub fn propose_appointment(request: &Request) -> Result<(), LifecycleError> {
    if request.status != RequestStatus::Approved {
        return Err(LifecycleError::guard(
            "visits can only be scheduled after the valuation is accepted",
        ));
    }
    Ok(())
}

/// Client moves the request to a different company. A completed valuation
/// is never transferable, and the target must actually change.
pub fn transfer(request: &Request, new_company_id: Uuid) -> Result<(), LifecycleError> {
    if request.status == RequestStatus::Completed {
        return Err(LifecycleError::guard(
            "cannot transfer a completed valuation",
        ));
    }
    if request.company_id == Some(new_company_id) {
        return Err(LifecycleError::validation(
            "the request is already assigned to this company",
        ));
    }
    Ok(())
}

/// Who may add which document, and when. Clients upload evidence while the
/// request is being reviewed (a re-upload on `revision_requested` is the
/// resubmission path back to `pending`); the company uploads the final
/// report once the valuation is approved.
pub fn upload_document(
    request: &Request,
    kind: DocumentKind,
    uploader_is_company: bool,
) -> Result<(), LifecycleError> {
    if uploader_is_company {
        if kind != DocumentKind::FinalReport {
            return Err(LifecycleError::validation(
                "companies only upload the final report",
            ));
        }
        if request.status != RequestStatus::Approved {
            return Err(LifecycleError::guard(
                "the final report can only be delivered on an approved request",
            ));
        }
        return Ok(());
    }

    if kind == DocumentKind::FinalReport {
        return Err(LifecycleError::validation(
            "the final report is delivered by the company",
        ));
    }
    match request.status {
        RequestStatus::Pending | RequestStatus::RevisionRequested => Ok(()),
        _ => Err(LifecycleError::guard(
            "documents can only be added while the request is under review",
        )),
    }
}

// ── Appointment sub-state-machine ──

/// Company accepts a proposed slot.
pub fn accept_appointment(appointment: &appointments::Model) -> Result<(), LifecycleError> {
    if appointment.status != AppointmentStatus::Pending {
        return Err(LifecycleError::guard(
            "only a pending appointment can be accepted",
        ));
    }
    Ok(())
}

/// Company rejects a proposed slot.
pub fn reject_appointment(appointment: &appointments::Model) -> Result<(), LifecycleError> {
    if appointment.status != AppointmentStatus::Pending {
        return Err(LifecycleError::guard(
            "only a pending appointment can be rejected",
        ));
    }
    Ok(())
}

/// Company finalizes a slot. Returns the sibling ids to force-reject;
/// siblings already `final` are left alone.
pub fn finalize_appointment(
    target: &appointments::Model,
    siblings: &[appointments::Model],
) -> Result<Vec<Uuid>, LifecycleError> {
    match target.status {
        AppointmentStatus::Pending | AppointmentStatus::Accepted => {}
        AppointmentStatus::Final => {
            return Err(LifecycleError::guard("this appointment is already final"));
        }
        AppointmentStatus::Rejected => {
            return Err(LifecycleError::guard(
                "a rejected appointment cannot be finalized",
            ));
        }
    }

    Ok(siblings
        .iter()
        .filter(|a| a.id != target.id && a.status != AppointmentStatus::Final)
        .map(|a| a.id)
        .collect())
}
