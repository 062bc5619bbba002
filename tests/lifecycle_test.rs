//! Tests for the valuation request lifecycle guards and the appointment
//! sub-state-machine. These exercise the pure transition layer — the same
//! checks the transactional layer re-runs on the locked row.
//!
//! Run with: `cargo test --test lifecycle_test`

use chrono::Utc;
use uuid::Uuid;

use taqyeem_backend::lifecycle::LifecycleError;
use taqyeem_backend::lifecycle::transitions;
use taqyeem_backend::models::appointments::{self, AppointmentStatus, ProposedBy};
use taqyeem_backend::models::documents::DocumentKind;
use taqyeem_backend::models::requests::{self, RequestStatus, ValuationType};

fn request_with_status(status: RequestStatus) -> requests::Model {
    requests::Model {
        id: Uuid::new_v4(),
        title: "Apartment 101".to_string(),
        description: "3BR apartment near the sea".to_string(),
        valuation_type: ValuationType::Property,
        requested_amount: None,
        value: None,
        status,
        rejection_reason: None,
        rejected_at: None,
        client_id: Uuid::new_v4(),
        company_id: Some(Uuid::new_v4()),
        bank_id: None,
        created_at: Utc::now(),
        updated_at: None,
    }
}

fn appointment_with_status(
    request_id: Uuid,
    status: AppointmentStatus,
) -> appointments::Model {
    appointments::Model {
        id: Uuid::new_v4(),
        request_id,
        proposed_time: Utc::now(),
        proposed_by: ProposedBy::Client,
        status,
        notes: None,
        created_at: Utc::now(),
    }
}

// ── Company review guards ──

#[test]
fn test_reject_requires_pending_and_a_reason() {
    let pending = request_with_status(RequestStatus::Pending);
    assert!(transitions::reject(&pending, "بيانات غير مكتملة").is_ok());

    // Empty (or whitespace) reasons are validation failures.
    assert!(matches!(
        transitions::reject(&pending, "   "),
        Err(LifecycleError::Validation(_))
    ));

    // Any other state is a guard violation.
    let completed = request_with_status(RequestStatus::Completed);
    assert!(matches!(
        transitions::reject(&completed, "سبب"),
        Err(LifecycleError::Guard(_))
    ));
}

#[test]
fn test_revision_requires_pending_and_notes() {
    let pending = request_with_status(RequestStatus::Pending);
    assert!(transitions::request_revision(&pending, "صك الملكية مفقود").is_ok());
    assert!(matches!(
        transitions::request_revision(&pending, ""),
        Err(LifecycleError::Validation(_))
    ));

    let approved = request_with_status(RequestStatus::Approved);
    assert!(matches!(
        transitions::request_revision(&approved, "notes"),
        Err(LifecycleError::Guard(_))
    ));
}

#[test]
fn test_submit_value_only_from_pending() {
    let pending = request_with_status(RequestStatus::Pending);
    assert!(transitions::submit_value(&pending, 150_000.0).is_ok());

    assert!(matches!(
        transitions::submit_value(&pending, f64::NAN),
        Err(LifecycleError::Validation(_))
    ));
    assert!(matches!(
        transitions::submit_value(&pending, -5.0),
        Err(LifecycleError::Validation(_))
    ));

    let rejected = request_with_status(RequestStatus::Rejected);
    assert!(matches!(
        transitions::submit_value(&rejected, 150_000.0),
        Err(LifecycleError::Guard(_))
    ));
}

// ── Client decision guards ──

#[test]
fn test_accept_before_valuation_is_guarded() {
    // A pending request has no submitted value to accept; the request
    // stays untouched (the pure layer never mutates).
    let pending = request_with_status(RequestStatus::Pending);
    assert!(matches!(
        transitions::accept(&pending),
        Err(LifecycleError::Guard(_))
    ));
    assert_eq!(pending.status, RequestStatus::Pending);

    let completed = request_with_status(RequestStatus::Completed);
    assert!(transitions::accept(&completed).is_ok());
}

#[test]
fn test_decline_reopens_only_completed_requests() {
    let completed = request_with_status(RequestStatus::Completed);
    assert!(transitions::decline(&completed).is_ok());

    let approved = request_with_status(RequestStatus::Approved);
    assert!(matches!(
        transitions::decline(&approved),
        Err(LifecycleError::Guard(_))
    ));
}

// ── Transfer guards ──

#[test]
fn test_completed_requests_are_never_transferable() {
    let completed = request_with_status(RequestStatus::Completed);
    let original_company = completed.company_id;

    let result = transitions::transfer(&completed, Uuid::new_v4());
    assert!(matches!(result, Err(LifecycleError::Guard(_))));

    // Nothing changed: status and assignment are as before.
    assert_eq!(completed.status, RequestStatus::Completed);
    assert_eq!(completed.company_id, original_company);
}

#[test]
fn test_transfer_to_the_same_company_is_rejected() {
    let pending = request_with_status(RequestStatus::Pending);
    let current = pending.company_id.unwrap();
    assert!(matches!(
        transitions::transfer(&pending, current),
        Err(LifecycleError::Validation(_))
    ));
}

#[test]
fn test_transfer_allowed_from_every_non_completed_state() {
    for status in [
        RequestStatus::Pending,
        RequestStatus::RevisionRequested,
        RequestStatus::Rejected,
        RequestStatus::Approved,
    ] {
        let request = request_with_status(status);
        assert!(
            transitions::transfer(&request, Uuid::new_v4()).is_ok(),
            "transfer should be allowed from {status:?}"
        );
    }
}

// ── Appointment scheduling ──

#[test]
fn test_appointments_only_after_acceptance() {
    let approved = request_with_status(RequestStatus::Approved);
    assert!(transitions::propose_appointment(&approved).is_ok());

    let completed = request_with_status(RequestStatus::Completed);
    assert!(matches!(
        transitions::propose_appointment(&completed),
        Err(LifecycleError::Guard(_))
    ));
}

#[test]
fn test_appointment_decisions_require_pending() {
    let request_id = Uuid::new_v4();
    let pending = appointment_with_status(request_id, AppointmentStatus::Pending);
    assert!(transitions::accept_appointment(&pending).is_ok());
    assert!(transitions::reject_appointment(&pending).is_ok());

    let accepted = appointment_with_status(request_id, AppointmentStatus::Accepted);
    assert!(matches!(
        transitions::accept_appointment(&accepted),
        Err(LifecycleError::Guard(_))
    ));
}

#[test]
fn test_finalize_exclusivity() {
    // Finalizing A among {A pending, B accepted, C already final} rejects B
    // and leaves C alone.
    let request_id = Uuid::new_v4();
    let a = appointment_with_status(request_id, AppointmentStatus::Pending);
    let b = appointment_with_status(request_id, AppointmentStatus::Accepted);
    let c = appointment_with_status(request_id, AppointmentStatus::Final);

    let siblings = vec![a.clone(), b.clone(), c.clone()];
    let to_reject = transitions::finalize_appointment(&a, &siblings).expect("finalize allowed");

    assert_eq!(to_reject, vec![b.id]);
}

#[test]
fn test_finalize_guards() {
    let request_id = Uuid::new_v4();
    let rejected = appointment_with_status(request_id, AppointmentStatus::Rejected);
    assert!(matches!(
        transitions::finalize_appointment(&rejected, &[]),
        Err(LifecycleError::Guard(_))
    ));

    let already_final = appointment_with_status(request_id, AppointmentStatus::Final);
    assert!(matches!(
        transitions::finalize_appointment(&already_final, &[]),
        Err(LifecycleError::Guard(_))
    ));
}

// ── Document upload rules ──

#[test]
fn test_client_uploads_evidence_while_under_review() {
    let pending = request_with_status(RequestStatus::Pending);
    assert!(transitions::upload_document(&pending, DocumentKind::Deed, false).is_ok());

    // The resubmission path: a revision_requested request accepts new
    // evidence (the transactional layer flips it back to pending).
    let revision = request_with_status(RequestStatus::RevisionRequested);
    assert!(transitions::upload_document(&revision, DocumentKind::SiteSketch, false).is_ok());

    let approved = request_with_status(RequestStatus::Approved);
    assert!(matches!(
        transitions::upload_document(&approved, DocumentKind::Map, false),
        Err(LifecycleError::Guard(_))
    ));
}

#[test]
fn test_final_report_is_company_only_and_post_approval() {
    let approved = request_with_status(RequestStatus::Approved);
    assert!(transitions::upload_document(&approved, DocumentKind::FinalReport, true).is_ok());

    // A client cannot deliver the report.
    assert!(matches!(
        transitions::upload_document(&approved, DocumentKind::FinalReport, false),
        Err(LifecycleError::Validation(_))
    ));

    // The company cannot deliver it early.
    let completed = request_with_status(RequestStatus::Completed);
    assert!(matches!(
        transitions::upload_document(&completed, DocumentKind::FinalReport, true),
        Err(LifecycleError::Guard(_))
    ));

    // Nor upload client evidence kinds at all.
    assert!(matches!(
        transitions::upload_document(&approved, DocumentKind::Deed, true),
        Err(LifecycleError::Validation(_))
    ));
}
