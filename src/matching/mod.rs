//! Bank/company matching: the effective-limit precedence chain and the
//! coverage predicate shared by both discovery modes.

use std::cmp::Ordering;

/// The credit ceiling that actually applies to a company for a given bank:
/// the approval-specific override when present, else the profile-wide limit.
/// `None` means no limit is stated anywhere — such a company is excluded
/// from matching rather than promised capacity it never declared.
pub fn effective_limit(approval_limit: Option<f64>, profile_limit: Option<f64>) -> Option<f64> {
    approval_limit.or(profile_limit)
}

/// Whether a stated limit covers a required amount. Boundary-inclusive, and
/// used from both the direct-amount mode and the offers mode so the two
/// inequality directions cannot drift apart.
pub fn covers(effective_limit: f64, required_amount: f64) -> bool {
    effective_limit >= required_amount
}

/// Direct-amount mode ordering: effective limit descending.
pub fn by_limit_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Offers mode ordering: estimated value descending, companies whose
/// location had no resolvable price sorted last.
pub fn by_estimate_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
