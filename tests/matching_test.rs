//! Tests for the bank-matching engine: the effective-limit precedence
//! chain, the boundary-inclusive coverage predicate shared by both modes,
//! and the two result orderings.
//!
//! Run with: `cargo test --test matching_test`

use std::cmp::Ordering;

use taqyeem_backend::matching::{by_estimate_desc, by_limit_desc, covers, effective_limit};

#[test]
fn test_approval_override_beats_profile_limit() {
    assert_eq!(effective_limit(Some(250_000.0), Some(100_000.0)), Some(250_000.0));
}

#[test]
fn test_profile_limit_is_the_fallback() {
    assert_eq!(effective_limit(None, Some(100_000.0)), Some(100_000.0));
}

#[test]
fn test_no_limit_anywhere_means_excluded() {
    // None propagates: the matcher drops companies that never stated a
    // limit instead of promising capacity.
    assert_eq!(effective_limit(None, None), None);
}

#[test]
fn test_boundary_is_inclusive_in_both_directions() {
    // A company with limit L must be included both ways when the amount or
    // estimate equals L exactly.
    let limit = 150_000.0;

    // Direct-amount mode asks "limit >= amount".
    assert!(covers(limit, 150_000.0));

    // Offers mode excludes when "estimate > limit" — the complement of the
    // same predicate, so the boundary case stays included there too.
    let estimate = 150_000.0;
    let excluded = !covers(limit, estimate);
    assert!(!excluded);

    // And one currency unit above the limit flips both.
    assert!(!covers(limit, 150_001.0));
}

#[test]
fn test_direct_mode_orders_by_limit_descending() {
    let mut limits = vec![120_000.0, 500_000.0, 80_000.0];
    limits.sort_by(|a, b| by_limit_desc(*a, *b));
    assert_eq!(limits, vec![500_000.0, 120_000.0, 80_000.0]);
}

#[test]
fn test_offers_mode_orders_by_estimate_with_unresolved_last() {
    let mut estimates = vec![Some(90_000.0), None, Some(140_000.0), None, Some(10_000.0)];
    estimates.sort_by(|a, b| by_estimate_desc(*a, *b));
    assert_eq!(
        estimates,
        vec![Some(140_000.0), Some(90_000.0), Some(10_000.0), None, None]
    );
}

#[test]
fn test_equal_estimates_are_stable_ties() {
    assert_eq!(by_estimate_desc(Some(1.0), Some(1.0)), Ordering::Equal);
    assert_eq!(by_estimate_desc(None, None), Ordering::Equal);
}
