//! Tests for the affordability calculator: the annuity formula solved for
//! the principal, its degenerate edges, and the forward payment schedule.
//!
//! Run with: `cargo test --test affordability_test`

use taqyeem_backend::finance::{max_loan, monthly_payment};

#[test]
fn test_reference_case_six_percent_twenty_years() {
    // income 1000, 6% annual, 20 years, 40% payment-to-income ratio:
    // payment ceiling is exactly 400, and the principal follows the
    // annuity factor at r = 0.005, n = 240.
    let capacity = max_loan(1000.0, 6.0, 20, 0.4);

    assert_eq!(capacity.max_monthly_payment, 400.0);

    let r: f64 = 0.005;
    let growth = (1.0 + r).powi(240);
    let expected = 400.0 * ((growth - 1.0) / (r * growth));
    assert!((capacity.max_principal - expected).abs() < 1e-6);

    // Sanity band: roughly 55.8k for these inputs.
    assert!(capacity.max_principal > 55_000.0);
    assert!(capacity.max_principal < 56_000.0);
}

#[test]
fn test_zero_term_yields_zero_principal() {
    let capacity = max_loan(5000.0, 7.5, 0, 0.33);
    assert_eq!(capacity.max_principal, 0.0);
    // The payment ceiling is still reported for display.
    assert!((capacity.max_monthly_payment - 1650.0).abs() < 1e-9);
}

#[test]
fn test_zero_rate_degenerates_to_linear() {
    // rate == 0 ⇒ principal == income * ratio * years * 12 exactly.
    let capacity = max_loan(1000.0, 0.0, 10, 0.4);
    assert_eq!(capacity.max_principal, 400.0 * 120.0);
}

#[test]
fn test_principal_is_monotone_in_income() {
    let mut last = -1.0;
    for income in [0.0, 250.0, 800.0, 1500.0, 4000.0, 9000.0] {
        let capacity = max_loan(income, 5.0, 15, 0.35);
        assert!(
            capacity.max_principal >= last,
            "principal decreased when income rose to {income}"
        );
        last = capacity.max_principal;
    }
}

#[test]
fn test_principal_is_monotone_in_rate() {
    let mut last = f64::INFINITY;
    for rate in [0.0, 1.0, 3.5, 6.0, 9.0, 15.0] {
        let capacity = max_loan(2000.0, rate, 25, 0.4);
        assert!(
            capacity.max_principal <= last,
            "principal increased when the rate rose to {rate}"
        );
        last = capacity.max_principal;
    }
}

#[test]
fn test_outputs_are_never_negative() {
    let capacity = max_loan(0.0, 6.0, 20, 0.4);
    assert_eq!(capacity.max_principal, 0.0);
    assert_eq!(capacity.max_monthly_payment, 0.0);
}

#[test]
fn test_payment_schedule_round_figures() {
    // A 100k loan at 6% over 240 months costs ~716.43 a month.
    let schedule = monthly_payment(100_000.0, 6.0, 240).expect("schedule should exist");
    assert!((schedule.monthly - 716.43).abs() < 0.01);
    assert!((schedule.total_cost - schedule.monthly * 240.0).abs() < 1e-6);
    assert!((schedule.total_interest - (schedule.total_cost - 100_000.0)).abs() < 1e-6);
}

#[test]
fn test_payment_schedule_undefined_inputs() {
    assert!(monthly_payment(0.0, 6.0, 240).is_none());
    assert!(monthly_payment(100_000.0, 0.0, 240).is_none());
    assert!(monthly_payment(100_000.0, 6.0, 0).is_none());
}
