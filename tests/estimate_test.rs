//! Tests for the reference valuation estimator: land value, age
//! depreciation with its 40% floor, the land/building split per property
//! kind, and the tiered fee schedule.
//!
//! Run with: `cargo test --test estimate_test`

use taqyeem_backend::finance::estimate::{
    DEFAULT_BUILDING_COST_PER_SQM, DEFAULT_LOCATION_FACTOR, EstimateInput, depreciation_factor,
    estimate, estimate_fee,
};
use taqyeem_backend::models::requests::ValuationType;

fn input(kind: ValuationType) -> EstimateInput {
    EstimateInput {
        kind,
        land_area: 400.0,
        building_area: 200.0,
        building_age_years: 10,
        land_price_per_sqm: Some(95.0),
        building_cost_per_sqm: DEFAULT_BUILDING_COST_PER_SQM,
        location_factor: DEFAULT_LOCATION_FACTOR,
    }
}

#[test]
fn test_depreciation_loses_two_percent_per_year() {
    assert_eq!(depreciation_factor(0), 1.0);
    assert_eq!(depreciation_factor(10), 0.8);
    assert_eq!(depreciation_factor(25), 0.5);
}

#[test]
fn test_depreciation_floors_at_forty_percent() {
    // 40 years would naively be 0.2; the floor holds at 0.40.
    assert_eq!(depreciation_factor(40), 0.40);
    assert_eq!(depreciation_factor(100), 0.40);
}

#[test]
fn test_house_estimate_combines_land_and_building() {
    // land: 400 * 95 = 38,000
    // building: 200 * 220 * 0.8 = 35,200
    let result = estimate(&input(ValuationType::House));
    assert!((result.value - 73_200.0).abs() < 1e-9);
}

#[test]
fn test_land_kind_ignores_the_building() {
    let result = estimate(&input(ValuationType::Land));
    assert!((result.value - 38_000.0).abs() < 1e-9);
}

#[test]
fn test_missing_land_price_contributes_zero() {
    // No price row resolved: the land term is zero, the building stands.
    let mut no_price = input(ValuationType::Property);
    no_price.land_price_per_sqm = None;
    let result = estimate(&no_price);
    assert!((result.value - 35_200.0).abs() < 1e-9);
}

#[test]
fn test_location_factor_scales_the_total() {
    let mut scaled = input(ValuationType::House);
    scaled.location_factor = 1.5;
    let result = estimate(&scaled);
    assert!((result.value - 73_200.0 * 1.5).abs() < 1e-9);
}

#[test]
fn test_fee_tiers() {
    assert_eq!(estimate_fee(30_000.0, ValuationType::Property), 80.0);
    assert_eq!(estimate_fee(50_000.0, ValuationType::Property), 80.0);
    assert_eq!(estimate_fee(75_000.0, ValuationType::Property), 120.0);
    assert_eq!(estimate_fee(150_000.0, ValuationType::Property), 160.0);
    assert_eq!(estimate_fee(500_000.0, ValuationType::Property), 200.0);
}

#[test]
fn test_fee_kind_adjustments() {
    // Land shaves 20 off, a house adds 20.
    assert_eq!(estimate_fee(30_000.0, ValuationType::Land), 60.0);
    assert_eq!(estimate_fee(30_000.0, ValuationType::House), 100.0);
    assert_eq!(estimate_fee(500_000.0, ValuationType::Land), 180.0);
}

#[test]
fn test_fee_never_drops_below_the_floor() {
    // The lowest reachable fee is 80 - 20 = 60, still above the floor; the
    // floor guards the arithmetic all the same.
    assert!(estimate_fee(0.0, ValuationType::Land) >= 40.0);
}

#[test]
fn test_estimate_carries_its_fee() {
    let result = estimate(&input(ValuationType::House));
    // 73,200 sits in the 50k–100k tier: base 120, +20 for a house.
    assert_eq!(result.fee, 140.0);
}
