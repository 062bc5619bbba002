//! Reference valuation: land value from the resolved price table, building
//! value depreciated by age, and the tiered fee schedule. Companies see this
//! as guidance; the submitted valuation is always company-entered.

use serde::Serialize;

use crate::models::requests::ValuationType;

/// Replacement cost per built square meter, used when no market figure
/// exists for construction.
pub const DEFAULT_BUILDING_COST_PER_SQM: f64 = 220.0;

/// Per-region adjustment multiplier. Present in the formula but currently a
/// flat 1.0 everywhere.
pub const DEFAULT_LOCATION_FACTOR: f64 = 1.0;

/// A building never depreciates below 40% of its replacement cost.
const MIN_DEPRECIATION: f64 = 0.40;
const DEPRECIATION_PER_YEAR: f64 = 0.02;

const FEE_FLOOR: f64 = 40.0;

#[derive(Debug, Clone, Copy)]
pub struct EstimateInput {
    pub kind: ValuationType,
    pub land_area: f64,
    pub building_area: f64,
    pub building_age_years: u32,
    /// Resolved land price; `None` means the location has no price row and
    /// the land contributes nothing to the estimate.
    pub land_price_per_sqm: Option<f64>,
    pub building_cost_per_sqm: f64,
    pub location_factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub value: f64,
    pub fee: f64,
}

pub fn depreciation_factor(building_age_years: u32) -> f64 {
    (1.0 - building_age_years as f64 * DEPRECIATION_PER_YEAR).max(MIN_DEPRECIATION)
}

pub fn estimate(input: &EstimateInput) -> Estimate {
    let land_value = input.land_area * input.land_price_per_sqm.unwrap_or(0.0);

    let building_value = match input.kind {
        ValuationType::Land => 0.0,
        ValuationType::Property | ValuationType::House => {
            input.building_area
                * input.building_cost_per_sqm
                * depreciation_factor(input.building_age_years)
        }
    };

    let value = (land_value + building_value) * input.location_factor;

    Estimate {
        value,
        fee: estimate_fee(value, input.kind),
    }
}

/// Tiered fee on the estimated value, nudged per kind, floored at 40.
pub fn estimate_fee(estimated_value: f64, kind: ValuationType) -> f64 {
    let base: f64 = if estimated_value <= 50_000.0 {
        80.0
    } else if estimated_value <= 100_000.0 {
        120.0
    } else if estimated_value <= 200_000.0 {
        160.0
    } else {
        200.0
    };

    let adjusted = match kind {
        ValuationType::Land => base - 20.0,
        ValuationType::House => base + 20.0,
        ValuationType::Property => base,
    };

    adjusted.max(FEE_FLOOR)
}
