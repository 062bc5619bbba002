//! Loan math: the affordability ceiling (annuity formula solved for the
//! principal) and the forward payment schedule shown next to bank offers.

pub mod estimate;

use serde::Serialize;

/// Result of an affordability computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanCapacity {
    pub max_principal: f64,
    pub max_monthly_payment: f64,
}

/// Maximum principal a client can borrow given a payment ceiling derived
/// from income and the payment-to-income ratio.
///
/// Zero term yields a zero principal; a zero rate degenerates to the linear
/// case; a numerically degenerate denominator yields 0 rather than dividing.
pub fn max_loan(income: f64, annual_rate_percent: f64, years: u32, max_ratio: f64) -> LoanCapacity {
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let months = years * 12;
    let max_payment = (income * max_ratio).max(0.0);

    if months == 0 {
        return LoanCapacity {
            max_principal: 0.0,
            max_monthly_payment: max_payment,
        };
    }

    let principal = if monthly_rate == 0.0 {
        max_payment * months as f64
    } else {
        let growth = (1.0 + monthly_rate).powi(months as i32);
        let denominator = monthly_rate * growth;
        if denominator == 0.0 {
            0.0
        } else {
            max_payment * ((growth - 1.0) / denominator)
        }
    };

    LoanCapacity {
        max_principal: principal.max(0.0),
        max_monthly_payment: max_payment,
    }
}

/// Forward schedule for a known principal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentSchedule {
    pub monthly: f64,
    pub total_interest: f64,
    pub total_cost: f64,
}

/// Monthly payment, total interest, and total cost for a principal over a
/// tenure in months. `None` when any input makes the annuity undefined.
pub fn monthly_payment(
    principal: f64,
    annual_rate_percent: f64,
    months: u32,
) -> Option<PaymentSchedule> {
    if principal <= 0.0 || annual_rate_percent <= 0.0 || months == 0 {
        return None;
    }

    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let growth = (1.0 + monthly_rate).powi(months as i32);
    let monthly = principal * monthly_rate * growth / (growth - 1.0);
    let total_cost = monthly * months as f64;

    Some(PaymentSchedule {
        monthly,
        total_interest: total_cost - principal,
        total_cost,
    })
}
