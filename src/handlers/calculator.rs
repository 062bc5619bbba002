//! The loan affordability calculator. Read-side only — nothing here touches
//! lifecycle state.

use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::banks as bank_db;
use crate::db::loan_policies as policy_db;
use crate::finance;
use crate::handlers::db_error_response;
use crate::models::loan_policies::LoanType;

#[derive(Debug, Clone, Deserialize)]
pub struct MaxLoanQuery {
    pub income: f64,
    pub annual_rate: Option<f64>,
    pub years: Option<u32>,
    pub max_ratio: Option<f64>,
    /// When set, missing rate/years/ratio are filled from this bank's
    /// published policy for `loan_type`.
    pub bank_slug: Option<String>,
    pub loan_type: Option<LoanType>,
}

/// GET /api/calculator/max-loan — the maximum principal affordable at the
/// given income, rate, term, and payment-to-income ratio.
pub async fn max_loan(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<MaxLoanQuery>,
) -> impl Responder {
    let input = query.into_inner();

    let mut annual_rate = input.annual_rate;
    let mut years = input.years;
    let mut max_ratio = input.max_ratio;

    if let Some(slug) = &input.bank_slug {
        let bank = match bank_db::get_profile_by_slug(db.get_ref(), slug).await {
            Ok(Some(bank)) => bank,
            Ok(None) => {
                return HttpResponse::NotFound().json(serde_json::json!({
                    "error": "bank not found",
                }));
            }
            Err(e) => return db_error_response(e),
        };
        let loan_type = input.loan_type.unwrap_or(LoanType::Housing);
        let policy = match policy_db::list_for_bank(db.get_ref(), bank.user_id, Some(loan_type))
            .await
        {
            Ok(mut policies) => policies.pop(),
            Err(e) => return db_error_response(e),
        };
        if let Some(policy) = policy {
            annual_rate = annual_rate.or(Some(policy.default_annual_rate));
            years = years.or(Some(policy.default_years.max(0) as u32));
            max_ratio = max_ratio.or(Some(policy.max_ratio));
        }
    }

    let (Some(annual_rate), Some(years), Some(max_ratio)) = (annual_rate, years, max_ratio)
    else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "annual_rate, years and max_ratio are required (directly or via a bank policy)",
        }));
    };

    if !input.income.is_finite() || input.income < 0.0 {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "income must be a non-negative number",
        }));
    }
    if !annual_rate.is_finite() || annual_rate < 0.0 {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "the annual rate must be a non-negative number",
        }));
    }
    if !(max_ratio > 0.0 && max_ratio <= 1.0) {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "max_ratio must be between 0 and 1",
        }));
    }

    let capacity = finance::max_loan(input.income, annual_rate, years, max_ratio);
    HttpResponse::Ok().json(capacity)
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentQuery {
    pub principal: f64,
    pub annual_rate: f64,
    pub months: u32,
}

/// GET /api/calculator/payment — monthly payment, total interest, and total
/// cost for a principal over a tenure.
pub async fn payment(_user: AuthenticatedUser, query: web::Query<PaymentQuery>) -> impl Responder {
    match finance::monthly_payment(query.principal, query.annual_rate, query.months) {
        Some(schedule) => HttpResponse::Ok().json(schedule),
        None => HttpResponse::BadRequest().json(serde_json::json!({
            "error": "principal, rate and tenure must all be positive",
        })),
    }
}
