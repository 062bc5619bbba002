//! Discovery endpoints: directories, the bank-matching engine (direct
//! amount and estimator modes), approvals, and loan policies.

use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::authorization::require_role;
use crate::auth::middleware::AuthenticatedUser;
use crate::cache::PriceCache;
use crate::db::approvals as approval_db;
use crate::db::banks as bank_db;
use crate::db::companies as company_db;
use crate::db::land_prices as price_db;
use crate::db::loan_policies as policy_db;
use crate::db::users as user_db;
use crate::finance::estimate::{
    DEFAULT_BUILDING_COST_PER_SQM, DEFAULT_LOCATION_FACTOR, EstimateInput, estimate,
};
use crate::handlers::db_error_response;
use crate::matching;
use crate::models::approvals::ApproveCompany;
use crate::models::banks::CertifiedCompany;
use crate::models::loan_policies::{LoanPolicyQuery, UpsertLoanPolicy};
use crate::models::requests::ValuationType;
use crate::models::users::Role;
use crate::pricing::UseCategory;

/// GET /api/companies — the public company directory.
pub async fn get_companies(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    match company_db::directory(db.get_ref()).await {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(e) => db_error_response(e),
    }
}

/// GET /api/banks — the public bank directory.
pub async fn get_banks(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    match bank_db::directory(db.get_ref()).await {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(e) => db_error_response(e),
    }
}

/// One approved company with its resolved effective limit.
struct ApprovedCompany {
    company_id: Uuid,
    name: String,
    effective_limit: f64,
}

/// Companies approved by the bank that also state a credit limit somewhere.
/// A company with no limit at all is never offered — capacity it never
/// declared is not promised.
async fn approved_with_limits(
    db: &DatabaseConnection,
    bank_user_id: Uuid,
) -> Result<Vec<ApprovedCompany>, sea_orm::DbErr> {
    let approvals = approval_db::approvals_for_bank(db, bank_user_id).await?;
    let company_ids: Vec<Uuid> = approvals.iter().map(|a| a.company_id).collect();
    let users = user_db::get_users_by_ids(db, company_ids.clone()).await?;
    let profiles = company_db::profiles_by_user_ids(db, company_ids).await?;

    Ok(approvals
        .into_iter()
        .filter_map(|approval| {
            let profile_limit = profiles
                .get(&approval.company_id)
                .and_then(|p| p.credit_limit);
            let effective_limit =
                matching::effective_limit(approval.credit_limit, profile_limit)?;
            let name = users
                .iter()
                .find(|u| u.id == approval.company_id)
                .map(|u| u.name.clone())?;
            Some(ApprovedCompany {
                company_id: approval.company_id,
                name,
                effective_limit,
            })
        })
        .collect())
}

#[derive(Debug, Clone, Deserialize)]
pub struct AmountQuery {
    pub amount: Option<f64>,
}

/// GET /api/banks/{slug}/companies?amount= — direct-amount matching mode:
/// companies approved by the bank whose effective limit covers the amount,
/// highest limit first.
pub async fn certified_companies(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
    query: web::Query<AmountQuery>,
) -> impl Responder {
    let bank = match bank_db::get_profile_by_slug(db.get_ref(), &path.into_inner()).await {
        Ok(Some(bank)) => bank,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": "bank not found",
            }));
        }
        Err(e) => return db_error_response(e),
    };

    let mut companies = match approved_with_limits(db.get_ref(), bank.user_id).await {
        Ok(list) => list,
        Err(e) => return db_error_response(e),
    };

    if let Some(amount) = query.amount {
        companies.retain(|c| matching::covers(c.effective_limit, amount));
    }
    companies.sort_by(|a, b| matching::by_limit_desc(a.effective_limit, b.effective_limit));

    let response: Vec<CertifiedCompany> = companies
        .into_iter()
        .map(|c| CertifiedCompany {
            company_id: c.company_id,
            name: c.name,
            effective_limit: c.effective_limit,
            estimated_value: None,
            estimated_fee: None,
        })
        .collect();

    HttpResponse::Ok().json(response)
}

#[derive(Debug, Clone, Deserialize)]
pub struct OffersQuery {
    pub wilaya: String,
    pub region: String,
    pub category: Option<String>,
    pub kind: Option<ValuationType>,
    pub land_area: f64,
    pub building_area: Option<f64>,
    pub building_age: Option<u32>,
}

/// GET /api/banks/{slug}/offers — estimator matching mode: each approved
/// company gets an estimate from its own price table (falling back to the
/// public one), companies whose estimate exceeds their limit drop out, and
/// results are ordered by estimated value with unresolved estimates last.
pub async fn certified_offers(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<PriceCache>,
    path: web::Path<String>,
    query: web::Query<OffersQuery>,
) -> impl Responder {
    let bank = match bank_db::get_profile_by_slug(db.get_ref(), &path.into_inner()).await {
        Ok(Some(bank)) => bank,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": "bank not found",
            }));
        }
        Err(e) => return db_error_response(e),
    };

    let companies = match approved_with_limits(db.get_ref(), bank.user_id).await {
        Ok(list) => list,
        Err(e) => return db_error_response(e),
    };

    let input = query.into_inner();
    let kind = input.kind.unwrap_or(ValuationType::Property);
    let category = input.category.as_deref().and_then(UseCategory::parse);

    let mut offers: Vec<CertifiedCompany> = Vec::with_capacity(companies.len());
    for company in companies {
        let price = match price_db::resolve_price(
            db.get_ref(),
            cache.get_ref(),
            Some(company.company_id),
            &input.wilaya,
            &input.region,
            category,
        )
        .await
        {
            Ok(price) => price,
            Err(e) => return db_error_response(e),
        };

        // No price row anywhere means no estimate, not an estimate of 0.
        let computed = price.map(|price_per_sqm| {
            estimate(&EstimateInput {
                kind,
                land_area: input.land_area,
                building_area: input.building_area.unwrap_or(0.0),
                building_age_years: input.building_age.unwrap_or(0),
                land_price_per_sqm: Some(price_per_sqm),
                building_cost_per_sqm: DEFAULT_BUILDING_COST_PER_SQM,
                location_factor: DEFAULT_LOCATION_FACTOR,
            })
        });

        if let Some(est) = computed {
            if !matching::covers(company.effective_limit, est.value) {
                continue;
            }
        }

        offers.push(CertifiedCompany {
            company_id: company.company_id,
            name: company.name,
            effective_limit: company.effective_limit,
            estimated_value: computed.map(|e| e.value),
            estimated_fee: computed.map(|e| e.fee),
        });
    }

    offers.sort_by(|a, b| matching::by_estimate_desc(a.estimated_value, b.estimated_value));

    HttpResponse::Ok().json(offers)
}

/// GET /api/banks/{slug}/policies?loan_type= — the bank's published loan
/// policies, used by the affordability calculator to pre-fill defaults.
pub async fn get_policies(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
    query: web::Query<LoanPolicyQuery>,
) -> impl Responder {
    let bank = match bank_db::get_profile_by_slug(db.get_ref(), &path.into_inner()).await {
        Ok(Some(bank)) => bank,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": "bank not found",
            }));
        }
        Err(e) => return db_error_response(e),
    };

    match policy_db::list_for_bank(db.get_ref(), bank.user_id, query.loan_type).await {
        Ok(policies) => HttpResponse::Ok().json(policies),
        Err(e) => db_error_response(e),
    }
}

/// POST /api/banks/policies — the authenticated bank upserts one of its own
/// loan policies.
pub async fn upsert_policy(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<UpsertLoanPolicy>,
) -> impl Responder {
    if let Err(resp) = require_role(&user.0, Role::Bank) {
        return resp;
    }
    let input = body.into_inner();

    if !(input.max_ratio > 0.0 && input.max_ratio <= 1.0) {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "max_ratio must be between 0 and 1",
        }));
    }
    if input.default_years < 0 || input.default_annual_rate < 0.0 {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "years and rate must not be negative",
        }));
    }

    match policy_db::upsert_policy(db.get_ref(), user.0.id, input).await {
        Ok(policy) => HttpResponse::Ok().json(policy),
        Err(e) => db_error_response(e),
    }
}

/// POST /api/approvals — the authenticated bank approves a company, with an
/// optional credit-limit override for this relationship.
pub async fn approve_company(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<ApproveCompany>,
) -> impl Responder {
    if let Err(resp) = require_role(&user.0, Role::Bank) {
        return resp;
    }
    let input = body.into_inner();

    if let Some(limit) = input.credit_limit {
        if !limit.is_finite() || limit < 0.0 {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "the credit limit must be a non-negative number",
            }));
        }
    }

    match user_db::get_user_with_role(db.get_ref(), input.company_id, Role::Company).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "the selected company does not exist",
            }));
        }
        Err(e) => return db_error_response(e),
    }

    match approval_db::upsert_approval(db.get_ref(), input.company_id, user.0.id, input.credit_limit)
        .await
    {
        Ok(approval) => HttpResponse::Ok().json(approval),
        Err(e) => db_error_response(e),
    }
}

/// DELETE /api/approvals/{company_id} — the bank withdraws its approval.
pub async fn remove_approval(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    if let Err(resp) = require_role(&user.0, Role::Bank) {
        return resp;
    }

    match approval_db::delete_approval(db.get_ref(), path.into_inner(), user.0.id).await {
        Ok(0) => HttpResponse::NotFound().json(serde_json::json!({
            "error": "no approval found for this company",
        })),
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({ "removed": true })),
        Err(e) => db_error_response(e),
    }
}
