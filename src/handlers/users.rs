use actix_web::{HttpResponse, Responder, web};
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;

use crate::auth::authorization::require_role;
use crate::auth::middleware::AuthenticatedUser;
use crate::db::banks as bank_db;
use crate::db::companies as company_db;
use crate::db::users as user_db;
use crate::handlers::db_error_response;
use crate::models::banks::CreateBankAccount;
use crate::models::companies::CreateCompanyAccount;
use crate::models::users::{Role, UserResponse};

#[derive(Debug, Clone, Deserialize)]
pub struct UserListQuery {
    pub role: Option<Role>,
}

/// GET /api/users?role= — admin listing of marketplace accounts.
pub async fn get_users(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<UserListQuery>,
) -> impl Responder {
    if let Err(resp) = require_role(&user.0, Role::Admin) {
        return resp;
    }

    let result = match query.role {
        Some(role) => user_db::list_by_role(db.get_ref(), role).await,
        None => user_db::list_all(db.get_ref()).await,
    };

    match result {
        Ok(users) => HttpResponse::Ok().json(
            users
                .into_iter()
                .map(UserResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => db_error_response(e),
    }
}

/// POST /api/admin/banks — provision a bank account: the user row and its
/// profile (slug included) land together or not at all.
pub async fn add_bank(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateBankAccount>,
) -> impl Responder {
    if let Err(resp) = require_role(&user.0, Role::Admin) {
        return resp;
    }
    let input = body.into_inner();

    if input.name.trim().is_empty() || !input.email.contains('@') {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "a name and a valid email are required",
        }));
    }
    if input.slug.trim().is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "a slug is required",
        }));
    }

    let txn = match db.begin().await {
        Ok(txn) => txn,
        Err(e) => return db_error_response(e),
    };

    let bank_user = match user_db::insert_user(
        &txn,
        input.name.trim().to_string(),
        input.email.trim().to_string(),
        input.phone.clone(),
        Role::Bank,
    )
    .await
    {
        Ok(user) => user,
        Err(e) => return db_error_response(e),
    };

    if let Err(e) = bank_db::insert_profile(
        &txn,
        bank_user.id,
        input.slug.trim().to_lowercase(),
        input.phone,
    )
    .await
    {
        return db_error_response(e);
    }

    match txn.commit().await {
        Ok(()) => HttpResponse::Created().json(UserResponse::from(bank_user)),
        Err(e) => db_error_response(e),
    }
}

/// POST /api/admin/companies — provision a valuation company account with
/// its profile (and optional profile-wide credit limit).
pub async fn add_company(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreateCompanyAccount>,
) -> impl Responder {
    if let Err(resp) = require_role(&user.0, Role::Admin) {
        return resp;
    }
    let input = body.into_inner();

    if input.name.trim().is_empty() || !input.email.contains('@') {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "a name and a valid email are required",
        }));
    }
    if let Some(limit) = input.credit_limit {
        if !limit.is_finite() || limit < 0.0 {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "the credit limit must be a non-negative number",
            }));
        }
    }

    let txn = match db.begin().await {
        Ok(txn) => txn,
        Err(e) => return db_error_response(e),
    };

    let company_user = match user_db::insert_user(
        &txn,
        input.name.trim().to_string(),
        input.email.trim().to_string(),
        input.phone.clone(),
        Role::Company,
    )
    .await
    {
        Ok(user) => user,
        Err(e) => return db_error_response(e),
    };

    if let Err(e) = company_db::insert_profile(
        &txn,
        company_user.id,
        input.address,
        input.phone,
        input.credit_limit,
    )
    .await
    {
        return db_error_response(e);
    }

    match txn.commit().await {
        Ok(()) => HttpResponse::Created().json(UserResponse::from(company_user)),
        Err(e) => db_error_response(e),
    }
}
