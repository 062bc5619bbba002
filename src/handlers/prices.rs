//! Land price lookup and spreadsheet imports. Import rows arrive as JSON
//! (header row + data rows); header matching and cell parsing live in
//! `crate::pricing`.

use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;

use crate::auth::authorization::require_role;
use crate::auth::middleware::AuthenticatedUser;
use crate::cache::PriceCache;
use crate::db::land_prices as price_db;
use crate::handlers::db_error_response;
use crate::models::land_prices::{PriceImport, PriceImportSummary, PriceLookupQuery};
use crate::models::users::Role;
use crate::pricing::{UseCategory, ingest};

/// GET /api/prices — resolve a price-per-sqm for one (wilaya, region)
/// tuple, optionally scoped to a company and a use category. "No price
/// available" is a 404, never a zero.
pub async fn lookup(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<PriceCache>,
    query: web::Query<PriceLookupQuery>,
) -> impl Responder {
    let input = query.into_inner();
    let category = input.category.as_deref().and_then(UseCategory::parse);

    match price_db::resolve_price(
        db.get_ref(),
        cache.get_ref(),
        input.company_id,
        input.wilaya.trim(),
        input.region.trim(),
        category,
    )
    .await
    {
        Ok(Some(price)) => HttpResponse::Ok().json(serde_json::json!({
            "wilaya": input.wilaya.trim(),
            "region": input.region.trim(),
            "price_per_sqm": price,
        })),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": "no price available for this location",
        })),
        Err(e) => db_error_response(e),
    }
}

/// GET /api/admin/land-prices — the full public table.
pub async fn list_public(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    if let Err(resp) = require_role(&user.0, Role::Admin) {
        return resp;
    }

    match price_db::list_public(db.get_ref()).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => db_error_response(e),
    }
}

/// POST /api/admin/land-prices/import — upsert the public table from a
/// pasted spreadsheet. Unparseable rows are skipped and counted, never
/// fatal.
pub async fn import_public(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<PriceCache>,
    body: web::Json<PriceImport>,
) -> impl Responder {
    if let Err(resp) = require_role(&user.0, Role::Admin) {
        return resp;
    }
    let input = body.into_inner();

    let mapping = match ingest::map_headers(&input.headers) {
        Ok(mapping) => mapping,
        Err(msg) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": msg }));
        }
    };
    let (rows, skipped) = ingest::extract_rows(&mapping, &input.rows);

    let imported = rows.len();
    for row in &rows {
        if let Err(e) = price_db::upsert_public(db.get_ref(), row).await {
            return db_error_response(e);
        }
    }
    cache.invalidate_all();

    if skipped > 0 {
        tracing::warn!("price import skipped {skipped} rows");
    }
    HttpResponse::Ok().json(PriceImportSummary { imported, skipped })
}

/// POST /api/company/land-prices/import — same import, into the
/// authenticated company's private table.
pub async fn import_company(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<PriceCache>,
    body: web::Json<PriceImport>,
) -> impl Responder {
    if let Err(resp) = require_role(&user.0, Role::Company) {
        return resp;
    }
    let input = body.into_inner();

    let mapping = match ingest::map_headers(&input.headers) {
        Ok(mapping) => mapping,
        Err(msg) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": msg }));
        }
    };
    let (rows, skipped) = ingest::extract_rows(&mapping, &input.rows);

    let imported = rows.len();
    for row in &rows {
        if let Err(e) = price_db::upsert_company(db.get_ref(), user.0.id, row).await {
            return db_error_response(e);
        }
    }
    cache.invalidate_all();

    HttpResponse::Ok().json(PriceImportSummary { imported, skipped })
}
