//! Persistence for the public and company-scoped land price tables, plus
//! the cached resolution path used by lookups and offer matching.

use sea_orm::*;
use uuid::Uuid;

use crate::cache::PriceCache;
use crate::models::{company_land_prices, land_prices};
use crate::pricing::{self, PriceRow, UseCategory};
use crate::pricing::ingest::ImportedRow;

pub async fn get_public_row(
    db: &DatabaseConnection,
    wilaya: &str,
    region: &str,
) -> Result<Option<land_prices::Model>, DbErr> {
    land_prices::Entity::find()
        .filter(land_prices::Column::Wilaya.eq(wilaya))
        .filter(land_prices::Column::Region.eq(region))
        .one(db)
        .await
}

pub async fn get_company_row(
    db: &DatabaseConnection,
    company_id: Uuid,
    wilaya: &str,
    region: &str,
) -> Result<Option<company_land_prices::Model>, DbErr> {
    company_land_prices::Entity::find()
        .filter(company_land_prices::Column::CompanyId.eq(company_id))
        .filter(company_land_prices::Column::Wilaya.eq(wilaya))
        .filter(company_land_prices::Column::Region.eq(region))
        .one(db)
        .await
}

pub async fn list_public(db: &DatabaseConnection) -> Result<Vec<land_prices::Model>, DbErr> {
    land_prices::Entity::find()
        .order_by_asc(land_prices::Column::Wilaya)
        .order_by_asc(land_prices::Column::Region)
        .all(db)
        .await
}

/// Upsert one imported row into the public table.
pub async fn upsert_public(db: &DatabaseConnection, row: &ImportedRow) -> Result<(), DbErr> {
    let now = chrono::Utc::now();
    if let Some(existing) = get_public_row(db, &row.wilaya, &row.region).await? {
        let mut active: land_prices::ActiveModel = existing.into();
        active.price_housing = Set(row.prices.housing);
        active.price_commercial = Set(row.prices.commercial);
        active.price_industrial = Set(row.prices.industrial);
        active.price_agricultural = Set(row.prices.agricultural);
        active.price_per_sqm = Set(row.prices.legacy);
        active.updated_at = Set(now);
        active.update(db).await?;
        return Ok(());
    }

    let new_row = land_prices::ActiveModel {
        id: Set(Uuid::new_v4()),
        wilaya: Set(row.wilaya.clone()),
        region: Set(row.region.clone()),
        price_housing: Set(row.prices.housing),
        price_commercial: Set(row.prices.commercial),
        price_industrial: Set(row.prices.industrial),
        price_agricultural: Set(row.prices.agricultural),
        price_per_sqm: Set(row.prices.legacy),
        updated_at: Set(now),
    };
    new_row.insert(db).await?;
    Ok(())
}

/// Upsert one imported row into a company's private table.
pub async fn upsert_company(
    db: &DatabaseConnection,
    company_id: Uuid,
    row: &ImportedRow,
) -> Result<(), DbErr> {
    let now = chrono::Utc::now();
    if let Some(existing) = get_company_row(db, company_id, &row.wilaya, &row.region).await? {
        let mut active: company_land_prices::ActiveModel = existing.into();
        active.price_housing = Set(row.prices.housing);
        active.price_commercial = Set(row.prices.commercial);
        active.price_industrial = Set(row.prices.industrial);
        active.price_agricultural = Set(row.prices.agricultural);
        active.price_per_sqm = Set(row.prices.legacy);
        active.updated_at = Set(now);
        active.update(db).await?;
        return Ok(());
    }

    let new_row = company_land_prices::ActiveModel {
        id: Set(Uuid::new_v4()),
        company_id: Set(company_id),
        wilaya: Set(row.wilaya.clone()),
        region: Set(row.region.clone()),
        price_housing: Set(row.prices.housing),
        price_commercial: Set(row.prices.commercial),
        price_industrial: Set(row.prices.industrial),
        price_agricultural: Set(row.prices.agricultural),
        price_per_sqm: Set(row.prices.legacy),
        updated_at: Set(now),
    };
    new_row.insert(db).await?;
    Ok(())
}

async fn cached_row(
    db: &DatabaseConnection,
    cache: &PriceCache,
    company_id: Option<Uuid>,
    wilaya: &str,
    region: &str,
) -> Result<Option<PriceRow>, DbErr> {
    if let Some(hit) = cache.get(company_id, wilaya, region).await {
        return Ok(hit);
    }

    let row = match company_id {
        Some(id) => get_company_row(db, id, wilaya, region)
            .await?
            .map(|m| PriceRow::from(&m)),
        None => get_public_row(db, wilaya, region)
            .await?
            .map(|m| PriceRow::from(&m)),
    };

    cache.insert(company_id, wilaya, region, row).await;
    Ok(row)
}

/// Resolve a price-per-sqm for a location, preferring the company-scoped
/// table when a company scope is given. `None` means "no price available",
/// which callers must not conflate with 0.
pub async fn resolve_price(
    db: &DatabaseConnection,
    cache: &PriceCache,
    company_id: Option<Uuid>,
    wilaya: &str,
    region: &str,
    category: Option<UseCategory>,
) -> Result<Option<f64>, DbErr> {
    let company_row = match company_id {
        Some(id) => cached_row(db, cache, Some(id), wilaya, region).await?,
        None => None,
    };
    let public_row = cached_row(db, cache, None, wilaya, region).await?;

    Ok(pricing::resolve_price(
        company_row.as_ref(),
        public_row.as_ref(),
        category,
    ))
}
