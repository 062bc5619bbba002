use moka::future::Cache;
use std::time::Duration;
use uuid::Uuid;

use crate::pricing::PriceRow;

/// In-process TTL cache for resolved land-price rows.
///
/// Price lookups sit on the hot discovery path (every offers-mode query
/// resolves one row per candidate company) while the underlying tables only
/// change on an admin import, so entries live for a few minutes and the
/// whole cache is flushed after every import. Negative results are cached
/// too — an absent row is as common as a present one.
#[derive(Clone)]
pub struct PriceCache {
    rows: Cache<String, Option<PriceRow>>,
}

impl PriceCache {
    pub fn new() -> Self {
        Self {
            rows: Cache::builder()
                .time_to_live(Duration::from_secs(300))
                .max_capacity(10_000)
                .build(),
        }
    }

    fn key(company_id: Option<Uuid>, wilaya: &str, region: &str) -> String {
        match company_id {
            Some(id) => format!("company:{id}:{wilaya}:{region}"),
            None => format!("public:{wilaya}:{region}"),
        }
    }

    pub async fn get(
        &self,
        company_id: Option<Uuid>,
        wilaya: &str,
        region: &str,
    ) -> Option<Option<PriceRow>> {
        self.rows.get(&Self::key(company_id, wilaya, region)).await
    }

    pub async fn insert(
        &self,
        company_id: Option<Uuid>,
        wilaya: &str,
        region: &str,
        row: Option<PriceRow>,
    ) {
        self.rows
            .insert(Self::key(company_id, wilaya, region), row)
            .await;
    }

    /// Flush everything after an import touched the tables.
    pub fn invalidate_all(&self) {
        self.rows.invalidate_all();
    }
}

impl Default for PriceCache {
    fn default() -> Self {
        Self::new()
    }
}
