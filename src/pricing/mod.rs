pub mod cells;
pub mod ingest;

use serde::{Deserialize, Serialize};

/// Land-use category of a price lookup.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UseCategory {
    Housing,
    Commercial,
    Industrial,
    Agricultural,
}

impl UseCategory {
    /// Parse a lookup parameter. Accepts the English keys and the common
    /// Arabic labels; anything else is treated as "no category requested".
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "housing" | "residential" | "سكني" | "سكنية" => Some(UseCategory::Housing),
            "commercial" | "تجاري" | "تجارية" => Some(UseCategory::Commercial),
            "industrial" | "صناعي" | "صناعية" => Some(UseCategory::Industrial),
            "agricultural" | "زراعي" | "زراعية" => Some(UseCategory::Agricultural),
            _ => None,
        }
    }
}

/// The per-(wilaya, region) price columns, detached from their source table.
///
/// `legacy` is the single price-per-sqm field predating the four-category
/// breakdown, kept as the last fallback within a source.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceRow {
    pub housing: Option<f64>,
    pub commercial: Option<f64>,
    pub industrial: Option<f64>,
    pub agricultural: Option<f64>,
    pub legacy: Option<f64>,
}

impl PriceRow {
    pub fn is_empty(&self) -> bool {
        self.housing.is_none()
            && self.commercial.is_none()
            && self.industrial.is_none()
            && self.agricultural.is_none()
            && self.legacy.is_none()
    }

    fn category_price(&self, category: UseCategory) -> Option<f64> {
        match category {
            UseCategory::Housing => self.housing,
            UseCategory::Commercial => self.commercial,
            UseCategory::Industrial => self.industrial,
            UseCategory::Agricultural => self.agricultural,
        }
    }

    /// Resolve within this single source. With a requested category the
    /// order is: that category, the legacy field, then the category scan
    /// (housing, commercial, industrial, agricultural). Without one the
    /// scan runs first, then legacy.
    fn resolve(&self, category: Option<UseCategory>) -> Option<f64> {
        let scan = self
            .housing
            .or(self.commercial)
            .or(self.industrial)
            .or(self.agricultural);
        match category {
            Some(c) => self.category_price(c).or(self.legacy).or(scan),
            None => scan.or(self.legacy),
        }
    }
}

impl From<&crate::models::land_prices::Model> for PriceRow {
    fn from(m: &crate::models::land_prices::Model) -> Self {
        Self {
            housing: m.price_housing,
            commercial: m.price_commercial,
            industrial: m.price_industrial,
            agricultural: m.price_agricultural,
            legacy: m.price_per_sqm,
        }
    }
}

impl From<&crate::models::company_land_prices::Model> for PriceRow {
    fn from(m: &crate::models::company_land_prices::Model) -> Self {
        Self {
            housing: m.price_housing,
            commercial: m.price_commercial,
            industrial: m.price_industrial,
            agricultural: m.price_agricultural,
            legacy: m.price_per_sqm,
        }
    }
}

/// Resolve a price-per-sqm for one (wilaya, region) lookup.
///
/// Resolution is source-major: the company-scoped row always wins over the
/// public row regardless of which field inside it carries the price. `None`
/// means "no price available", which callers must keep distinct from 0.
pub fn resolve_price(
    company_row: Option<&PriceRow>,
    public_row: Option<&PriceRow>,
    category: Option<UseCategory>,
) -> Option<f64> {
    company_row
        .and_then(|row| row.resolve(category))
        .or_else(|| public_row.and_then(|row| row.resolve(category)))
}
