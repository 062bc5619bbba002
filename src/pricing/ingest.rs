//! Spreadsheet ingestion: map a variable-order header row onto the canonical
//! price columns via a synonym table, then extract (wilaya, region, prices)
//! tuples. CSV/encoding handling happens upstream — rows arrive as strings.

use super::cells::parse_price_cell;
use super::{PriceRow, UseCategory};

/// Accepted labels per canonical field, Arabic and English, matched after
/// `normalize_label`. Extending a synonym set is a data change, not a code
/// change.
const WILAYA_LABELS: &[&str] = &["wilaya", "wilayah", "state", "ولاية", "محافظة"];
const REGION_LABELS: &[&str] = &["region", "area", "district", "منطقة", "حي"];
const HOUSING_LABELS: &[&str] = &["housing", "residential", "سكني", "سكنية", "سكن"];
const COMMERCIAL_LABELS: &[&str] = &["commercial", "تجاري", "تجارية"];
const INDUSTRIAL_LABELS: &[&str] = &["industrial", "صناعي", "صناعية"];
const AGRICULTURAL_LABELS: &[&str] = &["agricultural", "agriculture", "زراعي", "زراعية"];
const LEGACY_PRICE_LABELS: &[&str] = &[
    "price",
    "price per sqm",
    "price_per_sqm",
    "سعر",
    "سعر المتر",
    "سعر المتر المربع",
];

/// Column indices resolved from a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetMapping {
    pub wilaya: usize,
    pub region: usize,
    pub categories: Vec<(UseCategory, usize)>,
    pub legacy: Option<usize>,
}

/// One extracted data row, ready for upsert.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedRow {
    pub wilaya: String,
    pub region: String,
    pub prices: PriceRow,
}

/// Lowercase, trim, collapse whitespace, drop tatweel, and strip the Arabic
/// definite article so "الولاية" and "ولاية" match the same label.
fn normalize_label(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let cleaned: String = lowered.chars().filter(|c| *c != '\u{0640}').collect();
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .strip_prefix("ال")
        .map(str::to_owned)
        .unwrap_or(collapsed)
}

fn find_column(headers: &[String], labels: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| labels.contains(&normalize_label(h).as_str()))
}

/// Resolve the header row onto the canonical columns.
///
/// Wilaya, region, and at least one price column are required; everything
/// else is optional and order-independent.
pub fn map_headers(headers: &[String]) -> Result<SheetMapping, String> {
    let wilaya = find_column(headers, WILAYA_LABELS)
        .ok_or_else(|| "no wilaya column recognized in the header row".to_string())?;
    let region = find_column(headers, REGION_LABELS)
        .ok_or_else(|| "no region column recognized in the header row".to_string())?;

    let mut categories = Vec::new();
    for (category, labels) in [
        (UseCategory::Housing, HOUSING_LABELS),
        (UseCategory::Commercial, COMMERCIAL_LABELS),
        (UseCategory::Industrial, INDUSTRIAL_LABELS),
        (UseCategory::Agricultural, AGRICULTURAL_LABELS),
    ] {
        if let Some(idx) = find_column(headers, labels) {
            categories.push((category, idx));
        }
    }
    let legacy = find_column(headers, LEGACY_PRICE_LABELS);

    if categories.is_empty() && legacy.is_none() {
        return Err("no price column recognized in the header row".to_string());
    }

    Ok(SheetMapping {
        wilaya,
        region,
        categories,
        legacy,
    })
}

fn cell<'a>(row: &'a [String], idx: usize) -> &'a str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Extract importable rows. Rows without a wilaya, without a region, or with
/// no parseable price at all are skipped and counted, never fatal.
pub fn extract_rows(mapping: &SheetMapping, rows: &[Vec<String>]) -> (Vec<ImportedRow>, usize) {
    let mut imported = Vec::new();
    let mut skipped = 0usize;

    for row in rows {
        let wilaya = cell(row, mapping.wilaya).trim();
        let region = cell(row, mapping.region).trim();
        if wilaya.is_empty() || region.is_empty() {
            skipped += 1;
            continue;
        }

        let mut prices = PriceRow::default();
        for (category, idx) in &mapping.categories {
            let value = parse_price_cell(cell(row, *idx));
            match category {
                UseCategory::Housing => prices.housing = value,
                UseCategory::Commercial => prices.commercial = value,
                UseCategory::Industrial => prices.industrial = value,
                UseCategory::Agricultural => prices.agricultural = value,
            }
        }
        if let Some(idx) = mapping.legacy {
            prices.legacy = parse_price_cell(cell(row, idx));
        }

        if prices.is_empty() {
            skipped += 1;
            continue;
        }

        imported.push(ImportedRow {
            wilaya: wilaya.to_string(),
            region: region.to_string(),
            prices,
        });
    }

    (imported, skipped)
}
