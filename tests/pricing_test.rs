//! Tests for price resolution (company-over-public precedence, category and
//! legacy fallbacks), spreadsheet cell parsing (Arabic digits, dashes,
//! ranges), and header synonym matching.
//!
//! Run with: `cargo test --test pricing_test`

use taqyeem_backend::pricing::cells::parse_price_cell;
use taqyeem_backend::pricing::ingest::{extract_rows, map_headers};
use taqyeem_backend::pricing::{PriceRow, UseCategory, resolve_price};

fn row(
    housing: Option<f64>,
    commercial: Option<f64>,
    industrial: Option<f64>,
    agricultural: Option<f64>,
    legacy: Option<f64>,
) -> PriceRow {
    PriceRow {
        housing,
        commercial,
        industrial,
        agricultural,
        legacy,
    }
}

// ── Resolution ladder ──

#[test]
fn test_company_category_beats_public_category() {
    // wilaya "مسقط", region "بوشر": company housing 95, public housing 80.
    let company = row(Some(95.0), None, None, None, None);
    let public = row(Some(80.0), None, None, None, None);

    let price = resolve_price(Some(&company), Some(&public), Some(UseCategory::Housing));
    assert_eq!(price, Some(95.0));
}

#[test]
fn test_company_legacy_beats_public_category() {
    // The company row only carries the legacy single price, the public row
    // has the exact category — the company source still wins.
    let company = row(None, None, None, None, Some(70.0));
    let public = row(Some(80.0), None, None, None, None);

    let price = resolve_price(Some(&company), Some(&public), Some(UseCategory::Housing));
    assert_eq!(price, Some(70.0));
}

#[test]
fn test_public_row_used_when_no_company_row() {
    let public = row(None, Some(55.0), None, None, None);
    let price = resolve_price(None, Some(&public), Some(UseCategory::Commercial));
    assert_eq!(price, Some(55.0));
}

#[test]
fn test_category_falls_back_to_legacy_within_source() {
    let public = row(None, None, None, None, Some(42.0));
    let price = resolve_price(None, Some(&public), Some(UseCategory::Industrial));
    assert_eq!(price, Some(42.0));
}

#[test]
fn test_no_category_scans_in_priority_order() {
    // housing → commercial → industrial → agricultural, then legacy.
    let public = row(None, Some(60.0), Some(30.0), None, Some(10.0));
    assert_eq!(resolve_price(None, Some(&public), None), Some(60.0));

    let legacy_only = row(None, None, None, None, Some(10.0));
    assert_eq!(resolve_price(None, Some(&legacy_only), None), Some(10.0));
}

#[test]
fn test_nothing_resolves_is_none_not_zero() {
    let empty = row(None, None, None, None, None);
    assert_eq!(resolve_price(Some(&empty), Some(&empty), None), None);
    assert_eq!(resolve_price(None, None, Some(UseCategory::Housing)), None);
}

// ── Cell parsing ──

#[test]
fn test_plain_and_decimal_cells() {
    assert_eq!(parse_price_cell("120"), Some(120.0));
    assert_eq!(parse_price_cell("85.5"), Some(85.5));
    assert_eq!(parse_price_cell("  64  "), Some(64.0));
}

#[test]
fn test_range_cell_averages_endpoints() {
    assert_eq!(parse_price_cell("70-105"), Some(87.5));
    assert_eq!(parse_price_cell("70 - 105"), Some(87.5));
    // En dash reads the same as the plain dash.
    assert_eq!(parse_price_cell("70\u{2013}105"), Some(87.5));
}

#[test]
fn test_dash_cells_mean_no_value() {
    assert_eq!(parse_price_cell("-"), None);
    assert_eq!(parse_price_cell("\u{2013}"), None);
    assert_eq!(parse_price_cell("\u{2014}"), None);
    assert_eq!(parse_price_cell("  -  "), None);
    assert_eq!(parse_price_cell(""), None);
}

#[test]
fn test_arabic_indic_digits_normalize() {
    assert_eq!(parse_price_cell("١٢٠"), Some(120.0));
    // Extended Arabic-Indic digits.
    assert_eq!(parse_price_cell("۱۲۰"), Some(120.0));
    // Arabic decimal separator.
    assert_eq!(parse_price_cell("٩٥٫٥"), Some(95.5));
    // Arabic-Indic range.
    assert_eq!(parse_price_cell("٧٠-١٠٥"), Some(87.5));
}

#[test]
fn test_thousands_separators_are_stripped() {
    assert_eq!(parse_price_cell("1,250"), Some(1250.0));
    assert_eq!(parse_price_cell("١٬٢٥٠"), Some(1250.0));
}

#[test]
fn test_garbage_cells_resolve_to_no_value() {
    assert_eq!(parse_price_cell("n/a"), None);
    assert_eq!(parse_price_cell("غير متوفر"), None);
    // A stray label with one number still yields the number.
    assert_eq!(parse_price_cell("تقريباً 50"), Some(50.0));
}

// ── Header mapping and row extraction ──

#[test]
fn test_arabic_headers_map_to_canonical_columns() {
    let headers: Vec<String> = ["الولاية", "المنطقة", "سكني", "تجاري", "سعر المتر"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mapping = map_headers(&headers).expect("headers should map");
    assert_eq!(mapping.wilaya, 0);
    assert_eq!(mapping.region, 1);
    assert_eq!(mapping.categories.len(), 2);
    assert_eq!(mapping.legacy, Some(4));
}

#[test]
fn test_english_headers_in_any_order() {
    let headers: Vec<String> = ["Residential", "Region", "Wilaya"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mapping = map_headers(&headers).expect("headers should map");
    assert_eq!(mapping.wilaya, 2);
    assert_eq!(mapping.region, 1);
    assert_eq!(mapping.categories, vec![(UseCategory::Housing, 0)]);
}

#[test]
fn test_missing_required_headers_fail() {
    let headers: Vec<String> = ["سكني", "تجاري"].iter().map(|s| s.to_string()).collect();
    assert!(map_headers(&headers).is_err());

    // Names alone are not importable either: no price column at all.
    let headers: Vec<String> = ["الولاية", "المنطقة"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert!(map_headers(&headers).is_err());
}

#[test]
fn test_extract_rows_skips_partial_garbage() {
    let headers: Vec<String> = ["wilaya", "region", "housing"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let mapping = map_headers(&headers).unwrap();

    let rows = vec![
        vec!["مسقط".to_string(), "بوشر".to_string(), "٩٥".to_string()],
        // No region — skipped.
        vec!["مسقط".to_string(), "".to_string(), "80".to_string()],
        // Dash price only — nothing to import.
        vec!["مسقط".to_string(), "العامرات".to_string(), "-".to_string()],
        // Range cell.
        vec!["ظفار".to_string(), "صلالة".to_string(), "70-105".to_string()],
    ];

    let (imported, skipped) = extract_rows(&mapping, &rows);
    assert_eq!(imported.len(), 2);
    assert_eq!(skipped, 2);

    assert_eq!(imported[0].wilaya, "مسقط");
    assert_eq!(imported[0].prices.housing, Some(95.0));
    assert_eq!(imported[1].prices.housing, Some(87.5));
}
