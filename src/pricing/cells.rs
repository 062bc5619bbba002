//! Numeric parsing for administrator-uploaded price cells.
//!
//! Spreadsheets arrive with Arabic-Indic digits, Arabic separators, dash
//! placeholders and range cells like "70-105". A cell that matches nothing
//! resolves to "no value" rather than failing the import.

use regex::Regex;
use std::sync::LazyLock;

static NUMBER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("number token pattern"));

/// Map Arabic-Indic and Extended Arabic-Indic digits to ASCII, the Arabic
/// decimal separator to `.`, and drop thousands separators.
fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\u{0660}'..='\u{0669}' => {
                out.push(char::from(b'0' + (ch as u32 - 0x0660) as u8));
            }
            '\u{06F0}'..='\u{06F9}' => {
                out.push(char::from(b'0' + (ch as u32 - 0x06F0) as u8));
            }
            // Arabic decimal separator.
            '\u{066B}' => out.push('.'),
            // Thousands separators, Arabic and Latin.
            '\u{066C}' | ',' => {}
            // En dash and em dash read as the plain range/placeholder dash.
            '\u{2013}' | '\u{2014}' => out.push('-'),
            _ => out.push(ch),
        }
    }
    out
}

/// Parse one price cell.
///
/// Returns `None` for empty cells, dash placeholders, and cells with no
/// numeric token. A range cell averages its two endpoints.
pub fn parse_price_cell(raw: &str) -> Option<f64> {
    let cell = normalize(raw);
    let cell = cell.trim();

    if cell.is_empty() || cell.chars().all(|c| c == '-') {
        return None;
    }

    if let Ok(value) = cell.parse::<f64>() {
        if value.is_finite() && value >= 0.0 {
            return Some(value);
        }
    }

    let tokens: Vec<f64> = NUMBER_TOKEN
        .find_iter(cell)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect();

    match tokens.as_slice() {
        [] => None,
        [single] => Some(*single),
        [low, high, ..] => Some((low + high) / 2.0),
    }
}
