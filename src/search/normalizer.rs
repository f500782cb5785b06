//! Response Normalizer
//!
//! Turns the loosely-typed JSON returned by the search backend into a fixed
//! list of [`SearchResult`] records.
//!
//! Backends seen in practice disagree on field names (`text` vs `content`,
//! `bm25` vs `bm25_score`, ...). Each logical field therefore has an ordered
//! list of candidate keys; the first candidate holding a usable value wins and
//! the documented default applies when none does.

use super::types::*;
use serde_json::{Map, Value};

pub const ID_FIELDS: &[&str] = &["id", "doc_id", "document_id"];
pub const HYBRID_FIELDS: &[&str] = &["hybrid", "score"];
pub const SEMANTIC_FIELDS: &[&str] = &["semantic", "semantic_score"];
pub const BM25_FIELDS: &[&str] = &["bm25", "bm25_score"];
pub const PROFILE_NAME_FIELDS: &[&str] = &["profile_name", "profileName", "profile", "author"];
pub const SUMMARY_FIELDS: &[&str] = &["summary", "title", "heading", "review_summary"];
pub const TEXT_FIELDS: &[&str] = &["text", "content", "document", "body", "review_text"];

/// Normalizes a raw backend payload into at most [`TOP_K`] results.
///
/// Accepts either a bare array or an object with a `results` array. Anything
/// else yields an empty list. Backend order is preserved.
pub fn normalize_results(raw: &Value) -> Vec<SearchResult> {
    result_items(raw)
        .iter()
        .take(TOP_K)
        .enumerate()
        .map(|(index, item)| normalize_item(index, item))
        .collect()
}

/// Extracts the list of result items from either accepted payload shape.
pub fn result_items(raw: &Value) -> &[Value] {
    match raw {
        Value::Array(items) => items,
        Value::Object(object) => match object.get("results") {
            Some(Value::Array(items)) => items,
            _ => &[],
        },
        _ => &[],
    }
}

/// Builds one record. `index` is the zero-based position used for the
/// placeholder id.
pub fn normalize_item(index: usize, item: &Value) -> SearchResult {
    let empty = Map::new();
    let fields = item.as_object().unwrap_or(&empty);

    SearchResult {
        id: first_defined(fields, ID_FIELDS)
            .and_then(identifier)
            .unwrap_or_else(|| format!("result-{}", index + 1)),
        hybrid: first_defined(fields, HYBRID_FIELDS).and_then(score),
        semantic: first_defined(fields, SEMANTIC_FIELDS).and_then(score),
        bm25: first_defined(fields, BM25_FIELDS).and_then(score),
        profile_name: first_text(fields, PROFILE_NAME_FIELDS)
            .unwrap_or_else(|| DEFAULT_PROFILE_NAME.to_string()),
        summary: first_text(fields, SUMMARY_FIELDS)
            .unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
        text: first_text(fields, TEXT_FIELDS).unwrap_or_else(|| DEFAULT_TEXT.to_string()),
    }
}

/// Returns the value of the first candidate key that is present and not null.
pub fn first_defined<'a>(fields: &'a Map<String, Value>, candidates: &[&str]) -> Option<&'a Value> {
    candidates
        .iter()
        .find_map(|key| fields.get(*key).filter(|value| !value.is_null()))
}

/// Like [`first_defined`], but only accepts non-blank strings and numbers.
/// Numbers are shown as written (`5` becomes `"5"`).
pub fn first_text(fields: &Map<String, Value>, candidates: &[&str]) -> Option<String> {
    candidates.iter().find_map(|key| match fields.get(*key) {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text.clone()),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

fn identifier(value: &Value) -> Option<String> {
    match value {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        Value::Bool(id) => Some(id.to_string()),
        _ => None,
    }
}

/// Coerces a score to `f64`. Numeric strings are accepted; anything that does
/// not yield a finite number is treated as missing.
fn score(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    number.is_finite().then_some(number)
}

/// Formats a score with four decimals, or the placeholder when absent or NaN.
///
/// Exact ties round away from zero (`0.03125` -> `0.0313`) and `-0.0` prints
/// as `0.0000`, matching how browsers render `toFixed(4)`.
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(value) if !value.is_nan() => {
            let sign = if value < 0.0 { "-" } else { "" };
            format!("{}{:.4}", sign, round_half_up_operand(value.abs()))
        }
        _ => SCORE_PLACEHOLDER.to_string(),
    }
}

/// `{:.4}` rounds exact ties to even. A finite double sits exactly halfway
/// between two 4-decimal values only when `magnitude * 32` is an odd
/// integer; for those, format the next double up so the tie breaks upward.
fn round_half_up_operand(magnitude: f64) -> f64 {
    let scaled = magnitude * 32.0;
    let is_tie = scaled.is_finite() && scaled.fract() == 0.0 && scaled % 2.0 == 1.0;

    if is_tie {
        f64::from_bits(magnitude.to_bits() + 1)
    } else {
        magnitude
    }
}
