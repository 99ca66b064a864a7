//! Report input normalization

use crate::schema::{NormalizedReport, ReportItem, DEFAULT_ID, DEFAULT_STATUS, DEFAULT_TITLE};
use serde_json::Value;

/// Normalize arbitrary report input into a render-ready report
///
/// Total over all inputs: nulls, wrong types and malformed shapes all
/// produce a fully populated [`NormalizedReport`]. Nothing here can fail.
///
/// The `total` field follows a falsy rule: any absent, zero or non-numeric
/// value becomes 0, so an explicit 0 is indistinguishable from a missing
/// total. Callers display the stored total verbatim.
pub fn normalize(input: &Value) -> NormalizedReport {
    NormalizedReport {
        title: string_or(input.get("title"), DEFAULT_TITLE),
        date: match input.get("date").and_then(Value::as_str) {
            Some(date) => date.to_string(),
            None => chrono::Local::now().format("%d/%m/%Y").to_string(),
        },
        id: string_or(input.get("id"), DEFAULT_ID),
        status: string_or(input.get("status"), DEFAULT_STATUS),
        items: match input.get("items").and_then(Value::as_array) {
            Some(items) => items.iter().map(capture_item).collect(),
            None => Vec::new(),
        },
        total: input.get("total").and_then(Value::as_f64).unwrap_or(0.0),
        notes: string_or(input.get("notes"), ""),
    }
}

/// Take a string field, substituting the default when it is absent, null
/// or not a string
fn string_or(value: Option<&Value>, default: &str) -> String {
    match value.and_then(Value::as_str) {
        Some(s) => s.to_string(),
        None => default.to_string(),
    }
}

/// Capture one item element leniently
///
/// Wrong-typed fields become `None`; their render-time defaults are
/// applied when the table rows are built.
fn capture_item(value: &Value) -> ReportItem {
    ReportItem {
        id: value.get("id").cloned(),
        name: value
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string),
        unit_price: value.get("unitPrice").and_then(Value::as_f64),
        quantity: value.get("quantity").and_then(Value::as_f64),
    }
}

/// Check if a JSON value is truthy
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().unwrap_or(0.0) != 0.0,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Convert a JSON value to string for rendering
pub(crate) fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
