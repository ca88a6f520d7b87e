//! Loose value coercion for snapshot fields.
//!
//! The snapshot is consumed the way the renderer consumes it: numbers may
//! arrive as JSON numbers or as numeric strings, and absent values must
//! degrade to sentinels instead of erroring. This module centralizes the
//! coercion table so the projection stage never touches raw
//! [`serde_json::Value`]s directly.
//!
//! The rules intentionally mirror dynamic-language number conversion:
//! absent → NaN, null → 0, booleans → 0/1, strings are trimmed and parsed
//! as decimal literals (empty → 0, unparsable → NaN), containers → NaN.

use serde_json::Value;

/// Coerces an optional snapshot value to a number.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use utilisation_table::pipeline::to_number;
///
/// assert_eq!(to_number(Some(&json!(0.42))), 0.42);
/// assert_eq!(to_number(Some(&json!("0.42"))), 0.42);
/// assert_eq!(to_number(Some(&json!(""))), 0.0);
/// assert!(to_number(None).is_nan());
/// assert!(to_number(Some(&json!("n/a"))).is_nan());
/// ```
pub fn to_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                parse_decimal(trimmed)
            }
        }
        Some(Value::Array(_)) | Some(Value::Object(_)) => f64::NAN,
    }
}

/// Parses a trimmed decimal literal, rejecting the textual special forms
/// (`inf`, `nan`, hex) that Rust's float parser would otherwise accept.
fn parse_decimal(s: &str) -> f64 {
    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    if body.is_empty() || !body.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Renders a number the way the table displays it.
///
/// NaN renders as `"NaN"`, infinities as `"Infinity"` / `"-Infinity"`, zero
/// (either sign) as `"0"`, and everything else as the shortest decimal that
/// round-trips.
pub fn display_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        format!("{}", n)
    }
}

/// Renders an optional snapshot value as display text.
///
/// Absent values render as the literal `"undefined"`, null as `"null"`,
/// strings verbatim, numbers via [`display_number`], booleans as
/// `"true"`/`"false"`.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => display_number(n.as_f64().unwrap_or(f64::NAN)),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}
