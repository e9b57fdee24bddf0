//! Loose primitive coercions.
//!
//! Best-effort conversions to int/float/string/bool. These never fail:
//! every input shape maps to a defined output. The table deliberately
//! mirrors loose dynamic-language coercion rules rather than validating —
//! a non-numeric string becomes `0`, the strings `""` and `"0"` are false,
//! a non-empty array is `1`.

use crate::value::Value;

/// Coerces to an integer, truncating.
pub(crate) fn to_int(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(b) => i64::from(*b),
        Value::Int(i) => *i,
        Value::Float(f) => *f as i64,
        Value::String(s) => numeric_prefix(s) as i64,
        Value::Array(items) => i64::from(!items.is_empty()),
        Value::Object(map) => i64::from(!map.is_empty()),
        Value::Collection(c) => i64::from(!c.is_empty()),
        Value::DateTime(dt) => dt.timestamp(),
    }
}

/// Coerces to a float.
pub(crate) fn to_float(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(*b),
        Value::Int(i) => *i as f64,
        Value::Float(f) => *f,
        Value::String(s) => numeric_prefix(s),
        Value::Array(items) => f64::from(!items.is_empty()),
        Value::Object(map) => f64::from(!map.is_empty()),
        Value::Collection(c) => f64::from(!c.is_empty()),
        Value::DateTime(dt) => dt.timestamp_micros() as f64 / 1e6,
    }
}

/// Coerces to a string representation.
pub(crate) fn to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) => String::new(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::String(s) => s.clone(),
        Value::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        other @ (Value::Array(_) | Value::Object(_) | Value::Collection(_)) => {
            other.to_json().to_string()
        }
    }
}

/// Coerces to a boolean.
///
/// Falsy: `false`, `0`, `0.0`, `""`, `"0"`, and empty
/// arrays/objects/collections. Everything else is true, including the
/// strings `"0.0"` and `"false"`.
pub(crate) fn to_bool(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Int(i) => *i != 0,
        Value::Float(f) => *f != 0.0,
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Collection(c) => !c.is_empty(),
        Value::DateTime(_) => true,
    }
}

/// Parses the longest leading numeric prefix of a string as a float.
///
/// Leading whitespace is skipped; an optional sign, decimal point, and
/// exponent are honored. A string with no numeric prefix yields `0.0`.
fn numeric_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut seen_digits = end > int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if seen_digits || frac_end > frac_start {
            end = frac_end;
            seen_digits = seen_digits || frac_end > frac_start;
        }
    }

    if !seen_digits {
        return 0.0;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}
