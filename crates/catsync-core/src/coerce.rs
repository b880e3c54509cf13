//! Total coercions for loosely-typed source fields.
//!
//! The source system does not guarantee field types: an activity flag
//! may arrive as `1`, `"1"`, `true` or be missing entirely, and a price
//! may be a number or a string. These helpers never fail; callers pick
//! a documented sentinel when a value cannot be read as the target
//! type.

use serde_json::Value;

/// Truthiness of an arbitrary JSON value.
///
/// Matches JavaScript `Boolean(x)`: `null`, `false`, `0`, `0.0` and the
/// empty string are false, everything else (including `"0"`) is true.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Read a JSON value as a float.
///
/// Numbers pass through; strings are trimmed and parsed. Anything else
/// yields `None` and the caller decides the sentinel.
pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Read a JSON value as an integer.
///
/// Integral floats (`7.0`, `"7.0"`) are accepted; fractional values are
/// not silently truncated.
pub fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(integral_to_i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(integral_to_i64))
        }
        _ => None,
    }
}

fn integral_to_i64(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
