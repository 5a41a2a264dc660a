//! Lenient field decoders for analytics payloads.
//!
//! # Design
//! - The analytics API emits aggregates as JSON numbers or as numeric strings
//!   depending on the SQL driver, so numeric fields accept both.
//! - Unparseable or null values decode to zero instead of failing the whole
//!   payload; the dashboard treats malformed fields as absent data.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode a number that may arrive as a JSON number, a numeric string, or null.
///
/// # Errors
/// Only fails when the underlying deserializer cannot produce a JSON value.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map_or(0.0, coerce_number))
}

/// Decode an optional number; missing and null stay `None`, strings are parsed.
///
/// # Errors
/// Only fails when the underlying deserializer cannot produce a JSON value.
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .filter(|value| !value.is_null())
        .map(|value| coerce_number(&value)))
}

/// Decode an identifier that may be numeric or textual into its display form.
///
/// # Errors
/// Only fails when the underlying deserializer cannot produce a JSON value.
pub fn identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => text,
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    })
}

/// Coerce a JSON value to `f64`, mapping anything non-numeric to zero.
#[must_use]
pub fn coerce_number(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|number| number.is_finite()).unwrap_or(0.0)
}
