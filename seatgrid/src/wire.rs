//! Lenient scalar deserializers for API payloads.
//!
//! Different endpoints send the same logical field as a JSON string, a JSON
//! number, or `null`. These helpers normalize all three so the models above
//! them can use one concrete Rust type.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a string, number, boolean or `null` and produce a `String`.
///
/// `null` becomes the empty string.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}

/// Like [`string_or_number`] but keeps `null` as `None`.
pub fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text)),
        Value::Number(number) => Ok(Some(number.to_string())),
        _ => Err(D::Error::custom("expected string, number or null")),
    }
}

/// Accept a non-negative integer encoded as a number or a numeric string.
///
/// `null` and the empty string become `0`.
pub fn u32_from_string_or_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0),
        Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return u32::try_from(int).map_err(|_| D::Error::custom(format!("value {int} out of range for u32")));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= f64::from(u32::MAX)
            {
                return Ok(float as u32);
            }
            Err(D::Error::custom("expected non-negative integer"))
        }
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            trimmed
                .parse::<u32>()
                .map_err(|_| D::Error::custom(format!("expected numeric string, got {trimmed:?}")))
        }
        _ => Err(D::Error::custom("expected number or numeric string")),
    }
}

/// Parse a form field the way an HTML number input is read: leading digits
/// after trimming, anything unparsable becomes `0`.
#[must_use]
pub fn parse_count(raw: &str) -> u32 {
    let digits: String = raw.trim().chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Compare two identifiers that may differ only in numeric formatting
/// (`"07"` vs `"7"`).
#[must_use]
pub fn same_id(left: &str, right: &str) -> bool {
    let (left, right) = (left.trim(), right.trim());
    match (left.parse::<i64>(), right.parse::<i64>()) {
        (Ok(a), Ok(b)) => a == b,
        _ => left == right,
    }
}
