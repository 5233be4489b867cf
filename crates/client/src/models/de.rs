//! Lenient field decoding.
//!
//! The service is inconsistent about scalar types: ids arrive as `"2"` or `2`, balances as
//! `"125.00"` or `125.0`, and empty lists as `null`.

use serde::{Deserialize, Deserializer, de::Error};
use serde_json::Value;

/// Accept a string, number or boolean and keep its textual form. `null` becomes empty.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}

/// Accept an integer or a numeric string. `null` and empty strings become `None`.
pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(number) => number
            .as_i64()
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("expected an integer id, got {number}"))),
        Value::String(text) if text.trim().is_empty() => Ok(None),
        Value::String(text) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|error| D::Error::custom(format!("invalid id {text:?}: {error}"))),
        Value::Null => Ok(None),
        other => Err(D::Error::custom(format!("expected an id, got {other}"))),
    }
}

/// Decode `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
