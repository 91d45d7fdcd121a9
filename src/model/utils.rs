/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;

/// Serde adapter sending `Option<bool>` as the `0`/`1` integers the gateway expects.
///
/// Pair with `skip_serializing_if = "Option::is_none"` so that `None` is omitted
/// while `Some(false)` is sent as `0`.
pub mod optional_flag {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    /// Serializes `Some(true)` as `1` and `Some(false)` as `0`
    pub fn serialize<S: Serializer>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(flag) => serializer.serialize_u8(u8::from(*flag)),
            None => serializer.serialize_none(),
        }
    }

    /// Accepts `0`/`1`, booleans and their string forms
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(flag)) => Ok(Some(flag)),
            Some(Value::Number(n)) => match n.as_u64() {
                Some(0) => Ok(Some(false)),
                Some(1) => Ok(Some(true)),
                _ => Err(D::Error::custom(format!("expected 0 or 1, got {n}"))),
            },
            Some(Value::String(s)) => match s.as_str() {
                "0" | "false" => Ok(Some(false)),
                "1" | "true" => Ok(Some(true)),
                _ => Err(D::Error::custom(format!("expected 0 or 1, got {s:?}"))),
            },
            Some(other) => Err(D::Error::custom(format!("expected 0 or 1, got {other}"))),
        }
    }
}

/// Fails with [`AppError::MissingField`] when `value` is absent or blank
pub(crate) fn require_text(value: &Option<String>, field: &str) -> Result<(), AppError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => Err(AppError::MissingField(field.to_string())),
    }
}

/// Fails with [`AppError::InvalidInput`] when `value` is `Some(0)`
pub(crate) fn reject_zero(value: Option<u64>, field: &str) -> Result<(), AppError> {
    match value {
        Some(0) => Err(AppError::InvalidInput(format!(
            "{field} must be greater than zero"
        ))),
        _ => Ok(()),
    }
}
