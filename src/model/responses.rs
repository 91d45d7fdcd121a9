/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the gateway on non-200 responses
///
/// Both fields are optional; `message` may be a string or a list of strings.
#[derive(DebugPretty, DisplaySimple, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// Error name
    #[serde(default)]
    pub name: Option<String>,
    /// Error message(s)
    #[serde(default)]
    pub message: Option<Value>,
}

impl ErrorResponse {
    /// Extracts `(name, message)` from a failed response
    ///
    /// Falls back to the status reason phrase for the name and to the raw body for
    /// the message when the body is not JSON or lacks the fields.
    pub fn describe(status: StatusCode, body: &str) -> (String, String) {
        let parsed: ErrorResponse = serde_json::from_str(body).unwrap_or_default();

        let name = parsed
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("HTTP error").to_string());

        let message = match parsed.message {
            Some(Value::String(text)) => text,
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
            Some(Value::Null) | None => body.trim().to_string(),
            Some(other) => other.to_string(),
        };

        (name, message)
    }
}
