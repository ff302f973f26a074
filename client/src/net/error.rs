//! API failure type and display-message normalization.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns [`ApiError`]; the auth flows collapse it into one
//! display string with [`ApiError::user_message`]. The server speaks several
//! error shapes (plain text, `{detail}`, `{message}`, `{msg}`, FastAPI
//! validation arrays) and the normalization checks them in that fixed order.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

pub const VALIDATION_ERROR: &str = "Validation error";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The client-wide timeout elapsed first.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },

    /// A 2xx body did not match the expected schema.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// No transport in this build (server-side rendering).
    #[error("HTTP transport not available")]
    Unavailable,
}

impl ApiError {
    /// HTTP status, when the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// One human-readable line for the UI. Only server error bodies carry a
    /// message; every other failure yields `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { body, .. } => body_message(body).unwrap_or_else(|| fallback.to_owned()),
            _ => fallback.to_owned(),
        }
    }
}

/// Extract a message from a raw error body. Non-JSON text is the message.
#[must_use]
pub fn body_message(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => value_message(&value),
        Err(_) => Some(raw.to_owned()),
    }
}

/// Extract a message from a decoded error body.
///
/// Order: string body, `detail`, `message`, first element of an array
/// (`msg`, then `message`), `msg`.
#[must_use]
pub fn value_message(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => items.first().map(item_message),
        Value::Object(map) => ["detail", "message", "msg"]
            .into_iter()
            .filter_map(|key| map.get(key))
            .find(|field| is_truthy(field))
            .map(field_text),
        _ => None,
    }
}

/// Message for one element of a validation-error array.
fn item_message(item: &Value) -> String {
    ["msg", "message"]
        .into_iter()
        .filter_map(|key| item.get(key))
        .find(|field| is_truthy(field))
        .map_or_else(|| VALIDATION_ERROR.to_owned(), field_text)
}

fn field_text(field: &Value) -> String {
    match field {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.first().map_or_else(|| VALIDATION_ERROR.to_owned(), item_message),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}
