//! JSON shapes exchanged with the backend and how they are interpreted.

use serde::Deserialize;
use serde_json::Value;

use crate::backend::error::BackendError;

/// Application-level answer to a contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReply {
    /// Whether the backend reported success.
    pub accepted: bool,
    /// Human-readable message supplied by the backend, if any.
    pub message: Option<String>,
}

impl ContactReply {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            accepted: true,
            message: Some(message.into()),
        }
    }

    pub fn declined(message: Option<String>) -> Self {
        Self {
            accepted: false,
            message,
        }
    }
}

/// Body of `GET /api/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub message: String,
}

/// Interpret the body of a 2xx response to `POST /api/contact`.
///
/// The body must be a JSON object; anything else is malformed.
pub fn parse_contact_reply(body: &[u8]) -> Result<ContactReply, BackendError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| BackendError::MalformedResponse(e.to_string()))?;

    let Value::Object(map) = value else {
        return Err(BackendError::MalformedResponse(
            "expected a JSON object".to_string(),
        ));
    };

    let accepted = map.get("success").is_some_and(is_truthy);
    let message = map
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .filter(|m| !m.trim().is_empty());

    Ok(ContactReply { accepted, message })
}

/// Extract the failure message from a non-2xx error body.
///
/// Accepts `{"detail": "..."}` and the validation form
/// `{"detail": [{"msg": "..."}, ...]}`, taking the first message.
pub fn parse_error_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let detail = value.get("detail")?;

    let message = match detail {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(Value::as_str))
            .map(str::to_string),
        _ => None,
    };

    message.filter(|m| !m.trim().is_empty())
}

/// Loose truthiness: `false`, `0`, `""` and `null` are false, everything
/// else is true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
