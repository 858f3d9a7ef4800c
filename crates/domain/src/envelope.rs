//! The backend's error envelope.
//!
//! Every failing handler answers with `{"error": "...", "details": ...}`,
//! and a few handlers put the same envelope inside a `200` body. The readable
//! message is the non-empty parts joined by a full-width colon.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Separator between `error` and `details`.
pub const MESSAGE_SEPARATOR: &str = "：";

/// `{error, details}` as sent by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Short error title, usually a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    /// Free-form details, usually a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorEnvelope {
    /// Joins the non-empty parts, or `None` if both are empty.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        let parts: Vec<String> = [
            self.error.clone(),
            self.details.clone(),
        ]
        .into_iter()
        .flatten()
        .filter_map(render_part)
        .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(MESSAGE_SEPARATOR))
        }
    }

    /// Extracts the envelope message from an arbitrary JSON payload.
    ///
    /// Non-object payloads never carry an envelope.
    #[must_use]
    pub fn message_from(payload: &Value) -> Option<String> {
        let object = payload.as_object()?;
        let envelope = Self {
            error: object.get("error").cloned(),
            details: object.get("details").cloned(),
        };
        envelope.message()
    }
}

/// Falsy JSON values contribute nothing to the message.
fn render_part(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
