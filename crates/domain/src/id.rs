//! Identifier request bodies.

use serde::{Deserialize, Serialize};

/// `{"id": ...}` body shared by every get and delete endpoint outside `/dict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRequest {
    /// Record ID.
    pub id: String,
}

impl IdRequest {
    /// Wraps an ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl From<&str> for IdRequest {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_request_body() {
        let json = serde_json::to_string(&IdRequest::from("o-1")).unwrap();
        assert_eq!(json, r#"{"id":"o-1"}"#);
    }
}
