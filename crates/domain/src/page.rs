//! List response and pagination parameters.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// `{total, items}` as returned by every list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of matching records, across all pages.
    #[serde(default)]
    pub total: u64,
    /// Records on this page.
    #[serde(
        default = "Vec::new",
        deserialize_with = "null_as_empty",
        bound(deserialize = "T: Deserialize<'de>")
    )]
    pub items: Vec<T>,
}

/// The backend serializes an empty result set as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl<T> Page<T> {
    /// Returns true if the page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            total: 0,
            items: Vec::new(),
        }
    }
}

/// Page-number pagination used by the query-string list endpoints.
///
/// The backend defaults to page 1 with 20 rows when these are absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Rows per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl PageQuery {
    /// Creates explicit pagination.
    #[must_use]
    pub const fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }
}

/// Response of a mutation that has no entity to return.
///
/// Depending on the endpoint this is `{"ok": true}`, an echoed entity or an
/// empty body, so it is kept untyped.
pub type Ack = Value;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_deserializes_backend_shape() {
        let page: Page<Value> =
            serde_json::from_str(r#"{"total": 2, "items": [{"ID": "a"}, {"ID": "b"}]}"#).unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn test_page_tolerates_null_items() {
        let page: Page<Value> = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert!(page.is_empty());
        let page: Page<Value> = serde_json::from_str(r#"{"total": 0, "items": null}"#).unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn test_page_query_skips_unset_fields() {
        let json = serde_json::to_string(&PageQuery::default()).unwrap();
        assert_eq!(json, "{}");
        let json = serde_json::to_string(&PageQuery::new(2, 50)).unwrap();
        assert_eq!(json, r#"{"page":2,"page_size":50}"#);
    }
}
