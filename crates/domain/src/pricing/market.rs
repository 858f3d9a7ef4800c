use serde::{Deserialize, Serialize};

use crate::page::PageQuery;

/// Market where prices are surveyed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Market {
    /// Market ID.
    #[serde(rename = "ID")]
    pub id: String,
    /// Name.
    pub name: String,
    /// Owning organization.
    #[serde(rename = "OrgID")]
    pub org_id: String,
    /// Code.
    #[serde(default)]
    pub code: Option<String>,
    /// Sort key.
    #[serde(default)]
    pub sort: i32,
    /// Deletion flag.
    #[serde(default)]
    pub is_deleted: i32,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: String,
}

/// Body of `/market/create_market`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketCreate {
    /// Name.
    pub name: String,
    /// Owning organization.
    pub org_id: String,
    /// Code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Sort key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i32>,
}

/// Body of `/market/update_market`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketUpdate {
    /// Market to update.
    pub id: String,
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// New sort key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i32>,
}

/// Query string of `/market/list_markets`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketListQuery {
    /// Owning organization.
    pub org_id: String,
    /// Name search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Pagination.
    #[serde(flatten)]
    pub paging: PageQuery,
}
