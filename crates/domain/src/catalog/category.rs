use serde::{Deserialize, Serialize};

use crate::page::PageQuery;

/// Goods category row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Category {
    /// Category ID.
    #[serde(rename = "ID")]
    pub id: String,
    /// Unique name.
    pub name: String,
    /// Code, derived from the organization code when not given.
    #[serde(default)]
    pub code: Option<String>,
    /// Search pinyin.
    #[serde(default)]
    pub pinyin: Option<String>,
    /// Sort key.
    #[serde(default)]
    pub sort: i32,
    /// Owning organization.
    #[serde(rename = "TeamID", alias = "TeamId")]
    pub team_id: String,
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

/// Body of `/category/create_category`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCreate {
    /// Name.
    pub name: String,
    /// Owning organization.
    pub team_id: String,
    /// Explicit code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Explicit pinyin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinyin: Option<String>,
}

/// Body of `/category/update_category`. The name is always sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryUpdate {
    /// Category to update.
    pub id: String,
    /// Name.
    pub name: String,
    /// New code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// New pinyin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinyin: Option<String>,
}

/// Query string of `GET /category/list_category`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryListQuery {
    /// Owning organization.
    pub team_id: String,
    /// Name/code/pinyin search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Pagination.
    #[serde(flatten)]
    pub paging: PageQuery,
}
