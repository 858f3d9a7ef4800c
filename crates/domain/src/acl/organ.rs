use serde::{Deserialize, Serialize};

/// Organization (squad) row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Organ {
    /// Organization ID.
    #[serde(rename = "ID")]
    pub id: String,
    /// Display name, unique under the same parent.
    pub name: String,
    /// Two-digit code derived from the sort key when not given.
    #[serde(default)]
    pub code: Option<String>,
    /// Search pinyin.
    #[serde(default)]
    pub pinyin: Option<String>,
    /// Parent organization.
    #[serde(rename = "ParentID", alias = "Parent", default)]
    pub parent_id: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
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

/// Body of `/orgs/create`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganCreate {
    /// Display name.
    pub name: String,
    /// Parent organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Explicit code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Explicit sort key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i32>,
}

/// Body of `/orgs/update`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganUpdate {
    /// Organization to update.
    pub id: String,
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// New code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Filters of `/orgs/list`, sent as a JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganListQuery {
    /// Substring match on the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_like: Option<String>,
    /// Deletion flag filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<i32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Rows to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}
