use serde::{Deserialize, Serialize};

/// Account row as returned by `/accounts/get` and `/accounts/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Account {
    /// Account ID.
    #[serde(rename = "ID")]
    pub id: String,
    /// Unique login name.
    pub username: String,
    /// Organization the account belongs to.
    #[serde(rename = "OrgID")]
    pub org_id: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Role code.
    #[serde(default)]
    pub role: i32,
    /// Sort key.
    #[serde(default)]
    pub sort: i32,
    /// Last successful login.
    #[serde(default)]
    pub last_login_at: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: String,
}

/// Filters of `/accounts/list`, sent as a JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountListQuery {
    /// Substring match on the username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username_like: Option<String>,
    /// Deletion flag filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<i32>,
    /// Role filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<i32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Rows to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Body of `/accounts/create`. The organization is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCreate {
    /// Login name.
    pub username: String,
    /// Initial password.
    pub password: String,
    /// Owning organization.
    pub org_id: String,
    /// Role code; the backend defaults to user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<i32>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `/accounts/update`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountUpdate {
    /// Account to update.
    pub id: String,
    /// New login name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// New organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New role code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<i32>,
}

/// Body of `/accounts/update_password` (administrator reset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordUpdate {
    /// Account to reset.
    pub id: String,
    /// New password.
    pub password: String,
}

/// Body of `/accounts/change_password` (self-service).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChange {
    /// Account name.
    pub username: String,
    /// Current password.
    pub old_password: String,
    /// Replacement password.
    pub new_password: String,
}

/// Body of `/accounts/get_by_username`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameRequest {
    /// Account name to look up.
    pub username: String,
}
