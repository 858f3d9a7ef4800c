use serde::{Deserialize, Serialize};

use crate::page::PageQuery;

/// Supplier status: active.
pub const SUPPLIER_STATUS_NORMAL: i32 = 1;
/// Supplier status: disabled.
pub const SUPPLIER_STATUS_DISABLED: i32 = 2;

/// Supplier row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Supplier {
    /// Supplier ID.
    #[serde(rename = "ID")]
    pub id: String,
    /// Name.
    pub name: String,
    /// Code.
    #[serde(default)]
    pub code: Option<String>,
    /// Sort key.
    #[serde(default)]
    pub sort: i32,
    /// Search pinyin.
    #[serde(default)]
    pub pinyin: Option<String>,
    /// `1` active, `2` disabled.
    #[serde(default)]
    pub status: i32,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Price float ratio applied to market averages.
    #[serde(default)]
    pub float_ratio: f64,
    /// Owning organization.
    #[serde(rename = "OrgID")]
    pub org_id: String,
    /// Contact person.
    #[serde(default)]
    pub contact_name: Option<String>,
    /// Contact phone.
    #[serde(default)]
    pub contact_phone: Option<String>,
    /// Contact e-mail.
    #[serde(default)]
    pub contact_email: Option<String>,
    /// Contact address.
    #[serde(default)]
    pub contact_address: Option<String>,
    /// Contract start.
    #[serde(default)]
    pub start_time: Option<String>,
    /// Contract end.
    #[serde(default)]
    pub end_time: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: String,
}

/// Body of `/supplier/create_supplier`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierCreate {
    /// Name.
    pub name: String,
    /// Owning organization.
    pub org_id: String,
    /// Price float ratio.
    pub float_ratio: f64,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Search pinyin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinyin: Option<String>,
    /// Contact person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    /// Contact phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    /// Contact e-mail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    /// Contact address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_address: Option<String>,
    /// Status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    /// Contract start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Contract end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// Body of `/supplier/update_supplier`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierUpdate {
    /// Supplier to update.
    pub id: String,
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// New pinyin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinyin: Option<String>,
    /// New sort key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i32>,
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New float ratio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub float_ratio: Option<f64>,
    /// New contact person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    /// New contact phone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    /// New contact e-mail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    /// New contact address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_address: Option<String>,
    /// New contract start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// New contract end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// Query string of `/supplier/list_supplier`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierListQuery {
    /// Owning organization.
    pub org_id: String,
    /// Name/code/pinyin search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Contact person filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    /// Contact phone filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    /// Contact e-mail filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    /// Contact address filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_address: Option<String>,
    /// Status filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    /// Pagination.
    #[serde(flatten)]
    pub paging: PageQuery,
}
