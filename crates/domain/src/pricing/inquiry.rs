use serde::{Deserialize, Serialize};

use crate::page::PageQuery;

/// Price inquiry sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Inquiry {
    /// Sheet ID.
    #[serde(rename = "ID")]
    pub id: String,
    /// Owning organization.
    #[serde(rename = "OrgID")]
    pub org_id: String,
    /// Title.
    pub inquiry_title: String,
    /// Business date.
    pub inquiry_date: String,
    /// Year, computed by the backend.
    #[serde(default)]
    pub inquiry_year: Option<i32>,
    /// Month, computed by the backend.
    #[serde(default)]
    pub inquiry_month: Option<i32>,
    /// Ten-day period of the month (1..=3), computed by the backend.
    #[serde(default)]
    pub inquiry_ten_day: Option<i32>,
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

/// Body of `/inquiry/create_inquiry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryCreate {
    /// Owning organization.
    pub org_id: String,
    /// Title.
    pub inquiry_title: String,
    /// Business date, `YYYY-MM-DD`.
    pub inquiry_date: String,
}

/// Body of `/inquiry/update_inquiry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryUpdate {
    /// Sheet to update.
    pub id: String,
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inquiry_title: Option<String>,
    /// New business date, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inquiry_date: Option<String>,
}

/// Query string of `/inquiry/list_inquiries`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryListQuery {
    /// Owning organization.
    pub org_id: String,
    /// Year filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Month filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<i32>,
    /// Ten-day period filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ten_day: Option<i32>,
    /// Title search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Pagination.
    #[serde(flatten)]
    pub paging: PageQuery,
}
