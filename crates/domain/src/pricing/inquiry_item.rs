use serde::{Deserialize, Serialize};

use crate::page::PageQuery;

/// One goods line of an inquiry sheet, with name snapshots taken at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InquiryItem {
    /// Item ID.
    #[serde(rename = "ID")]
    pub id: String,
    /// Inquiry sheet.
    #[serde(rename = "InquiryID")]
    pub inquiry_id: String,
    /// Goods.
    #[serde(rename = "GoodsID")]
    pub goods_id: String,
    /// Category.
    #[serde(rename = "CategoryID")]
    pub category_id: String,
    /// Specification.
    #[serde(rename = "SpecID", default)]
    pub spec_id: Option<String>,
    /// Unit.
    #[serde(rename = "UnitID", default)]
    pub unit_id: Option<String>,
    /// Goods name snapshot.
    pub goods_name_snap: String,
    /// Category name snapshot.
    pub category_name_snap: String,
    /// Specification name snapshot.
    #[serde(default)]
    pub spec_name_snap: Option<String>,
    /// Unit name snapshot.
    #[serde(default)]
    pub unit_name_snap: Option<String>,
    /// Official guide price.
    #[serde(default)]
    pub guide_price: Option<f64>,
    /// Average price of last month.
    #[serde(default)]
    pub last_month_avg_price: Option<f64>,
    /// Average price of this period.
    #[serde(default)]
    pub current_avg_price: Option<f64>,
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

/// Body of `/inquiry_item/create_inquiry_item`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InquiryItemCreate {
    /// Inquiry sheet.
    pub inquiry_id: String,
    /// Goods.
    pub goods_id: String,
    /// Category.
    pub category_id: String,
    /// Specification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_id: Option<String>,
    /// Unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<String>,
    /// Goods name snapshot.
    pub goods_name_snap: String,
    /// Category name snapshot.
    pub category_name_snap: String,
    /// Specification name snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_name_snap: Option<String>,
    /// Unit name snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_name_snap: Option<String>,
    /// Official guide price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide_price: Option<f64>,
    /// Average price of last month.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_month_avg_price: Option<f64>,
    /// Average price of this period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_avg_price: Option<f64>,
    /// Sort key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i32>,
}

/// Body of `/inquiry_item/update_inquiry_item`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InquiryItemUpdate {
    /// Item to update.
    pub id: String,
    /// New goods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goods_id: Option<String>,
    /// New category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// New specification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_id: Option<String>,
    /// New unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<String>,
    /// New goods name snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goods_name_snap: Option<String>,
    /// New category name snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name_snap: Option<String>,
    /// New specification name snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_name_snap: Option<String>,
    /// New unit name snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_name_snap: Option<String>,
    /// New guide price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guide_price: Option<f64>,
    /// New last-month average.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_month_avg_price: Option<f64>,
    /// New current average.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_avg_price: Option<f64>,
    /// New sort key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i32>,
}

/// Query string of `/inquiry_item/list_inquiry_items`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryItemListQuery {
    /// Inquiry sheet.
    pub inquiry_id: String,
    /// Category filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Pagination.
    #[serde(flatten)]
    pub paging: PageQuery,
}
