use serde::{Deserialize, Serialize};

use crate::page::PageQuery;

/// Price quoted by one market for one inquiry item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MarketInquiry {
    /// Quote ID.
    #[serde(rename = "ID")]
    pub id: String,
    /// Inquiry sheet.
    #[serde(rename = "InquiryID")]
    pub inquiry_id: String,
    /// Inquiry item.
    #[serde(rename = "ItemID")]
    pub item_id: String,
    /// Market, when registered.
    #[serde(rename = "MarketID", default)]
    pub market_id: Option<String>,
    /// Market name snapshot.
    pub market_name_snap: String,
    /// Quoted unit price.
    #[serde(default)]
    pub price: Option<f64>,
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

/// Body of `/market_inquiry/create_market_inquiry`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketInquiryCreate {
    /// Inquiry sheet.
    pub inquiry_id: String,
    /// Inquiry item.
    pub item_id: String,
    /// Market.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_id: Option<String>,
    /// Market name snapshot.
    pub market_name_snap: String,
    /// Quoted unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Body of `/market_inquiry/update_market_inquiry`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketInquiryUpdate {
    /// Quote to update.
    pub id: String,
    /// New market.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_id: Option<String>,
    /// New market name snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_name_snap: Option<String>,
    /// New price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Query string of `/market_inquiry/list_market_inquiries`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketInquiryListQuery {
    /// Inquiry sheet filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inquiry_id: Option<String>,
    /// Inquiry item filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    /// Pagination.
    #[serde(flatten)]
    pub paging: PageQuery,
}
