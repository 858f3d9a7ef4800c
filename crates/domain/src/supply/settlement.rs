use serde::{Deserialize, Serialize};

use crate::page::PageQuery;

/// Settlement price agreed with a supplier for one inquiry item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Settlement {
    /// Settlement ID.
    #[serde(rename = "ID")]
    pub id: String,
    /// Inquiry sheet.
    #[serde(rename = "InquiryID")]
    pub inquiry_id: String,
    /// Inquiry item.
    #[serde(rename = "ItemID")]
    pub item_id: String,
    /// Supplier, when it still exists.
    #[serde(rename = "SupplierID", default)]
    pub supplier_id: Option<String>,
    /// Supplier name at settlement time.
    pub supplier_name_snap: String,
    /// Float ratio at settlement time.
    #[serde(default)]
    pub float_ratio_snap: f64,
    /// Settled unit price.
    #[serde(default)]
    pub settlement_price: Option<f64>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: String,
}

/// Body of `/supplier_settlement/create_supplier_settlement`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettlementCreate {
    /// Inquiry sheet.
    pub inquiry_id: String,
    /// Inquiry item.
    pub item_id: String,
    /// Supplier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    /// Supplier name snapshot.
    pub supplier_name_snap: String,
    /// Float ratio snapshot.
    pub float_ratio_snap: f64,
    /// Settled unit price.
    pub settlement_price: f64,
}

/// Body of `/supplier_settlement/update_supplier_settlement`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettlementUpdate {
    /// Settlement to update.
    pub id: String,
    /// New inquiry sheet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inquiry_id: Option<String>,
    /// New inquiry item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    /// New supplier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    /// New supplier name snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_name_snap: Option<String>,
    /// New float ratio snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub float_ratio_snap: Option<f64>,
    /// New settled price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_price: Option<f64>,
}

/// Query string of `/supplier_settlement/list_supplier_settlements`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementListQuery {
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
