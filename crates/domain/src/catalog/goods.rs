use serde::{Deserialize, Serialize};

use crate::page::PageQuery;

/// Goods row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Goods {
    /// Goods ID.
    #[serde(rename = "ID")]
    pub id: String,
    /// Name.
    pub name: String,
    /// SKU or barcode.
    #[serde(default)]
    pub code: Option<String>,
    /// Sort key.
    #[serde(default)]
    pub sort: i32,
    /// Search pinyin.
    #[serde(default)]
    pub pinyin: Option<String>,
    /// Specification.
    #[serde(rename = "SpecID")]
    pub spec_id: String,
    /// Category.
    #[serde(rename = "CategoryID")]
    pub category_id: String,
    /// Owning organization.
    #[serde(rename = "OrgID")]
    pub org_id: String,
    /// Picture.
    #[serde(rename = "ImageURL", default)]
    pub image_url: Option<String>,
    /// Acceptance criteria on delivery.
    #[serde(default)]
    pub acceptance_standard: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: String,
}

/// Body of `/goods/create_goods`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodsCreate {
    /// Name.
    pub name: String,
    /// SKU or barcode.
    pub code: String,
    /// Owning organization.
    pub org_id: String,
    /// Specification.
    pub spec_id: String,
    /// Category.
    pub category_id: String,
    /// Sort key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i32>,
    /// Search pinyin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinyin: Option<String>,
    /// Picture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Acceptance criteria.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptance_standard: Option<String>,
}

/// Body of `/goods/update_goods`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodsUpdate {
    /// Goods to update.
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
    /// New specification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_id: Option<String>,
    /// New category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// New pinyin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinyin: Option<String>,
    /// New picture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// New acceptance criteria.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptance_standard: Option<String>,
}

/// Query string of `/goods/list_goods`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoodsListQuery {
    /// Owning organization.
    pub org_id: String,
    /// Category filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    /// Specification filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_id: Option<String>,
    /// Name/code/pinyin search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Pagination.
    #[serde(flatten)]
    pub paging: PageQuery,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_goods_row_field_names() {
        let goods: Goods = serde_json::from_str(
            r#"{"ID":"g-1","Name":"白菜","Code":"0101","SpecID":"s","CategoryID":"c","OrgID":"o","ImageURL":null}"#,
        )
        .unwrap();
        assert_eq!(goods.category_id, "c");
        assert_eq!(goods.image_url, None);
    }
}
