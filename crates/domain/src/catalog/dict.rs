//! Dictionaries: units, specifications and meal times.
//!
//! The three dictionaries share one row shape and one set of endpoints that
//! differ only by a slug. Their payloads use PascalCase keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::page::PageQuery;

/// Which dictionary an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DictKind {
    /// Goods units.
    Unit,
    /// Goods specifications.
    Spec,
    /// Menu meal times.
    MealTime,
}

impl DictKind {
    /// All kinds, in menu order.
    pub const ALL: [Self; 3] = [Self::Unit, Self::Spec, Self::MealTime];

    /// Endpoint slug, as in `/dict/create_<slug>`.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Spec => "spec",
            Self::MealTime => "mealTime",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unit => "商品单位",
            Self::Spec => "商品规格",
            Self::MealTime => "菜单餐次",
        }
    }
}

impl fmt::Display for DictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for DictKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace(['-', '_'], "");
        let singular = normalized.strip_suffix(['s', 'S']).unwrap_or(&normalized);
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug().eq_ignore_ascii_case(singular))
            .ok_or_else(|| DomainError::UnknownDictKind(s.to_string()))
    }
}

/// Dictionary row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DictEntry {
    /// Entry ID.
    #[serde(rename = "ID")]
    pub id: String,
    /// Unique name.
    pub name: String,
    /// Code assigned by the backend.
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

/// Body of `/dict/create_<slug>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DictCreate {
    /// Name.
    pub name: String,
    /// Sort key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i32>,
    /// Code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Body of `/dict/update_<slug>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DictUpdate {
    /// Entry to update.
    #[serde(rename = "ID")]
    pub id: String,
    /// Name.
    pub name: String,
    /// Sort key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i32>,
    /// Code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// `{ID}` body of the dictionary get/delete endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictIdRequest {
    /// Entry ID.
    #[serde(rename = "ID")]
    pub id: String,
}

/// Query string of `/dict/list_<slug>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictListQuery {
    /// Name search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Pagination.
    #[serde(flatten)]
    pub paging: PageQuery,
}
