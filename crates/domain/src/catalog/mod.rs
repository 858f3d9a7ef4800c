//! Goods catalog: categories, dictionaries and goods.

mod category;
mod dict;
mod goods;

pub use category::{Category, CategoryCreate, CategoryListQuery, CategoryUpdate};
pub use dict::{DictCreate, DictEntry, DictIdRequest, DictKind, DictListQuery, DictUpdate};
pub use goods::{Goods, GoodsCreate, GoodsListQuery, GoodsUpdate};
