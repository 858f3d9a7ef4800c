//! Suppliers and the per-item settlements negotiated with them.

mod settlement;
mod supplier;

pub use settlement::{Settlement, SettlementCreate, SettlementListQuery, SettlementUpdate};
pub use supplier::{
    SUPPLIER_STATUS_DISABLED, SUPPLIER_STATUS_NORMAL, Supplier, SupplierCreate,
    SupplierListQuery, SupplierUpdate,
};
