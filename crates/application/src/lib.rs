//! Foodapp Application - Client core
//!
//! This crate holds everything between the typed API wrappers and the
//! outside world: the ports adapters implement, the token store, the
//! request/response interceptor pipeline, the route guard and the error
//! notifier. It performs no I/O of its own.

pub mod api;
pub mod auth;
pub mod error;
pub mod guard;
pub mod http;
pub mod notify;
pub mod ports;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::{
    AccountApi, AuthApi, CategoryApi, DictApi, GoodsApi, InquiryApi, InquiryItemApi, MarketApi,
    MarketInquiryApi, OrganApi, PriceApi, SupplierApi, SupplierSettlementApi,
};
pub use auth::{TokenStore, parse_jwt};
pub use error::{ApiError, ApiResult};
pub use guard::{Navigation, RouteGuard};
pub use http::{ApiClient, ApiClientBuilder};
pub use notify::Notifier;
