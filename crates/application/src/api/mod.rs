//! Typed wrappers over the backend routes.
//!
//! Each wrapper is a thin facade: it picks the route and the request style
//! (JSON body or query string) and decodes the response. Validation and
//! business rules stay on the server.
//!
//! Lists decode as [`Page`](foodapp_domain::Page). Updates and deletes
//! answer with an empty body or `{"ok": true}` and decode as
//! [`Ack`](foodapp_domain::Ack).

mod account;
mod auth;
mod category;
mod dict;
mod goods;
mod inquiry;
mod inquiry_item;
mod market;
mod market_inquiry;
mod organ;
mod price;
mod settlement;
mod supplier;

pub use account::AccountApi;
pub use auth::AuthApi;
pub use category::CategoryApi;
pub use dict::DictApi;
pub use goods::GoodsApi;
pub use inquiry::InquiryApi;
pub use inquiry_item::InquiryItemApi;
pub use market::MarketApi;
pub use market_inquiry::MarketInquiryApi;
pub use organ::OrganApi;
pub use price::PriceApi;
pub use settlement::SupplierSettlementApi;
pub use supplier::SupplierApi;
