//! Price inquiries: sheets, their goods items, markets and market quotes.

mod inquiry;
mod inquiry_item;
mod market;
mod market_inquiry;

pub use inquiry::{Inquiry, InquiryCreate, InquiryListQuery, InquiryUpdate};
pub use inquiry_item::{InquiryItem, InquiryItemCreate, InquiryItemListQuery, InquiryItemUpdate};
pub use market::{Market, MarketCreate, MarketListQuery, MarketUpdate};
pub use market_inquiry::{
    MarketInquiry, MarketInquiryCreate, MarketInquiryListQuery, MarketInquiryUpdate,
};
