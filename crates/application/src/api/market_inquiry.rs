//! Market quotes for inquiry items.

use foodapp_domain::pricing::{
    MarketInquiry, MarketInquiryCreate, MarketInquiryListQuery, MarketInquiryUpdate,
};
use foodapp_domain::{Ack, IdRequest, Page};

use crate::error::ApiResult;
use crate::http::ApiClient;

/// `/market_inquiry/*`
#[derive(Debug, Clone)]
pub struct MarketInquiryApi {
    client: ApiClient,
}

impl MarketInquiryApi {
    /// Creates the wrapper.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Records a quote and returns it.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn create(&self, quote: &MarketInquiryCreate) -> ApiResult<MarketInquiry> {
        self.client
            .post_json("/market_inquiry/create_market_inquiry", quote)
            .await
    }

    /// Fetches one quote.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn get(&self, id: &str) -> ApiResult<MarketInquiry> {
        self.client
            .post_json("/market_inquiry/get_market_inquiry", &IdRequest::new(id))
            .await
    }

    /// Lists quotes of a sheet or item.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn list(&self, query: &MarketInquiryListQuery) -> ApiResult<Page<MarketInquiry>> {
        self.client
            .post_query("/market_inquiry/list_market_inquiries", query)
            .await
    }

    /// Updates a quote.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn update(&self, update: &MarketInquiryUpdate) -> ApiResult<Ack> {
        self.client
            .post_json("/market_inquiry/update_market_inquiry", update)
            .await
    }

    /// Soft-deletes a quote.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn remove(&self, id: &str) -> ApiResult<Ack> {
        self.client
            .post_json(
                "/market_inquiry/soft_delete_market_inquiry",
                &IdRequest::new(id),
            )
            .await
    }
}
