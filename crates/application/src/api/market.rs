//! Surveyed markets.

use foodapp_domain::pricing::{Market, MarketCreate, MarketListQuery, MarketUpdate};
use foodapp_domain::{Ack, IdRequest, Page};

use crate::error::ApiResult;
use crate::http::ApiClient;

/// `/market/*`
#[derive(Debug, Clone)]
pub struct MarketApi {
    client: ApiClient,
}

impl MarketApi {
    /// Creates the wrapper.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Creates a market and returns it.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn create(&self, market: &MarketCreate) -> ApiResult<Market> {
        self.client.post_json("/market/create_market", market).await
    }

    /// Fetches one market.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn get(&self, id: &str) -> ApiResult<Market> {
        self.client
            .post_json("/market/get_market", &IdRequest::new(id))
            .await
    }

    /// Lists markets of an organization.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn list(&self, query: &MarketListQuery) -> ApiResult<Page<Market>> {
        self.client.post_query("/market/list_markets", query).await
    }

    /// Updates a market.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn update(&self, update: &MarketUpdate) -> ApiResult<Ack> {
        self.client.post_json("/market/update_market", update).await
    }

    /// Soft-deletes a market.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn remove(&self, id: &str) -> ApiResult<Ack> {
        self.client
            .post_json("/market/soft_delete_market", &IdRequest::new(id))
            .await
    }
}
