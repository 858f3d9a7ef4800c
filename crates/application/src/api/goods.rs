//! Goods master data.

use foodapp_domain::catalog::{Goods, GoodsCreate, GoodsListQuery, GoodsUpdate};
use foodapp_domain::{Ack, IdRequest, Page};

use crate::error::ApiResult;
use crate::http::ApiClient;

/// `/goods/*`
#[derive(Debug, Clone)]
pub struct GoodsApi {
    client: ApiClient,
}

impl GoodsApi {
    /// Creates the wrapper.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Creates goods and returns them.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn create(&self, goods: &GoodsCreate) -> ApiResult<Goods> {
        self.client.post_json("/goods/create_goods", goods).await
    }

    /// Fetches one goods row.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn get(&self, id: &str) -> ApiResult<Goods> {
        self.client
            .post_json("/goods/get_goods", &IdRequest::new(id))
            .await
    }

    /// Lists goods of an organization.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn list(&self, query: &GoodsListQuery) -> ApiResult<Page<Goods>> {
        self.client.post_query("/goods/list_goods", query).await
    }

    /// Updates goods.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn update(&self, update: &GoodsUpdate) -> ApiResult<Ack> {
        self.client.post_json("/goods/update_goods", update).await
    }

    /// Soft-deletes goods.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn remove(&self, id: &str) -> ApiResult<Ack> {
        self.client
            .post_json("/goods/soft_delete_goods", &IdRequest::new(id))
            .await
    }
}
