//! Goods lines of an inquiry sheet.

use foodapp_domain::pricing::{
    InquiryItem, InquiryItemCreate, InquiryItemListQuery, InquiryItemUpdate,
};
use foodapp_domain::{Ack, IdRequest, Page};

use crate::error::ApiResult;
use crate::http::ApiClient;

/// `/inquiry_item/*`
#[derive(Debug, Clone)]
pub struct InquiryItemApi {
    client: ApiClient,
}

impl InquiryItemApi {
    /// Creates the wrapper.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Adds a goods line and returns it.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn create(&self, item: &InquiryItemCreate) -> ApiResult<InquiryItem> {
        self.client
            .post_json("/inquiry_item/create_inquiry_item", item)
            .await
    }

    /// Fetches one line.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn get(&self, id: &str) -> ApiResult<InquiryItem> {
        self.client
            .post_json("/inquiry_item/get_inquiry_item", &IdRequest::new(id))
            .await
    }

    /// Lists the lines of a sheet.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn list(&self, query: &InquiryItemListQuery) -> ApiResult<Page<InquiryItem>> {
        self.client
            .post_query("/inquiry_item/list_inquiry_items", query)
            .await
    }

    /// Updates a line.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn update(&self, update: &InquiryItemUpdate) -> ApiResult<Ack> {
        self.client
            .post_json("/inquiry_item/update_inquiry_item", update)
            .await
    }

    /// Soft-deletes a line.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn remove(&self, id: &str) -> ApiResult<Ack> {
        self.client
            .post_json("/inquiry_item/soft_delete_inquiry_item", &IdRequest::new(id))
            .await
    }
}
