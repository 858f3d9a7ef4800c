//! Goods categories.

use foodapp_domain::catalog::{Category, CategoryCreate, CategoryListQuery, CategoryUpdate};
use foodapp_domain::{Ack, IdRequest, Page};

use crate::error::ApiResult;
use crate::http::ApiClient;

/// `/category/*`. The list is the only GET route of the backend.
#[derive(Debug, Clone)]
pub struct CategoryApi {
    client: ApiClient,
}

impl CategoryApi {
    /// Creates the wrapper.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Creates a category and returns it.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn create(&self, category: &CategoryCreate) -> ApiResult<Category> {
        self.client
            .post_json("/category/create_category", category)
            .await
    }

    /// Fetches one category.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn get(&self, id: &str) -> ApiResult<Category> {
        self.client
            .post_json("/category/get_category", &IdRequest::new(id))
            .await
    }

    /// Lists the categories of a team.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn list(&self, query: &CategoryListQuery) -> ApiResult<Page<Category>> {
        self.client
            .get_query("/category/list_category", query)
            .await
    }

    /// Updates a category.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn update(&self, update: &CategoryUpdate) -> ApiResult<Ack> {
        self.client
            .post_json("/category/update_category", update)
            .await
    }

    /// Deletes a category.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn delete(&self, id: &str) -> ApiResult<Ack> {
        // The route name is misspelled on the server.
        self.client
            .post_json("/category/udelete_category", &IdRequest::new(id))
            .await
    }
}
