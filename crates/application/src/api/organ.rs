//! Organization hierarchy.

use foodapp_domain::acl::{Organ, OrganCreate, OrganListQuery, OrganUpdate};
use foodapp_domain::{Ack, IdRequest, Page};

use crate::error::ApiResult;
use crate::http::ApiClient;

/// `/orgs/*`. Every route takes a JSON body, including the list.
#[derive(Debug, Clone)]
pub struct OrganApi {
    client: ApiClient,
}

impl OrganApi {
    /// Creates the wrapper.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Creates an organization and returns it.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn create(&self, organ: &OrganCreate) -> ApiResult<Organ> {
        self.client.post_json("/orgs/create", organ).await
    }

    /// Fetches one organization.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn get(&self, id: &str) -> ApiResult<Organ> {
        self.client.post_json("/orgs/get", &IdRequest::new(id)).await
    }

    /// Lists organizations matching `query`.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn list(&self, query: &OrganListQuery) -> ApiResult<Page<Organ>> {
        self.client.post_json("/orgs/list", query).await
    }

    /// Updates an organization.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn update(&self, update: &OrganUpdate) -> ApiResult<Ack> {
        self.client.post_json("/orgs/update", update).await
    }

    /// Soft-deletes an organization.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn remove(&self, id: &str) -> ApiResult<Ack> {
        self.client
            .post_json("/orgs/delete", &IdRequest::new(id))
            .await
    }

    /// Deletes an organization for good.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn hard_remove(&self, id: &str) -> ApiResult<Ack> {
        self.client
            .post_json("/orgs/hard_delete", &IdRequest::new(id))
            .await
    }
}
