//! Units, specifications and meal times.
//!
//! The three dictionaries share one route family, `/dict/<op>_<slug>`, and
//! unlike every other route they use PascalCase payload keys (`ID`, `Name`).

use foodapp_domain::catalog::{
    DictCreate, DictEntry, DictIdRequest, DictKind, DictListQuery, DictUpdate,
};
use foodapp_domain::{Ack, Page};

use crate::error::ApiResult;
use crate::http::ApiClient;

/// `/dict/*`
#[derive(Debug, Clone)]
pub struct DictApi {
    client: ApiClient,
}

impl DictApi {
    /// Creates the wrapper.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Creates an entry and returns it.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn create(&self, kind: DictKind, entry: &DictCreate) -> ApiResult<DictEntry> {
        self.client.post_json(&route("create", kind), entry).await
    }

    /// Fetches one entry.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn get(&self, kind: DictKind, id: &str) -> ApiResult<DictEntry> {
        self.client
            .post_json(&route("get", kind), &id_request(id))
            .await
    }

    /// Lists entries. Sent as POST with the filters in the query string.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn list(&self, kind: DictKind, query: &DictListQuery) -> ApiResult<Page<DictEntry>> {
        self.client.post_query(&route("list", kind), query).await
    }

    /// Updates an entry.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn update(&self, kind: DictKind, update: &DictUpdate) -> ApiResult<Ack> {
        self.client.post_json(&route("update", kind), update).await
    }

    /// Deletes an entry.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn delete(&self, kind: DictKind, id: &str) -> ApiResult<Ack> {
        self.client
            .post_json(&route("delete", kind), &id_request(id))
            .await
    }
}

fn route(op: &str, kind: DictKind) -> String {
    format!("/dict/{op}_{}", kind.slug())
}

fn id_request(id: &str) -> DictIdRequest {
    DictIdRequest { id: id.to_string() }
}
