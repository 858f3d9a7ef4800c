//! Supplier records.

use foodapp_domain::supply::{Supplier, SupplierCreate, SupplierListQuery, SupplierUpdate};
use foodapp_domain::{Ack, IdRequest, Page};

use crate::error::ApiResult;
use crate::http::ApiClient;

/// `/supplier/*`
#[derive(Debug, Clone)]
pub struct SupplierApi {
    client: ApiClient,
}

impl SupplierApi {
    /// Creates the wrapper.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Creates a supplier and returns it.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn create(&self, supplier: &SupplierCreate) -> ApiResult<Supplier> {
        self.client
            .post_json("/supplier/create_supplier", supplier)
            .await
    }

    /// Lists suppliers of an organization.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn list(&self, query: &SupplierListQuery) -> ApiResult<Page<Supplier>> {
        self.client
            .post_query("/supplier/list_supplier", query)
            .await
    }

    /// Updates a supplier.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn update(&self, update: &SupplierUpdate) -> ApiResult<Ack> {
        self.client
            .post_json("/supplier/update_supplier", update)
            .await
    }

    /// Soft-deletes a supplier.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn remove(&self, id: &str) -> ApiResult<Ack> {
        self.client
            .post_json("/supplier/soft_delete_supplier", &IdRequest::new(id))
            .await
    }

    /// Fetches one supplier.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn get(&self, id: &str) -> ApiResult<Supplier> {
        self.client
            .post_json("/supplier/get_supplier", &IdRequest::new(id))
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::Harness;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_business_error_in_ok_body() {
        let harness = Harness::new().logged_in().await;
        harness
            .transport
            .respond(200, r#"{"error":"获取供应商失败","details":"供应商不存在"}"#);

        let err = SupplierApi::new(harness.client.clone())
            .get("s-404")
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(200));
        assert_eq!(err.to_string(), "获取供应商失败：供应商不存在");
    }

    #[tokio::test]
    async fn test_list_query_string() {
        let harness = Harness::new().logged_in().await;
        harness.transport.respond(200, r#"{"total":0,"items":[]}"#);

        SupplierApi::new(harness.client.clone())
            .list(&SupplierListQuery {
                org_id: "o-1".into(),
                status: Some(1),
                ..SupplierListQuery::default()
            })
            .await
            .unwrap();

        assert_eq!(
            harness.transport.last_request().path,
            "/api/v1/supplier/list_supplier?org_id=o-1&status=1"
        );
    }
}
