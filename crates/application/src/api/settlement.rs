//! Supplier settlements.

use foodapp_domain::supply::{
    Settlement, SettlementCreate, SettlementListQuery, SettlementUpdate,
};
use foodapp_domain::{Ack, IdRequest, Page};

use crate::error::ApiResult;
use crate::http::ApiClient;

/// `/supplier_settlement/*`
#[derive(Debug, Clone)]
pub struct SupplierSettlementApi {
    client: ApiClient,
}

impl SupplierSettlementApi {
    /// Creates the wrapper.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Records a settlement and returns it.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn create(&self, settlement: &SettlementCreate) -> ApiResult<Settlement> {
        self.client
            .post_json("/supplier_settlement/create_supplier_settlement", settlement)
            .await
    }

    /// Fetches one settlement.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn get(&self, id: &str) -> ApiResult<Settlement> {
        self.client
            .post_json(
                "/supplier_settlement/get_supplier_settlement",
                &IdRequest::new(id),
            )
            .await
    }

    /// Lists settlements of an inquiry or item.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn list(&self, query: &SettlementListQuery) -> ApiResult<Page<Settlement>> {
        self.client
            .post_query("/supplier_settlement/list_supplier_settlements", query)
            .await
    }

    /// Updates a settlement.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn update(&self, update: &SettlementUpdate) -> ApiResult<Ack> {
        self.client
            .post_json("/supplier_settlement/update_supplier_settlement", update)
            .await
    }

    /// Deletes a settlement.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn delete(&self, id: &str) -> ApiResult<Ack> {
        self.client
            .post_json(
                "/supplier_settlement/delete_supplier_settlement",
                &IdRequest::new(id),
            )
            .await
    }
}
