//! Account administration.

use foodapp_domain::acl::{
    Account, AccountCreate, AccountListQuery, AccountUpdate, PasswordChange, PasswordUpdate,
    UsernameRequest,
};
use foodapp_domain::{Ack, IdRequest, Page};

use crate::error::ApiResult;
use crate::http::ApiClient;

/// `/accounts/*`. Every route takes a JSON body, including the list.
#[derive(Debug, Clone)]
pub struct AccountApi {
    client: ApiClient,
}

impl AccountApi {
    /// Creates the wrapper.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists accounts matching `query`.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn list(&self, query: &AccountListQuery) -> ApiResult<Page<Account>> {
        self.client.post_json("/accounts/list", query).await
    }

    /// Fetches one account.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn get(&self, id: &str) -> ApiResult<Account> {
        self.client
            .post_json("/accounts/get", &IdRequest::new(id))
            .await
    }

    /// Fetches an account by login name.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn get_by_username(&self, username: &str) -> ApiResult<Account> {
        let body = UsernameRequest {
            username: username.to_string(),
        };
        self.client
            .post_json("/accounts/get_by_username", &body)
            .await
    }

    /// Creates an account. The backend answers with `{"id": ...}`.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn create(&self, account: &AccountCreate) -> ApiResult<Ack> {
        self.client.post_json("/accounts/create", account).await
    }

    /// Updates name, organization, description or role.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn update(&self, update: &AccountUpdate) -> ApiResult<Ack> {
        self.client.post_json("/accounts/update", update).await
    }

    /// Resets a password (administrators).
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn update_password(&self, update: &PasswordUpdate) -> ApiResult<Ack> {
        self.client
            .post_json("/accounts/update_password", update)
            .await
    }

    /// Changes one's own password.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn change_password(&self, change: &PasswordChange) -> ApiResult<Ack> {
        self.client
            .post_json("/accounts/change_password", change)
            .await
    }

    /// Soft-deletes an account.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn remove(&self, id: &str) -> ApiResult<Ack> {
        self.client
            .post_json("/accounts/delete", &IdRequest::new(id))
            .await
    }

    /// Deletes an account for good.
    ///
    /// # Errors
    ///
    /// Returns the backend or transport error.
    pub async fn hard_remove(&self, id: &str) -> ApiResult<Ack> {
        self.client
            .post_json("/accounts/hard_delete", &IdRequest::new(id))
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
    async fn test_list_sends_filters_as_json() {
        let harness = Harness::new().logged_in().await;
        harness.transport.respond(
            200,
            r#"{"total":1,"items":[{"ID":"a-1","Username":"alice","OrgID":"o-1","Role":1,"IsDeleted":0}]}"#,
        );
        let api = AccountApi::new(harness.client.clone());

        let page = api
            .list(&AccountListQuery {
                username_like: Some("ali".into()),
                limit: Some(20),
                offset: Some(0),
                ..AccountListQuery::default()
            })
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].username, "alice");
        let sent = harness.transport.last_request();
        assert_eq!(sent.path, "/api/v1/accounts/list");
        assert_eq!(
            sent.body.as_deref(),
            Some(r#"{"username_like":"ali","limit":20,"offset":0}"#)
        );
    }

    #[tokio::test]
    async fn test_soft_and_hard_delete_routes() {
        let harness = Harness::new().logged_in().await;
        harness.transport.respond(204, "").respond(204, "");
        let api = AccountApi::new(harness.client.clone());

        api.remove("a-1").await.unwrap();
        api.hard_remove("a-1").await.unwrap();

        let sent = harness.transport.requests();
        assert_eq!(sent[0].path, "/api/v1/accounts/delete");
        assert_eq!(sent[1].path, "/api/v1/accounts/hard_delete");
        assert_eq!(sent[1].body.as_deref(), Some(r#"{"id":"a-1"}"#));
    }
}
