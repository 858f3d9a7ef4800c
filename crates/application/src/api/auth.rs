//! Login and logout.

use foodapp_domain::{LoginRequest, LoginResponse};
use tracing::info;

use crate::error::ApiResult;
use crate::http::ApiClient;

/// `/auth/*`
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    /// Creates the wrapper.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `POST /auth/login`. On success the token is stored for later
    /// requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials are rejected or the token cannot
    /// be stored.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        let response: LoginResponse = self
            .client
            .post_json("/auth/login", &LoginRequest::new(username, password))
            .await?;
        self.client
            .tokens()
            .set_auth(&response.token, response.expires_in)
            .await?;
        info!(username, expires_in = response.expires_in, "Signed in");
        Ok(response)
    }

    /// Forgets the stored token. The backend keeps no session to end.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be written.
    pub async fn logout(&self) -> ApiResult<()> {
        self.client.tokens().clear_auth().await?;
        info!("Signed out");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::auth::{TOKEN_EXP_AT_KEY, TOKEN_KEY};
    use crate::test_support::{EPOCH_MILLIS, Harness};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_login_stores_token() {
        let harness = Harness::at("/login");
        harness.transport.respond(
            200,
            r#"{"token":"jwt","token_type":"Bearer","expires_in":7200}"#,
        );
        let api = AuthApi::new(harness.client.clone());

        let response = api.login("admin", "secret").await.unwrap();

        assert_eq!(response.token, "jwt");
        let sent = harness.transport.last_request();
        assert_eq!(sent.path, "/api/v1/auth/login");
        assert_eq!(
            sent.body.as_deref(),
            Some(r#"{"username":"admin","password":"secret"}"#)
        );
        assert_eq!(harness.kv.value(TOKEN_KEY).as_deref(), Some("jwt"));
        assert_eq!(
            harness.kv.value(TOKEN_EXP_AT_KEY),
            Some((EPOCH_MILLIS + 7_200_000 - 5_000).to_string())
        );
    }

    #[tokio::test]
    async fn test_rejected_login_stores_nothing() {
        let harness = Harness::at("/login");
        harness
            .transport
            .respond(401, r#"{"error":"登录失败","details":"用户名或密码错误"}"#);
        let api = AuthApi::new(harness.client.clone());

        let err = api.login("admin", "wrong").await.unwrap_err();

        assert_eq!(err.message(), "登录失败：用户名或密码错误");
        assert_eq!(harness.kv.value(TOKEN_KEY), None);
        assert!(harness.navigator.redirects().is_empty());
    }

    #[tokio::test]
    async fn test_logout_clears_token() {
        let harness = Harness::new().logged_in().await;
        AuthApi::new(harness.client.clone()).logout().await.unwrap();
        assert!(!harness.tokens.is_authenticated().await);
    }
}
