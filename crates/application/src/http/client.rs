//! The configured API client every wrapper shares.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::interceptor::{
    BearerAuth, EnvelopeUnwrap, RequestInterceptor, ResponseInterceptor, UnauthorizedRedirect,
};
use crate::auth::TokenStore;
use crate::error::{ApiError, ApiResult};
use crate::ports::{HttpMethod, HttpRequest, HttpTransport, Navigator};

/// Every backend route lives under this prefix.
pub const DEFAULT_API_PREFIX: &str = "/api/v1";
/// Default timeout of a request.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

/// API client with the auth and error-handling pipeline installed.
///
/// Cheap to clone; clones share the transport, the session and the
/// once-only login redirect.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    tokens: TokenStore,
    api_prefix: String,
    timeout: Duration,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// The session this client authenticates with.
    #[must_use]
    pub const fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Path prefix of every route.
    #[must_use]
    pub fn api_prefix(&self) -> &str {
        &self.api_prefix
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// POST `body` as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be encoded, the exchange fails,
    /// the backend rejects it, or the payload does not decode as `T`.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let mut request = HttpRequest::new(HttpMethod::Post, self.url(path), self.timeout);
        request.set_header("Content-Type", "application/json");
        request.body = Some(body);
        self.execute(request).await
    }

    /// POST with an empty body and `params` in the query string.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::post_json`].
    pub async fn post_query<Q, T>(&self, path: &str, params: &Q) -> ApiResult<T>
    where
        Q: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url_with_query(path, params)?;
        self.execute(HttpRequest::new(HttpMethod::Post, url, self.timeout))
            .await
    }

    /// GET with `params` in the query string.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::post_json`].
    pub async fn get_query<Q, T>(&self, path: &str, params: &Q) -> ApiResult<T>
    where
        Q: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url_with_query(path, params)?;
        self.execute(HttpRequest::new(HttpMethod::Get, url, self.timeout))
            .await
    }

    /// Runs `request` through the whole pipeline and decodes the payload.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::post_json`].
    pub async fn execute<T: DeserializeOwned>(&self, mut request: HttpRequest) -> ApiResult<T> {
        for interceptor in &self.request_interceptors {
            interceptor.on_request(&mut request).await;
        }

        debug!(method = request.method.as_str(), path = %request.path, "Sending request");
        let outcome = self.transport.send(request).await;

        let mut settled = EnvelopeUnwrap.settle(outcome);
        for interceptor in &self.response_interceptors {
            settled = interceptor.on_response(settled).await;
        }

        let payload = settled.inspect_err(|e| debug!(error = %e, "Request failed"))?;
        decode(payload)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_prefix, path)
    }

    fn url_with_query<Q: Serialize + ?Sized>(&self, path: &str, params: &Q) -> ApiResult<String> {
        let query =
            serde_urlencoded::to_string(params).map_err(|e| ApiError::Encode(e.to_string()))?;
        let mut url = self.url(path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        Ok(url)
    }
}

/// An empty body arrives as `null`, which only `Value` and `Option<_>` accept.
fn decode<T: DeserializeOwned>(payload: Value) -> ApiResult<T> {
    serde_json::from_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_prefix", &self.api_prefix)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    transport: Option<Arc<dyn HttpTransport>>,
    tokens: Option<TokenStore>,
    navigator: Option<Arc<dyn Navigator>>,
    api_prefix: Option<String>,
    timeout: Option<Duration>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClientBuilder {
    /// Set the transport requests are sent through
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set the session store
    #[must_use]
    pub fn token_store(mut self, tokens: TokenStore) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Set the navigator used for the login redirect on 401
    #[must_use]
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Set the path prefix (default `/api/v1`)
    #[must_use]
    pub fn api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = Some(prefix.into());
        self
    }

    /// Set the request timeout (default 15 s)
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a request interceptor, run after the bearer token is attached
    #[must_use]
    pub fn request_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.request_interceptors.push(interceptor);
        self
    }

    /// Add a response interceptor, run after the 401 handling
    #[must_use]
    pub fn response_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.response_interceptors.push(interceptor);
        self
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if the transport, token store or
    /// navigator is missing, or the prefix is not an absolute path.
    pub fn build(self) -> ApiResult<ApiClient> {
        let transport = self
            .transport
            .ok_or_else(|| ApiError::Configuration("transport is required".into()))?;
        let tokens = self
            .tokens
            .ok_or_else(|| ApiError::Configuration("token store is required".into()))?;
        let navigator = self
            .navigator
            .ok_or_else(|| ApiError::Configuration("navigator is required".into()))?;

        let api_prefix = self
            .api_prefix
            .unwrap_or_else(|| DEFAULT_API_PREFIX.to_string());
        if !api_prefix.is_empty() && !api_prefix.starts_with('/') {
            return Err(ApiError::Configuration(format!(
                "api prefix must start with '/': {api_prefix}"
            )));
        }
        // Ensure the prefix ends without a trailing slash
        let api_prefix = api_prefix.trim_end_matches('/').to_string();

        let mut request_interceptors: Vec<Arc<dyn RequestInterceptor>> =
            vec![Arc::new(BearerAuth::new(tokens.clone()))];
        request_interceptors.extend(self.request_interceptors);

        let mut response_interceptors: Vec<Arc<dyn ResponseInterceptor>> = vec![Arc::new(
            UnauthorizedRedirect::new(tokens.clone(), navigator),
        )];
        response_interceptors.extend(self.response_interceptors);

        Ok(ApiClient {
            transport,
            tokens,
            api_prefix,
            timeout: self
                .timeout
                .unwrap_or(Duration::from_millis(DEFAULT_TIMEOUT_MS)),
            request_interceptors,
            response_interceptors,
        })
    }
}
