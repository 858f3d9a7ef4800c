//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port. It owns the server
//! origin; requests arrive with a path already under the API prefix.

use std::time::Duration;

use foodapp_application::ports::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError, TransportFuture,
};
use reqwest::{Client, Method, Url};
use tracing::trace;

/// HTTP transport backed by `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Creates a transport for the server at `base_url`
    /// (e.g. `http://localhost:8080`).
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL or the client
    /// cannot be created.
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("foodapp-admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Self::with_client(client, base_url)
    }

    /// Creates a transport with a custom reqwest client.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, TransportError> {
        Url::parse(base_url).map_err(|e| TransportError::InvalidUrl(format!("{e}: {base_url}")))?;
        Ok(Self {
            client,
            // Ensure base_url ends without a trailing slash
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The server origin requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Converts the port's `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        }
    }

    fn resolve(&self, path: &str) -> Result<Url, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        Url::parse(&url).map_err(|e| TransportError::InvalidUrl(format!("{e}: {url}")))
    }

    /// Maps reqwest errors to `TransportError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout { timeout_ms };
        }
        if error.is_connect() {
            return TransportError::Connection(error.to_string());
        }
        TransportError::Other(error.to_string())
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: HttpRequest) -> TransportFuture<'_> {
        Box::pin(async move {
            let url = self.resolve(&request.path)?;
            let timeout_ms = request.timeout_ms();

            let mut builder = self
                .client
                .request(Self::to_reqwest_method(request.method), url)
                .timeout(Duration::from_millis(timeout_ms));

            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;

            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?
                .to_vec();

            trace!(status, bytes = body.len(), "Received response");
            Ok(HttpResponse::new(status, body))
        })
    }
}
