//! Request and response interceptors.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use foodapp_domain::{BEARER, ErrorEnvelope, LOGIN_PATH, Location};
use serde_json::Value;
use tracing::{info, warn};

use crate::auth::TokenStore;
use crate::error::{ApiError, ApiResult, status_message};
use crate::ports::{AUTHORIZATION, HttpRequest, HttpResponse, Navigator, TransportError};

/// Hook run on every outbound request before it reaches the transport.
#[async_trait]
pub trait RequestInterceptor: Send + Sync {
    /// Adjusts the request in place.
    async fn on_request(&self, request: &mut HttpRequest);
}

/// Hook run on every settled response, successful or not.
#[async_trait]
pub trait ResponseInterceptor: Send + Sync {
    /// Observes or replaces the outcome.
    async fn on_response(&self, outcome: ApiResult<Value>) -> ApiResult<Value>;
}

/// Attaches `Authorization: Bearer <token>` while a valid token is stored.
#[derive(Debug, Clone)]
pub struct BearerAuth {
    tokens: TokenStore,
}

impl BearerAuth {
    /// Creates the interceptor.
    #[must_use]
    pub const fn new(tokens: TokenStore) -> Self {
        Self { tokens }
    }
}

#[async_trait]
impl RequestInterceptor for BearerAuth {
    async fn on_request(&self, request: &mut HttpRequest) {
        if let Some(token) = self.tokens.get_token().await {
            request.set_header(AUTHORIZATION, format!("{BEARER} {token}"));
        }
    }
}

/// Turns a raw transport outcome into a JSON payload or a readable error.
///
/// - a 2xx body that carries a non-empty `error` or `details` is a business
///   failure;
/// - a non-2xx response takes its message from the envelope, falling back to
///   `请求失败（<status>）`;
/// - 401 becomes [`ApiError::Unauthorized`];
/// - an empty body reads as `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeUnwrap;

impl EnvelopeUnwrap {
    /// Settles one exchange.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] the outcome maps to.
    pub fn settle(self, outcome: Result<HttpResponse, TransportError>) -> ApiResult<Value> {
        let response = outcome.map_err(ApiError::from)?;
        let payload = parse_body(&response.body);
        let envelope = ErrorEnvelope::message_from(&payload);

        if response.is_success() {
            return match envelope {
                Some(message) => Err(ApiError::Backend {
                    status: response.status,
                    message,
                }),
                None => Ok(payload),
            };
        }

        let message = envelope.unwrap_or_else(|| status_message(response.status));
        if response.status == 401 {
            Err(ApiError::Unauthorized { message })
        } else {
            Err(ApiError::Backend {
                status: response.status,
                message,
            })
        }
    }
}

fn parse_body(body: &[u8]) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

/// Ends the session on 401 and sends the user to the login page once.
///
/// The redirect remembers where the user was. It is skipped while the user
/// is already on a login path, and fires at most once per client so a burst
/// of concurrent 401s produces a single navigation.
pub struct UnauthorizedRedirect {
    tokens: TokenStore,
    navigator: Arc<dyn Navigator>,
    redirecting: AtomicBool,
}

impl UnauthorizedRedirect {
    /// Creates the interceptor.
    #[must_use]
    pub fn new(tokens: TokenStore, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            tokens,
            navigator,
            redirecting: AtomicBool::new(false),
        }
    }

    /// Returns true once the login redirect has been issued.
    #[must_use]
    pub fn is_redirecting(&self) -> bool {
        self.redirecting.load(Ordering::SeqCst)
    }

    async fn end_session(&self) {
        if let Err(e) = self.tokens.clear_auth().await {
            warn!(error = %e, "Failed to clear session after 401");
        }

        let here = self.navigator.current_location();
        if here.path().starts_with(LOGIN_PATH) {
            return;
        }
        if self
            .redirecting
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return;
        }

        let target = Location::login_with_redirect(&here.full_path()).full_path();
        info!(from = %here, %target, "Session rejected, redirecting to login");
        self.navigator.redirect(&target);
    }
}

#[async_trait]
impl ResponseInterceptor for UnauthorizedRedirect {
    async fn on_response(&self, outcome: ApiResult<Value>) -> ApiResult<Value> {
        if matches!(&outcome, Err(e) if e.is_unauthorized()) {
            self.end_session().await;
        }
        outcome
    }
}

impl std::fmt::Debug for UnauthorizedRedirect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnauthorizedRedirect")
            .field("redirecting", &self.is_redirecting())
            .finish_non_exhaustive()
    }
}
