//! Wiring of the client components for one command run.

use std::sync::Arc;

use foodapp_application::ports::{Clock, KeyValueStorage, NotificationSink};
use foodapp_application::{ApiClient, Notifier, RouteGuard, TokenStore};
use foodapp_infrastructure::{ClientConfig, ReqwestTransport, SessionNavigator, SystemClock};
use tracing::debug;

use crate::error::AppError;

/// Everything a command needs.
pub struct AppContext {
    pub tokens: TokenStore,
    pub navigator: Arc<SessionNavigator>,
    pub client: ApiClient,
    pub guard: RouteGuard,
    pub notifier: Notifier,
}

impl AppContext {
    /// Builds the client stack for `config`.
    pub fn new(
        config: &ClientConfig,
        storage: Arc<dyn KeyValueStorage>,
        sink: Arc<dyn NotificationSink>,
    ) -> Result<Self, AppError> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
        let tokens = TokenStore::new(storage, clock.clone());
        let navigator = Arc::new(SessionNavigator::new());

        let client = ApiClient::builder()
            .transport(Arc::new(ReqwestTransport::new(&config.base_url)?))
            .token_store(tokens.clone())
            .navigator(navigator.clone())
            .api_prefix(config.api_prefix.clone())
            .timeout(config.timeout())
            .build()?;

        debug!(
            base_url = %config.base_url,
            api_prefix = %config.api_prefix,
            timeout_ms = config.timeout_ms,
            "Client ready"
        );

        Ok(Self {
            guard: RouteGuard::new(tokens.clone()),
            notifier: Notifier::new(sink, clock),
            tokens,
            navigator,
            client,
        })
    }
}
