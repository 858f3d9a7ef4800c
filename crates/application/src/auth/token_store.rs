//! Persistent bearer token storage with expiry tracking.
//!
//! Two entries live in the key-value storage: the token itself and the
//! instant it stops being usable, in milliseconds since the epoch. The
//! stored expiry is pulled forward by [`EXPIRY_SKEW_MS`] so a token that is
//! about to lapse is never sent.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::ports::{Clock, KeyValueStorage, StorageError};

/// Storage key of the bearer token.
pub const TOKEN_KEY: &str = "auth_token";
/// Storage key of the expiry, in epoch milliseconds.
pub const TOKEN_EXP_AT_KEY: &str = "auth_exp_at";
/// How long before the real expiry a token is considered gone.
pub const EXPIRY_SKEW_MS: i64 = 5_000;

/// Shared handle on the persisted session.
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn KeyValueStorage>,
    clock: Arc<dyn Clock>,
}

impl TokenStore {
    /// Create a token store over `storage`, reading time from `clock`.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>, clock: Arc<dyn Clock>) -> Self {
        Self { storage, clock }
    }

    /// Persist a token valid for `expires_in_secs` seconds from now.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be written.
    pub async fn set_auth(&self, token: &str, expires_in_secs: i64) -> Result<(), StorageError> {
        let expires_at = self
            .clock
            .now_millis()
            .saturating_add(expires_in_secs.saturating_mul(1000))
            .saturating_sub(EXPIRY_SKEW_MS);
        self.storage.set(TOKEN_KEY, token).await?;
        self.storage
            .set(TOKEN_EXP_AT_KEY, &expires_at.to_string())
            .await?;
        debug!(expires_at, "Stored bearer token");
        Ok(())
    }

    /// The token, if one is stored and still valid.
    ///
    /// A missing token, a missing, zero or unparsable expiry, or an expiry
    /// in the past all clear both entries and yield `None`. Storage failures
    /// are logged and read as "no token".
    pub async fn get_token(&self) -> Option<String> {
        let token = self.read(TOKEN_KEY).await.filter(|t| !t.is_empty());
        let expires_at = self
            .read(TOKEN_EXP_AT_KEY)
            .await
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(0);

        match token {
            Some(token) if expires_at != 0 && self.clock.now_millis() < expires_at => Some(token),
            _ => {
                if let Err(e) = self.clear_auth().await {
                    warn!(error = %e, "Failed to clear stale bearer token");
                }
                None
            }
        }
    }

    /// Remove the token and its expiry.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be written.
    pub async fn clear_auth(&self) -> Result<(), StorageError> {
        self.storage.remove(TOKEN_KEY).await?;
        self.storage.remove(TOKEN_EXP_AT_KEY).await?;
        Ok(())
    }

    /// Returns true if a valid token is stored.
    pub async fn is_authenticated(&self) -> bool {
        self.get_token().await.is_some()
    }

    /// The stored expiry, without validating it.
    pub async fn expires_at_millis(&self) -> Option<i64> {
        self.read(TOKEN_EXP_AT_KEY)
            .await
            .and_then(|raw| raw.trim().parse().ok())
    }

    async fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Failed to read token storage");
                None
            }
        }
    }
}

impl fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStore").finish_non_exhaustive()
    }
}
