//! Navigation guard.
//!
//! Consulted before every navigation. It only looks at whether a valid token
//! is stored; permissions are the backend's business.

use foodapp_domain::{HOME_PATH, Location, REDIRECT_QUERY_KEY};
use tracing::debug;

use crate::auth::TokenStore;

/// Outcome of a guarded navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Continue to the requested location.
    Proceed,
    /// Go to this full path instead.
    Redirect(String),
}

/// Redirects anonymous users to the login page and signed-in users away
/// from it.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    tokens: TokenStore,
}

impl RouteGuard {
    /// Creates a guard over `tokens`.
    #[must_use]
    pub const fn new(tokens: TokenStore) -> Self {
        Self { tokens }
    }

    /// Decides the navigation from `from` to `to`.
    ///
    /// - no valid token, target is not `/login`: go to
    ///   `/login?redirect=<target full path>`;
    /// - valid token, target is `/login`: go to the `redirect` query value,
    ///   else to `from`, else to `/`;
    /// - otherwise proceed.
    pub async fn before_each(&self, to: &Location, from: &Location) -> Navigation {
        let authenticated = self.tokens.is_authenticated().await;

        let navigation = match (authenticated, to.is_login()) {
            (false, false) => {
                Navigation::Redirect(Location::login_with_redirect(&to.full_path()).full_path())
            }
            (true, true) => Navigation::Redirect(return_target(to, from)),
            _ => Navigation::Proceed,
        };

        debug!(to = %to, from = %from, ?navigation, "Route guard");
        navigation
    }
}

fn return_target(to: &Location, from: &Location) -> String {
    let candidates = [
        to.query(REDIRECT_QUERY_KEY).map(str::to_string),
        Some(from.full_path()),
    ];
    candidates
        .into_iter()
        .flatten()
        .find(|target| !target.is_empty() && !is_login_target(target))
        .unwrap_or_else(|| HOME_PATH.to_string())
}

/// A return target pointing at the login page would bounce forever.
fn is_login_target(target: &str) -> bool {
    Location::parse(target).is_ok_and(|location| location.is_login())
}
