//! Decoding the claims of the current session.

use foodapp_domain::{JwtClaims, decode_claims};
use tracing::warn;

use super::TokenStore;

/// Decodes the payload of `token` without verifying it.
///
/// Returns `None` (and logs a warning) when the token is not a readable JWT.
#[must_use]
pub fn parse_jwt(token: &str) -> Option<JwtClaims> {
    match decode_claims(token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            warn!(error = %e, "Failed to parse JWT");
            None
        }
    }
}

/// Claims of the stored token, if a valid one is stored.
pub async fn current_claims(tokens: &TokenStore) -> Option<JwtClaims> {
    let token = tokens.get_token().await?;
    parse_jwt(&token)
}
