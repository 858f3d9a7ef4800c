//! Bearer session handling.
//!
//! The backend issues the token at login; this module keeps it with its
//! expiry in persistent storage and decodes its claims for display.

mod session;
mod token_store;

pub use session::{current_claims, parse_jwt};
pub use token_store::{EXPIRY_SKEW_MS, TOKEN_EXP_AT_KEY, TOKEN_KEY, TokenStore};
