//! Authentication payloads and bearer token claims.
//!
//! The backend issues the token; this module only describes the login
//! exchange and decodes the (unverified) claims carried in the token.

mod claims;
mod types;

pub use claims::{JwtClaims, decode_claims};
pub use types::{BEARER, LoginRequest, LoginResponse};
