//! Foodapp Domain - Core business types
//!
//! This crate defines the request and response model of the Foodapp
//! procurement backend, the navigation model used by the route guard and
//! the decoding of bearer token claims.
//! All types here are pure Rust with no I/O dependencies.

pub mod acl;
pub mod auth;
pub mod catalog;
pub mod envelope;
pub mod error;
pub mod id;
pub mod page;
pub mod pricing;
pub mod role;
pub mod route;
pub mod supply;

pub use auth::{BEARER, JwtClaims, LoginRequest, LoginResponse, decode_claims};
pub use envelope::{ErrorEnvelope, MESSAGE_SEPARATOR};
pub use error::{DomainError, DomainResult};
pub use id::IdRequest;
pub use page::{Ack, Page, PageQuery};
pub use role::{Role, deleted_label, is_admin, role_label};
pub use route::{HOME_PATH, LOGIN_PATH, Location, REDIRECT_QUERY_KEY, Route, RouteMeta};
