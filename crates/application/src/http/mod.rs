//! The shared API client and its interceptor pipeline.
//!
//! Every request goes through the same stages:
//!
//! 1. request interceptors ([`BearerAuth`] attaches the session token);
//! 2. the transport;
//! 3. [`EnvelopeUnwrap`], which turns the raw outcome into a JSON payload or
//!    an [`ApiError`](crate::ApiError) with a readable message;
//! 4. response interceptors ([`UnauthorizedRedirect`] ends the session and
//!    sends the user to the login page on 401).

mod client;
mod interceptor;

pub use client::{ApiClient, ApiClientBuilder, DEFAULT_API_PREFIX, DEFAULT_TIMEOUT_MS};
pub use interceptor::{
    BearerAuth, EnvelopeUnwrap, RequestInterceptor, ResponseInterceptor, UnauthorizedRedirect,
};
