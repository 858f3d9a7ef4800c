//! Adapters for the transport and clock ports.

mod clock;
mod reqwest_client;

pub use clock::SystemClock;
pub use reqwest_client::ReqwestTransport;
