//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the client core and the outside
//! world. Each port is a trait implemented by adapters in the
//! infrastructure layer, or by the binary for the interactive ones.

mod clock;
mod navigator;
mod notification;
mod storage;
mod transport;

pub use clock::Clock;
pub use navigator::Navigator;
pub use notification::NotificationSink;
pub use storage::{KeyValueStorage, StorageError};
pub use transport::{
    AUTHORIZATION, HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError,
    TransportFuture,
};
