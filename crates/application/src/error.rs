//! Application error types

use thiserror::Error;

use crate::ports::{StorageError, TransportError};

/// Shown when no response was received at all.
pub const NETWORK_ERROR_MESSAGE: &str = "网络异常，请检查连接";

/// Message for a failed response whose body carries no readable envelope.
#[must_use]
pub fn status_message(status: u16) -> String {
    format!("请求失败（{status}）")
}

/// Errors surfaced by the API client.
///
/// The `Display` output of every variant is the readable message meant for
/// the user.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend rejected the request, either with a non-2xx status or
    /// with an error envelope inside a 2xx body.
    #[error("{message}")]
    Backend {
        /// HTTP status of the response.
        status: u16,
        /// Readable message.
        message: String,
    },

    /// The backend answered 401. The session has been cleared.
    #[error("{message}")]
    Unauthorized {
        /// Readable message.
        message: String,
    },

    /// No response was received.
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Network(#[source] TransportError),

    /// No response was received within the configured timeout.
    #[error("timeout of {timeout_ms}ms exceeded")]
    Timeout {
        /// Timeout in milliseconds.
        timeout_ms: u64,
    },

    /// A successful response did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),

    /// Request parameters could not be encoded.
    #[error("invalid request: {0}")]
    Encode(String),

    /// The token storage failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The client was built with missing or invalid settings.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl ApiError {
    /// HTTP status of the response, when one was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Backend { status, .. } => Some(*status),
            Self::Unauthorized { .. } => Some(401),
            _ => None,
        }
    }

    /// Returns true for a 401 response.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Readable message, as shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Timeout { timeout_ms } => Self::Timeout { timeout_ms },
            other => Self::Network(other),
        }
    }
}

/// Result type alias for API calls.
pub type ApiResult<T> = Result<T, ApiError>;
