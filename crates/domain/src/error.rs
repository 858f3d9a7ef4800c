//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while decoding or validating values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A bearer token could not be decoded.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// A navigation target is malformed.
    #[error("invalid location: {0}")]
    InvalidLocation(String),

    /// A dictionary kind name is not recognized.
    #[error("unknown dictionary kind: {0}")]
    UnknownDictKind(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
