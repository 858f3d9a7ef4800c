//! Errors surfaced by the command-line client.

use foodapp_application::ApiError;
use foodapp_application::ports::TransportError;
use foodapp_infrastructure::ConfigError;

/// Anything that can end a command.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The HTTP transport could not be set up.
    #[error("cannot reach backend: {0}")]
    Transport(#[from] TransportError),

    /// A command argument is malformed.
    #[error("invalid input: {0}")]
    Input(String),

    /// The session is missing or expired. Holds the login location.
    #[error("not signed in, run `foodapp login <username>` ({0})")]
    LoginRequired(String),

    /// A result could not be printed.
    #[error("cannot render output: {0}")]
    Output(#[from] serde_json::Error),
}
