//! Client configuration.
//!
//! Values are layered, lowest first: built-in defaults, the configuration
//! file, then `FOODAPP_*` environment variables. Command-line flags are
//! applied on top by the binary.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use foodapp_application::http::{DEFAULT_API_PREFIX, DEFAULT_TIMEOUT_MS};
use serde::{Deserialize, Serialize};
use url::Url;

/// Backend origin the admin front-end talks to in development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "FOODAPP";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value was read but is not usable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for the API client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server origin, e.g. `http://localhost:8080`.
    pub base_url: String,

    /// Path prefix of every endpoint.
    pub api_prefix: String,

    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,

    /// JSON file holding the session token.
    pub storage_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            storage_path: default_data_dir().join("storage.json"),
        }
    }
}

impl ClientConfig {
    /// Loads configuration.
    ///
    /// With `path`, that file must exist. Without it, `config.toml` in the
    /// user config directory is read when present.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or a value is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?;
        let builder = match path {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::from(default_config_file()).required(false)),
        };

        Self::finish(builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true)))
    }

    /// The request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Checks the values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ConfigError::Invalid(format!("base_url `{}`: {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "base_url `{}` must use http or https",
                self.base_url
            )));
        }
        if !self.api_prefix.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "api_prefix `{}` must start with '/'",
                self.api_prefix
            )));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid("timeout_ms must be positive".to_string()));
        }
        Ok(())
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = Self::default();
        Ok(config::Config::builder()
            .set_default("base_url", defaults.base_url)?
            .set_default("api_prefix", defaults.api_prefix)?
            .set_default("timeout_ms", defaults.timeout_ms)?
            .set_default(
                "storage_path",
                defaults.storage_path.to_string_lossy().to_string(),
            )?)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("foodapp")
}

fn default_config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("foodapp")
        .join("config.toml")
}
