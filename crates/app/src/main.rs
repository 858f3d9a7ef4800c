//! Foodapp admin - command-line entry point
//!
//! Loads configuration, wires the API client and runs one command.

mod cli;
mod commands;
mod console;
mod context;
mod error;
mod resource;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use foodapp_application::ports::KeyValueStorage;
use foodapp_infrastructure::{ClientConfig, FileKeyValueStorage, MemoryStorage};
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::console::ConsoleSink;
use crate::context::AppContext;
use crate::error::AppError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level.as_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        // Already shown by the notifier
        Err(AppError::Api(_)) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = load_config(&cli)?;

    let storage: Arc<dyn KeyValueStorage> = if cli.ephemeral {
        Arc::new(MemoryStorage::new())
    } else {
        Arc::new(FileKeyValueStorage::new(config.storage_path.clone()))
    };

    let ctx = AppContext::new(&config, storage, Arc::new(ConsoleSink))?;
    commands::execute(cli.command, &ctx).await
}

/// Configuration sources, with command-line flags on top.
fn load_config(cli: &Cli) -> Result<ClientConfig, AppError> {
    let mut config = ClientConfig::load(cli.config.as_deref())?;
    if let Some(base_url) = &cli.base_url {
        config.base_url.clone_from(base_url);
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.timeout_ms = timeout_ms;
    }
    if let Some(storage) = &cli.storage {
        config.storage_path.clone_from(storage);
    }
    config.validate()?;
    Ok(config)
}
