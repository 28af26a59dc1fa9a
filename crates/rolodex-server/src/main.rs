//! Server entry point for the Rolodex people API.
//!
//! Loads configuration, installs structured logging, and serves the
//! people API until a shutdown signal arrives.
//!
//! # Startup Sequence
//!
//! 1. Load configuration (defaults, `rolodex.toml`, `ROLODEX_*` env)
//! 2. Initialize structured logging (tracing)
//! 3. Create the empty in-memory store
//! 4. Bind and serve until `Ctrl-C` / `SIGTERM`

mod error;
mod settings;

use std::sync::Arc;

use rolodex_api::{AppState, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::RolodexError;
use crate::settings::{LogFormat, Settings};

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, logging setup, binding, or
/// serving fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let settings = Settings::load()?;

    // 2. Initialize structured logging.
    init_logging(&settings)?;

    info!(
        host = settings.host,
        port = settings.port,
        log_format = ?settings.log_format,
        "Configuration loaded"
    );

    // 3. Create the store.
    let state = Arc::new(AppState::with_greeting(settings.greeting.clone()));

    // 4. Serve.
    start_server(&settings.server_config(), state)
        .await
        .map_err(RolodexError::from)?;

    info!("rolodex-server exiting");
    Ok(())
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies.
fn init_logging(settings: &Settings) -> Result<(), RolodexError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .map_err(|e| RolodexError::Logging {
            message: format!("invalid log filter {:?}: {e}", settings.log_level),
        })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = match settings.log_format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| RolodexError::Logging {
        message: e.to_string(),
    })
}
