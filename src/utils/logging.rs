//! Logging configuration and setup
//!
//! This module provides logging initialization for the bot. Event records
//! themselves (START, CLICK, NOT_FOUND, UNKNOWN_MESSAGE) are emitted by the
//! dispatcher.

use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;
use crate::utils::errors::{CallCentreError, Result};

/// File name prefix of the rolling log files
const LOG_FILE_PREFIX: &str = "call-centre-bot.log";

/// Initialize logging based on configuration
///
/// `RUST_LOG` takes precedence over the configured level. The returned guard
/// must be held for as long as file logging should keep flushing.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let stdout_layer = if config.json {
        fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match config.directory {
        Some(ref directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| CallCentreError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log an error returned by an update handler
///
/// Recoverable errors (a failed Bot API call) are warnings; the rest are errors.
pub fn log_handler_error(err: &CallCentreError) {
    if err.is_recoverable() {
        warn!(error = %err, severity = %err.severity(), "Update handler failed");
    } else {
        error!(error = %err, severity = %err.severity(), "Update handler failed");
    }
}
