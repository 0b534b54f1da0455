//! Configuration validation module
//!
//! Checks run once at startup; any failure aborts before the bot starts polling.

use crate::utils::errors::{CallCentreError, Result};
use super::Settings;

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.trim().is_empty() {
        return Err(CallCentreError::MissingCredential);
    }

    if let Some(ref api_url) = config.api_url {
        url::Url::parse(api_url).map_err(|e| {
            CallCentreError::Config(format!("Invalid Bot API url {}: {}", api_url, e))
        })?;
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if !VALID_LEVELS.contains(&config.level.as_str()) {
        return Err(CallCentreError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, VALID_LEVELS)
        ));
    }

    Ok(())
}
