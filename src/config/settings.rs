//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from an optional TOML file, a `.env` file and
//! environment variables.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Environment variable holding the bot token
pub const TOKEN_ENV_VAR: &str = "BOT_TOKEN";

/// Prefix for structured environment overrides, e.g. `CALL_CENTRE__LOGGING__LEVEL`
pub const ENV_PREFIX: &str = "CALL_CENTRE";

/// Main application configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub bot: BotConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BotConfig {
    pub token: String,
    /// Bot API server override (self-hosted server or test mock)
    pub api_url: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    /// Directory for daily-rolling log files; stdout only when unset
    pub directory: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            directory: None,
        }
    }
}

impl Settings {
    /// Load settings from `config.toml`, `.env` and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("bot.token", std::env::var(TOKEN_ENV_VAR).ok())?
            .build()?;

        settings.try_deserialize()
    }

    /// Load settings from a single configuration file
    pub fn from_file(path: &Path) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> crate::utils::errors::Result<()> {
        super::validation::validate_settings(self)
    }
}
