//! Error handling for the call-centre bot
//!
//! This module defines the error type shared by configuration loading,
//! the agent directory and the Telegram gateway.

use thiserror::Error;

/// Main error type for the call-centre bot
#[derive(Error, Debug)]
pub enum CallCentreError {
    #[error("Combination not found: {code}")]
    UnknownCombination { code: String },

    #[error("Bot token is not configured (set BOT_TOKEN)")]
    MissingCredential,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias for call-centre operations
pub type Result<T> = std::result::Result<T, CallCentreError>;

impl CallCentreError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            CallCentreError::UnknownCombination { .. } => true,
            CallCentreError::MissingCredential => false,
            CallCentreError::Config(_) => false,
            CallCentreError::ConfigLoad(_) => false,
            CallCentreError::Telegram(_) => true,
            CallCentreError::UrlParse(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CallCentreError::MissingCredential => ErrorSeverity::Critical,
            CallCentreError::Config(_) => ErrorSeverity::Critical,
            CallCentreError::ConfigLoad(_) => ErrorSeverity::Critical,
            CallCentreError::UnknownCombination { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
