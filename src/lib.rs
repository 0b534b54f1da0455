//! Call Centre Telegram Bot
//!
//! A menu-driven Telegram bot that routes a user's choice of subject
//! combination to the contact card of the agent responsible for it.
//! The roster is compiled in and never changes while the bot runs.

pub mod config;
pub mod gateway;
pub mod handlers;
pub mod menu;
pub mod models;
pub mod texts;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{CallCentreError, Result};

pub use handlers::{schema, BotCommand, ComboDispatcher};
pub use menu::MenuLayout;
pub use models::{AgentDirectory, AgentEntry, InboundEvent, Reply, UserRef};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
