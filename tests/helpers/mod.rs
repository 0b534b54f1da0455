//! Test helpers module
//!
//! Mock Telegram Bot API server and common test data.

pub mod telegram_mock;

pub use telegram_mock::*;

use std::sync::Arc;

use call_centre_bot::{models::roster::builtin_directory, ComboDispatcher, UserRef};

/// Test bot token matching the mocked endpoint paths
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

pub fn test_user_id() -> i64 {
    987654321
}

pub fn test_user() -> UserRef {
    UserRef::new(test_user_id(), Some("testuser".to_string()))
}

/// Dispatcher over the compiled-in roster
pub fn test_dispatcher() -> ComboDispatcher {
    ComboDispatcher::new(Arc::new(builtin_directory().expect("Roster must be valid")))
}
