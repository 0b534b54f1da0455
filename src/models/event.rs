//! Inbound events
//!
//! Gateway-independent view of the three update kinds the bot reacts to.

/// Telegram user that triggered an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub id: i64,
    /// Used for logging only
    pub username: Option<String>,
}

impl UserRef {
    pub fn new(id: i64, username: Option<String>) -> Self {
        Self { id, username }
    }
}

impl From<&teloxide::types::User> for UserRef {
    fn from(user: &teloxide::types::User) -> Self {
        Self {
            id: user.id.0 as i64,
            username: user.username.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// `/start` command
    Start { user: UserRef },
    /// Menu button press; `combo_code` is taken verbatim from the payload
    ComboSelection { user: UserRef, combo_code: String },
    /// Any other message; `text` is `None` for non-text messages
    FreeText { user: UserRef, text: Option<String> },
}
