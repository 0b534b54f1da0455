//! Message handlers
//!
//! Catch-all route for every message that is not a known command.

use std::sync::Arc;

use teloxide::prelude::*;
use tracing::debug;

use crate::gateway;
use crate::handlers::dispatcher::ComboDispatcher;
use crate::models::{InboundEvent, UserRef};
use crate::utils::errors::Result;

/// Handle any other message: point the user back to the menu
pub async fn handle_message(bot: Bot, msg: Message, dispatcher: Arc<ComboDispatcher>) -> Result<()> {
    let Some(user) = msg.from.as_ref().map(UserRef::from) else {
        debug!(chat_id = ?msg.chat.id, "Ignoring message without a sender");
        return Ok(());
    };

    let event = InboundEvent::FreeText {
        user,
        text: msg.text().map(str::to_string),
    };
    let reply = dispatcher.handle(&event);
    gateway::deliver(&bot, msg.chat.id, None, &reply).await
}
