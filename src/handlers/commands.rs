//! Command handlers

use std::sync::Arc;

use teloxide::{prelude::*, utils::command::BotCommands};
use tracing::debug;

use crate::gateway;
use crate::handlers::dispatcher::ComboDispatcher;
use crate::models::{InboundEvent, UserRef};
use crate::utils::errors::Result;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Call Centre commands")]
pub enum BotCommand {
    #[command(description = "Show the combination menu")]
    Start,
}

/// Route a parsed command to its handler
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: BotCommand,
    dispatcher: Arc<ComboDispatcher>,
) -> Result<()> {
    match cmd {
        BotCommand::Start => handle_start(bot, msg, dispatcher).await,
    }
}

/// Handle /start command
pub async fn handle_start(bot: Bot, msg: Message, dispatcher: Arc<ComboDispatcher>) -> Result<()> {
    let Some(user) = msg.from.as_ref().map(UserRef::from) else {
        debug!(chat_id = ?msg.chat.id, "Ignoring /start without a sender");
        return Ok(());
    };

    let reply = dispatcher.handle(&InboundEvent::Start { user });
    gateway::deliver(&bot, msg.chat.id, None, &reply).await
}
