//! Callback query handlers
//!
//! Menu buttons carry `agent:{code}`; anything else is acknowledged and ignored.

use std::sync::Arc;

use teloxide::{prelude::*, types::{CallbackQuery, ChatId}};

use crate::gateway;
use crate::handlers::dispatcher::ComboDispatcher;
use crate::menu::parse_agent_payload;
use crate::models::{InboundEvent, UserRef};
use crate::utils::errors::Result;

/// Chat to answer in: the message's chat, or the presser's private chat
fn reply_chat(query: &CallbackQuery) -> ChatId {
    query
        .message
        .as_ref()
        .map(|m| m.chat().id)
        .unwrap_or_else(|| ChatId(query.from.id.0 as i64))
}

/// Whether the query carries an `agent:` payload
pub fn is_agent_selection(query: CallbackQuery) -> bool {
    query.data.as_deref().and_then(parse_agent_payload).is_some()
}

/// Handle a combination button press
pub async fn handle_combo_selection(
    bot: Bot,
    query: CallbackQuery,
    dispatcher: Arc<ComboDispatcher>,
) -> Result<()> {
    let event = InboundEvent::ComboSelection {
        user: UserRef::from(&query.from),
        combo_code: query
            .data
            .as_deref()
            .and_then(parse_agent_payload)
            .unwrap_or_default()
            .to_string(),
    };

    let reply = dispatcher.handle(&event);
    let callback_id = query.id.to_string();
    gateway::deliver(&bot, reply_chat(&query), Some(callback_id.as_str()), &reply).await
}

/// Acknowledge a button press the bot does not know
pub async fn handle_unrecognized_callback(
    bot: Bot,
    query: CallbackQuery,
    dispatcher: Arc<ComboDispatcher>,
) -> Result<()> {
    let user = UserRef::from(&query.from);

    let reply = dispatcher.handle_unrecognized_callback(&user, query.data.as_deref());
    let callback_id = query.id.to_string();
    gateway::deliver(&bot, reply_chat(&query), Some(callback_id.as_str()), &reply).await
}
