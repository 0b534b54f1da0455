//! Telegram gateway
//!
//! Executes a [`Reply`] against the Bot API: the chat message goes out first,
//! then the callback query answer.

use teloxide::{
    prelude::*,
    types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup},
};
use tracing::{debug, warn};

use crate::models::{ButtonAction, ButtonLayout, CallbackAck, OutboundResponse, Reply};
use crate::utils::errors::Result;

/// Convert a button grid into Telegram inline keyboard markup
pub fn to_inline_keyboard(layout: &ButtonLayout) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(layout.iter().map(|row| {
        row.iter()
            .map(|button| match &button.action {
                ButtonAction::Callback(payload) => {
                    InlineKeyboardButton::callback(button.label.clone(), payload.clone())
                }
                ButtonAction::Link(url) => InlineKeyboardButton::url(button.label.clone(), url.clone()),
            })
            .collect::<Vec<_>>()
    }))
}

/// Send a text message, with its keyboard when present
pub async fn send_response(bot: &Bot, chat_id: ChatId, response: &OutboundResponse) -> Result<()> {
    let request = bot.send_message(chat_id, response.text.clone());
    match response.buttons {
        Some(ref buttons) => request.reply_markup(to_inline_keyboard(buttons)).await?,
        None => request.await?,
    };
    Ok(())
}

/// Answer a callback query so the client clears its loading indicator
pub async fn answer_callback(bot: &Bot, callback_id: &str, ack: &CallbackAck) -> Result<()> {
    let mut request = bot.answer_callback_query(callback_id.to_string());
    if let Some(ref text) = ack.text {
        request = request.text(text.clone());
    }
    if ack.show_alert {
        request = request.show_alert(true);
    }
    request.await?;
    Ok(())
}

/// Deliver everything one event produced
///
/// The callback query is answered even when the message could not be sent;
/// the send error is returned afterwards. An acknowledgement without a
/// callback id has nothing to answer and is skipped.
pub async fn deliver(bot: &Bot, chat_id: ChatId, callback_id: Option<&str>, reply: &Reply) -> Result<()> {
    let sent = match reply.message {
        Some(ref message) => send_response(bot, chat_id, message).await,
        None => Ok(()),
    };

    if let Err(ref e) = sent {
        warn!(chat_id = ?chat_id, error = %e, "Failed to send message");
    }

    match (&reply.ack, callback_id) {
        (Some(ack), Some(id)) => answer_callback(bot, id, ack).await?,
        (Some(_), None) => debug!(chat_id = ?chat_id, "No callback query to acknowledge"),
        (None, _) => {}
    }

    sent
}
