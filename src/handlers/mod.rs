//! Bot handlers module
//!
//! This module contains the dispatcher and the Telegram handlers that feed it:
//! - Command handlers for `/start`
//! - Callback handlers for menu buttons
//! - Message handlers for everything else

pub mod callbacks;
pub mod commands;
pub mod dispatcher;
pub mod messages;

pub use commands::BotCommand;
pub use dispatcher::ComboDispatcher;

use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::utils::errors::CallCentreError;

/// Build the update handling tree
pub fn schema() -> UpdateHandler<CallCentreError> {
    use teloxide::dispatching::UpdateFilterExt;

    let message_handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<BotCommand>()
                .endpoint(commands::handle_command),
        )
        .branch(dptree::endpoint(messages::handle_message));

    let callback_handler = Update::filter_callback_query()
        .branch(dptree::filter(callbacks::is_agent_selection).endpoint(callbacks::handle_combo_selection))
        .branch(dptree::endpoint(callbacks::handle_unrecognized_callback));

    dptree::entry()
        .branch(message_handler)
        .branch(callback_handler)
}
