//! Combination dispatcher
//!
//! Translates each inbound event into the replies the bot sends, using only
//! the immutable agent directory and the menu built from it at startup.
//! Nothing here touches the network, so every handler is synchronous.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::menu::{contact_buttons, MenuLayout};
use crate::models::{AgentDirectory, ButtonLayout, CallbackAck, InboundEvent, OutboundResponse, Reply, UserRef};
use crate::texts;

#[derive(Debug, Clone)]
pub struct ComboDispatcher {
    directory: Arc<AgentDirectory>,
    menu: ButtonLayout,
}

impl ComboDispatcher {
    /// Create a dispatcher, building the main menu once
    pub fn new(directory: Arc<AgentDirectory>) -> Self {
        let menu = MenuLayout::from_directory(&directory).to_buttons();
        Self { directory, menu }
    }

    pub fn directory(&self) -> &AgentDirectory {
        &self.directory
    }

    /// The main menu attached to welcome and reminder messages
    pub fn menu(&self) -> &ButtonLayout {
        &self.menu
    }

    /// Route an event to its handler
    pub fn handle(&self, event: &InboundEvent) -> Reply {
        match event {
            InboundEvent::Start { user } => Reply::message(self.handle_start(user)),
            InboundEvent::ComboSelection { user, combo_code } => {
                self.handle_combo_selection(user, combo_code)
            }
            InboundEvent::FreeText { user, text } => {
                Reply::message(self.handle_free_text(user, text.as_deref()))
            }
        }
    }

    /// Handle `/start`: welcome text plus the main menu
    pub fn handle_start(&self, user: &UserRef) -> OutboundResponse {
        info!(user_id = user.id, username = ?user.username, "START");

        OutboundResponse::new(texts::WELCOME).with_buttons(self.menu.clone())
    }

    /// Handle a menu button press
    ///
    /// A known code gets the agent's contact card and a silent acknowledgement.
    /// An unknown code gets only an alert acknowledgement, no chat message.
    pub fn handle_combo_selection(&self, user: &UserRef, combo_code: &str) -> Reply {
        info!(
            user_id = user.id,
            username = ?user.username,
            combo = %combo_code,
            "CLICK"
        );

        match self.directory.lookup(combo_code) {
            Ok(agent) => {
                let card = OutboundResponse::new(texts::agent_card(&agent.display_name, combo_code))
                    .with_buttons(contact_buttons(agent));
                Reply::message(card).with_ack(CallbackAck::silent())
            }
            Err(e) => {
                error!(user_id = user.id, combo = %combo_code, error = %e, "NOT_FOUND");
                Reply::ack(CallbackAck::alert(texts::COMBO_NOT_FOUND))
            }
        }
    }

    /// Handle any message that is not a command: remind the user to use the menu
    pub fn handle_free_text(&self, user: &UserRef, text: Option<&str>) -> OutboundResponse {
        warn!(user_id = user.id, text = ?text, "UNKNOWN_MESSAGE");

        OutboundResponse::new(texts::CHOOSE_FROM_MENU).with_buttons(self.menu.clone())
    }

    /// Acknowledge a button press that does not carry an `agent:` payload
    pub fn handle_unrecognized_callback(&self, user: &UserRef, payload: Option<&str>) -> Reply {
        warn!(user_id = user.id, payload = ?payload, "UNKNOWN_CALLBACK");

        Reply::ack(CallbackAck::silent())
    }
}
