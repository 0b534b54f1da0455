//! Outbound responses
//!
//! What the dispatcher asks the gateway to send. Conversion to Telegram
//! markup happens in [`crate::gateway`].

use url::Url;

/// Grid of buttons, one inner vector per row
pub type ButtonLayout = Vec<Vec<Button>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Sends the payload back as a callback query
    Callback(String),
    /// Opens a direct link
    Link(Url),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
}

impl Button {
    pub fn callback(label: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Callback(payload.into()),
        }
    }

    pub fn link(label: impl Into<String>, url: Url) -> Self {
        Self {
            label: label.into(),
            action: ButtonAction::Link(url),
        }
    }
}

/// Text message sent to the chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundResponse {
    pub text: String,
    pub buttons: Option<ButtonLayout>,
}

impl OutboundResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            buttons: None,
        }
    }

    pub fn with_buttons(mut self, buttons: ButtonLayout) -> Self {
        self.buttons = Some(buttons);
        self
    }
}

/// Answer to a callback query; clears the client's loading indicator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackAck {
    pub text: Option<String>,
    pub show_alert: bool,
}

impl CallbackAck {
    /// Acknowledgement without any visible notification
    pub fn silent() -> Self {
        Self::default()
    }

    /// Acknowledgement shown as a blocking alert
    pub fn alert(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            show_alert: true,
        }
    }
}

/// Every outbound call produced by one inbound event
///
/// The gateway sends `message` first, then `ack`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub message: Option<OutboundResponse>,
    pub ack: Option<CallbackAck>,
}

impl Reply {
    pub fn message(response: OutboundResponse) -> Self {
        Self {
            message: Some(response),
            ack: None,
        }
    }

    pub fn ack(ack: CallbackAck) -> Self {
        Self {
            message: None,
            ack: Some(ack),
        }
    }

    pub fn with_ack(mut self, ack: CallbackAck) -> Self {
        self.ack = Some(ack);
        self
    }
}
