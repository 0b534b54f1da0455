//! Main menu layout and button payloads
//!
//! The menu is a grid of combination codes, two per row, in directory order.
//! Each button carries the payload `agent:{code}`.

use crate::models::{AgentDirectory, AgentEntry, Button, ButtonLayout};

/// Buttons per menu row
pub const MENU_ROW_WIDTH: usize = 2;

/// Prefix of combination selection payloads
pub const AGENT_PAYLOAD_PREFIX: &str = "agent";

/// Telegram limit for `callback_data`, in bytes
pub const MAX_CALLBACK_DATA_LEN: usize = 64;

/// Encode a combination code as callback data
pub fn agent_payload(code: &str) -> String {
    format!("{}:{}", AGENT_PAYLOAD_PREFIX, code)
}

/// Extract the combination code from callback data
///
/// Splits on the first colon; everything after it is the code, verbatim.
/// Returns `None` when the payload is not an `agent:` payload.
pub fn parse_agent_payload(data: &str) -> Option<&str> {
    match data.split_once(':') {
        Some((AGENT_PAYLOAD_PREFIX, code)) => Some(code),
        _ => None,
    }
}

/// Combination codes arranged in rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLayout {
    rows: Vec<Vec<String>>,
}

impl MenuLayout {
    pub fn from_directory(directory: &AgentDirectory) -> Self {
        let codes: Vec<String> = directory.codes().map(str::to_string).collect();
        let rows = codes
            .chunks(MENU_ROW_WIDTH)
            .map(<[String]>::to_vec)
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Button grid with one callback button per code
    pub fn to_buttons(&self) -> ButtonLayout {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|code| Button::callback(code.as_str(), agent_payload(code)))
                    .collect()
            })
            .collect()
    }
}

/// Single-button layout opening a chat with the agent
pub fn contact_buttons(agent: &AgentEntry) -> ButtonLayout {
    vec![vec![Button::link(
        format!("@{}", agent.contact_handle),
        agent.contact_url().clone(),
    )]]
}
