//! Agent directory model
//!
//! Maps combination codes to the agent who answers for them. The directory is
//! built once at startup and never changes afterwards.

use std::collections::HashMap;

use url::Url;

use crate::menu::{agent_payload, MAX_CALLBACK_DATA_LEN};
use crate::utils::errors::{CallCentreError, Result};

/// Base of Telegram direct links
pub const TELEGRAM_LINK_BASE: &str = "https://t.me/";

/// Contact card of a single agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentEntry {
    pub display_name: String,
    pub contact_handle: String,
    contact_url: Url,
}

impl AgentEntry {
    /// Create an entry, resolving the handle into its `https://t.me/` link
    pub fn new(display_name: impl Into<String>, contact_handle: impl Into<String>) -> Result<Self> {
        let contact_handle = contact_handle.into();
        if contact_handle.is_empty() {
            return Err(CallCentreError::Config("Agent contact handle is empty".to_string()));
        }

        let contact_url = Url::parse(&format!("{}{}", TELEGRAM_LINK_BASE, contact_handle))?;

        Ok(Self {
            display_name: display_name.into(),
            contact_handle,
            contact_url,
        })
    }

    /// Direct link opening a chat with the agent
    pub fn contact_url(&self) -> &Url {
        &self.contact_url
    }
}

/// Ordered, immutable mapping from combination code to agent
#[derive(Debug, Clone, Default)]
pub struct AgentDirectory {
    entries: Vec<(String, AgentEntry)>,
    index: HashMap<String, usize>,
}

impl AgentDirectory {
    /// Build a directory from `(code, entry)` pairs, keeping their order
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, AgentEntry)>,
    {
        let mut directory = Self::default();

        for (code, entry) in entries {
            if code.is_empty() {
                return Err(CallCentreError::Config("Combination code is empty".to_string()));
            }

            if agent_payload(&code).len() > MAX_CALLBACK_DATA_LEN {
                return Err(CallCentreError::Config(format!(
                    "Combination code {} does not fit into {} bytes of callback data",
                    code, MAX_CALLBACK_DATA_LEN
                )));
            }

            if directory.index.contains_key(&code) {
                return Err(CallCentreError::Config(format!("Duplicate combination code: {}", code)));
            }

            directory.index.insert(code.clone(), directory.entries.len());
            directory.entries.push((code, entry));
        }

        Ok(directory)
    }

    /// Look up the agent for a combination code
    ///
    /// Codes match exactly: case-sensitive, no trimming.
    pub fn lookup(&self, code: &str) -> Result<&AgentEntry> {
        self.index
            .get(code)
            .map(|&position| &self.entries[position].1)
            .ok_or_else(|| CallCentreError::UnknownCombination { code: code.to_string() })
    }

    /// Combination codes in menu order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(code, _)| code.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
