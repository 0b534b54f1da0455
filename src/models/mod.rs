//! Data models module
//!
//! The agent directory, the compiled-in roster, inbound events and the
//! outbound replies the dispatcher produces.

pub mod agent;
pub mod event;
pub mod response;
pub mod roster;

pub use agent::{AgentDirectory, AgentEntry};
pub use event::{InboundEvent, UserRef};
pub use response::{Button, ButtonAction, ButtonLayout, CallbackAck, OutboundResponse, Reply};
