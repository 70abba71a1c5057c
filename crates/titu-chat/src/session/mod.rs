//! Conversation session management.
//!
//! A `ConversationSession` holds the widget state machine, the message
//! history and the draft, and runs one delivery round-trip at a time.

mod chat;
mod idle;
mod manager;
mod types;


pub use manager::ConversationSession;
pub use types::{
    ConversationState, Message, OpenPhase, Origin, QuickReply, SessionConfig, SessionEvent,
};
