//! Session data types: messages, quick replies, states and events.

use std::time::Duration;

use chrono::{DateTime, Utc};
use titu_common::new_id;
use titu_config::schema::ChatConfig;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    User,
    Bot,
}

/// One immutable entry of the conversation history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub origin: Origin,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub(crate) fn new(origin: Origin, content: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            content: content.into(),
            origin,
            created_at: Utc::now(),
        }
    }

    pub fn is_bot(&self) -> bool {
        self.origin == Origin::Bot
    }
}

/// A predefined prompt offered before free-text input is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickReply {
    pub id: String,
    pub label: String,
}

/// Sub-state of an expanded widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenPhase {
    /// Greeting shown, quick replies visible, free text disabled.
    AwaitingChoice,
    /// A reply is pending; everything is disabled.
    Typing,
    /// Free text enabled, quick replies gone.
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    /// Collapsed to the launcher.
    Closed,
    Open(OpenPhase),
}

impl ConversationState {
    pub fn is_open(self) -> bool {
        matches!(self, ConversationState::Open(_))
    }
}

/// Notifications for the render surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    StateChanged(ConversationState),
    MessageAppended(Message),
    IdleShake(bool),
}

/// Tunables of a conversation session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub greeting: String,
    pub typing_delay: Duration,
    pub idle_interval: Duration,
    pub idle_shake: Duration,
    pub quick_replies: Vec<QuickReply>,
}

impl From<&ChatConfig> for SessionConfig {
    fn from(chat: &ChatConfig) -> Self {
        Self {
            greeting: chat.greeting.clone(),
            typing_delay: Duration::from_millis(u64::from(chat.typing_delay_ms)),
            idle_interval: Duration::from_millis(u64::from(chat.idle_interval_ms)),
            idle_shake: Duration::from_millis(u64::from(chat.idle_shake_ms)),
            quick_replies: chat
                .quick_replies
                .iter()
                .map(|q| QuickReply {
                    id: q.id.clone(),
                    label: q.label.clone(),
                })
                .collect(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from(&ChatConfig::default())
    }
}
