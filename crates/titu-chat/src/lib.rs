//! Conversation core for the Titu chat widget.
//!
//! Provides:
//! - `ConversationSession`: the widget's state machine (open/close, quick
//!   replies, input gating, message history, idle attention cue)
//! - `WebhookClient`: delivery of visitor messages to the remote responder
//! - `TokioScheduler`: timers for simulated typing and the idle cue
//!
//! Identity, delivery and timers are injected (`IdentityProvider`,
//! `Responder`, `Scheduler`) so the session never touches ambient state.

pub mod scheduler;
pub mod session;
pub mod webhook;

use async_trait::async_trait;
use titu_common::{ConfigError, PlatformError, SessionId};

pub use scheduler::{Scheduler, TimerHandle, TokioScheduler};
pub use session::{
    ConversationSession, ConversationState, Message, OpenPhase, Origin, QuickReply,
    SessionConfig, SessionEvent,
};
pub use webhook::{Credential, Envelope, Fallbacks, WebhookClient, WebhookConfig};

/// Remote party that answers visitor messages.
///
/// Delivery always resolves to displayable text: failures are absorbed by
/// the implementation and turned into a fallback reply.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn deliver(&self, session_id: &SessionId, text: &str) -> String;
}

/// Why a single delivery attempt failed.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("parse error: {0}")]
    Parse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("identity error: {0}")]
    Identity(#[from] PlatformError),
    #[error("http client error: {0}")]
    Http(String),
    #[error("no async runtime: {0}")]
    Runtime(String),
}

impl From<ChatError> for titu_common::TituError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::Config(e) => e.into(),
            ChatError::Identity(e) => e.into(),
            other => titu_common::TituError::Chat(other.to_string()),
        }
    }
}
