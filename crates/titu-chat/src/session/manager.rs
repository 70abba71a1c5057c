//! ConversationSession struct, open/close transitions and accessors.

use std::sync::Arc;

use titu_common::{IdentityProvider, SessionId, SESSION_ID_KEY};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

use crate::scheduler::Scheduler;
use crate::{ChatError, Responder};

use super::idle::IdleCue;
use super::types::{
    ConversationState, Message, OpenPhase, Origin, QuickReply, SessionConfig, SessionEvent,
};

/// The chat widget's conversation: one visitor, one history, one writer.
pub struct ConversationSession {
    pub(super) state: ConversationState,
    /// Append-only history, kept across close/open.
    pub(super) messages: Vec<Message>,
    pub(super) draft: String,
    pub(super) session_id: SessionId,
    /// Set once the first request/response round-trip has completed.
    pub(super) conversed: bool,
    pub(super) config: SessionConfig,
    pub(super) responder: Arc<dyn Responder>,
    pub(super) scheduler: Arc<dyn Scheduler>,
    pub(super) idle: IdleCue,
    pub(super) events: Option<UnboundedSender<SessionEvent>>,
}

impl ConversationSession {
    /// Create a closed session. The visitor id is read (or created) through
    /// `identity` and the idle cue starts right away.
    pub fn new(
        config: SessionConfig,
        responder: Arc<dyn Responder>,
        scheduler: Arc<dyn Scheduler>,
        identity: &dyn IdentityProvider,
    ) -> Result<Self, ChatError> {
        let session_id = SessionId::from(identity.get_or_create(SESSION_ID_KEY)?);
        info!(session_id = %session_id, "conversation session created");

        let idle = IdleCue::new(scheduler.clone(), config.idle_interval, config.idle_shake);
        idle.arm();

        Ok(Self {
            state: ConversationState::Closed,
            messages: Vec::new(),
            draft: String::new(),
            session_id,
            conversed: false,
            config,
            responder,
            scheduler,
            idle,
            events: None,
        })
    }

    /// Subscribe a render surface to state, message and idle-cue changes.
    pub fn with_events(mut self, tx: UnboundedSender<SessionEvent>) -> Self {
        self.idle.set_events(Some(tx.clone()));
        self.events = Some(tx);
        self
    }

    /// Expand the widget.
    ///
    /// Inserts the greeting when history is empty. A session that already
    /// completed a round-trip reopens with input enabled.
    pub fn open(&mut self) {
        if self.state.is_open() {
            debug!("open ignored: already open");
            return;
        }

        self.idle.disarm();
        let phase = if self.conversed {
            OpenPhase::Active
        } else {
            OpenPhase::AwaitingChoice
        };
        self.set_state(ConversationState::Open(phase));

        if self.messages.is_empty() {
            let greeting = self.config.greeting.clone();
            self.push_message(Origin::Bot, greeting);
        }
    }

    /// Collapse the widget. History is kept.
    pub fn close(&mut self) {
        if !self.state.is_open() {
            debug!("close ignored: already closed");
            return;
        }
        self.set_state(ConversationState::Closed);
        self.idle.arm();
    }

    /// One idle attention pulse. Only has an effect while closed.
    pub fn tick_idle(&self) -> bool {
        self.idle.tick()
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Full conversation history, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Free-text input is only accepted in `Open(Active)`.
    pub fn input_enabled(&self) -> bool {
        self.state == ConversationState::Open(OpenPhase::Active)
    }

    pub fn is_typing(&self) -> bool {
        self.state == ConversationState::Open(OpenPhase::Typing)
    }

    /// Quick replies currently offered; empty once one has been used.
    pub fn quick_replies(&self) -> &[QuickReply] {
        if self.state == ConversationState::Open(OpenPhase::AwaitingChoice) {
            &self.config.quick_replies
        } else {
            &[]
        }
    }

    pub fn is_shaking(&self) -> bool {
        self.idle.is_shaking()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub(super) fn set_state(&mut self, state: ConversationState) {
        if self.state == state {
            return;
        }
        debug!(from = ?self.state, to = ?state, "conversation state change");
        self.state = state;
        self.emit(SessionEvent::StateChanged(state));
    }

    pub(super) fn push_message(&mut self, origin: Origin, content: String) {
        let message = Message::new(origin, content);
        self.messages.push(message.clone());
        self.emit(SessionEvent::MessageAppended(message));
    }

    fn emit(&self, event: SessionEvent) {
        if let Some(ref tx) = self.events {
            let _ = tx.send(event);
        }
    }
}

impl Drop for ConversationSession {
    fn drop(&mut self) {
        self.idle.disarm();
    }
}
