//! Async round-trip methods for ConversationSession (quick replies + free text).

use tracing::debug;

use super::manager::ConversationSession;
use super::types::{ConversationState, Message, OpenPhase, Origin};

impl ConversationSession {
    /// Answer with one of the offered quick replies.
    ///
    /// Ignored unless quick replies are visible and `option_id` is one of
    /// them. Returns the bot reply appended by the round-trip.
    pub async fn select_quick_reply(&mut self, option_id: &str) -> Option<&Message> {
        let label = match self.quick_replies().iter().find(|q| q.id == option_id) {
            Some(option) => option.label.clone(),
            None => {
                debug!(option_id, state = ?self.state, "quick reply ignored");
                return None;
            }
        };

        self.push_message(Origin::User, label.clone());
        self.round_trip(label).await
    }

    /// Send free text typed by the visitor.
    ///
    /// Ignored while input is disabled or when `text` is blank. The history
    /// gets the trimmed text; the responder gets it verbatim.
    pub async fn send_message(&mut self, text: &str) -> Option<&Message> {
        if !self.input_enabled() {
            debug!(state = ?self.state, "send ignored: input disabled");
            return None;
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("send ignored: blank message");
            return None;
        }

        self.push_message(Origin::User, trimmed.to_string());
        self.draft.clear();
        self.round_trip(text.to_string()).await
    }

    /// Send the current draft. The draft is kept if the send is ignored.
    pub async fn submit_draft(&mut self) -> Option<&Message> {
        let text = self.draft.clone();
        self.send_message(&text).await
    }

    /// Typing pause, delivery, bot reply. Runs to completion; delivery
    /// failures come back as fallback text, never as errors.
    async fn round_trip(&mut self, payload: String) -> Option<&Message> {
        self.set_state(ConversationState::Open(OpenPhase::Typing));

        self.scheduler.sleep(self.config.typing_delay).await;
        let reply = self.responder.deliver(&self.session_id, &payload).await;

        self.push_message(Origin::Bot, reply);
        self.conversed = true;
        self.set_state(ConversationState::Open(OpenPhase::Active));
        self.messages.last()
    }
}
