//! Chat widget configuration types.

use serde::{Deserialize, Serialize};

/// One predefined prompt offered before free-text input is enabled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuickReplyConfig {
    pub id: String,
    pub label: String,
}

/// Conversation widget behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Bot message inserted when the widget opens with an empty history.
    pub greeting: String,
    /// Simulated typing latency before each delivery (valid range: 0-30000).
    pub typing_delay_ms: u32,
    /// Period of the idle attention cue while closed (valid range: 1000-600000).
    pub idle_interval_ms: u32,
    /// How long one idle shake lasts (valid range: 50-5000).
    pub idle_shake_ms: u32,
    pub quick_replies: Vec<QuickReplyConfig>,
    /// Reply shown when the responder answers without a usable `reply`.
    pub empty_reply_fallback: String,
    /// Reply shown when the responder cannot be reached or fails.
    pub connection_fallback: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: "👋 Hola, soy Titu ¿En qué puedo ayudarte hoy?".into(),
            typing_delay_ms: 2000,
            idle_interval_ms: 6000,
            idle_shake_ms: 600,
            quick_replies: vec![
                QuickReplyConfig {
                    id: "1".into(),
                    label: "Consultas".into(),
                },
                QuickReplyConfig {
                    id: "2".into(),
                    label: "Agendar Asesoría".into(),
                },
            ],
            empty_reply_fallback: "Lo siento, no pude procesar tu mensaje en este momento."
                .into(),
            connection_fallback:
                "Lo siento, hay un problema de conexión. Por favor intenta más tarde.".into(),
        }
    }
}
