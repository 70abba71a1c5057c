//! Webhook client struct, envelope building, and reply parsing.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{SecondsFormat, Utc};
use reqwest::header::{HeaderValue, InvalidHeaderValue};
use serde::Serialize;

use crate::ChatError;

use super::config::{Credential, WebhookConfig};

/// Request header carrying the id that tags this delivery's log lines.
pub const CORRELATION_HEADER: &str = "x-correlation-id";

/// JSON body posted for every visitor message.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<'a> {
    pub user_id: &'a str,
    pub message: &'a str,
    /// ISO-8601 UTC with millisecond precision, e.g. `2025-01-31T09:15:02.481Z`.
    pub timestamp: String,
}

impl<'a> Envelope<'a> {
    pub fn new(user_id: &'a str, message: &'a str) -> Self {
        Self {
            user_id,
            message,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Delivers visitor messages to the responder webhook.
pub struct WebhookClient {
    pub(crate) config: WebhookConfig,
    pub(crate) http: reqwest::Client,
    pub(crate) authorization: HeaderValue,
}

impl WebhookClient {
    pub fn new(config: WebhookConfig) -> Result<Self, ChatError> {
        let authorization = authorization_header(&config.credential)
            .map_err(|e| ChatError::Http(format!("invalid webhook credential: {e}")))?;
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ChatError::Http(e.to_string()))?;

        Ok(Self {
            config,
            http,
            authorization,
        })
    }

    pub fn config(&self) -> &WebhookConfig {
        &self.config
    }
}

fn authorization_header(credential: &Credential) -> Result<HeaderValue, InvalidHeaderValue> {
    let raw = match credential {
        Credential::Bearer(token) => format!("Bearer {token}"),
        Credential::Basic { user, password } => {
            format!("Basic {}", STANDARD.encode(format!("{user}:{password}")))
        }
    };
    let mut value = HeaderValue::from_str(&raw)?;
    value.set_sensitive(true);
    Ok(value)
}

/// Pull a usable reply out of a 2xx body. `None` when `reply` is missing,
/// not a string, or blank.
pub(crate) fn parse_reply(json: &serde_json::Value) -> Option<String> {
    json.get("reply")
        .and_then(|r| r.as_str())
        .filter(|r| !r.trim().is_empty())
        .map(String::from)
}
