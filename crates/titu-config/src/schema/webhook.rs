//! Responder webhook configuration types.

use serde::{Deserialize, Serialize};

/// Authorization scheme for the responder webhook.
///
/// The credential itself always comes from the environment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthScheme {
    Bearer,
    #[default]
    Basic,
}

/// Responder webhook endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookSchemaConfig {
    /// Endpoint URL. Empty means "must come from `TITU_WEBHOOK_URL`".
    pub url: String,
    pub auth_scheme: AuthScheme,
    /// Valid range: 1-120.
    pub connect_timeout_secs: u32,
    /// Valid range: 1-300.
    pub request_timeout_secs: u32,
}

impl Default for WebhookSchemaConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            auth_scheme: AuthScheme::Basic,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}
