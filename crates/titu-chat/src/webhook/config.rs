//! Webhook client configuration.

use std::fmt;
use std::time::Duration;

use titu_common::ConfigError;
use titu_config::schema::{AuthScheme, ChatConfig};
use titu_config::validation::is_http_url;
use titu_config::TituConfig;

pub const ENV_URL: &str = "TITU_WEBHOOK_URL";
pub const ENV_TOKEN: &str = "TITU_WEBHOOK_TOKEN";
pub const ENV_USER: &str = "TITU_WEBHOOK_USER";
pub const ENV_PASSWORD: &str = "TITU_WEBHOOK_PASSWORD";

/// Credential sent in the `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    Bearer(String),
    Basic { user: String, password: String },
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer(_) => f.debug_tuple("Bearer").field(&"[REDACTED]").finish(),
            Self::Basic { user, .. } => f
                .debug_struct("Basic")
                .field("user", user)
                .field("password", &"[REDACTED]")
                .finish(),
        }
    }
}

/// Reply texts used when the responder gives nothing usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallbacks {
    /// 2xx without a non-blank `reply`.
    pub empty_reply: String,
    /// Non-2xx, transport failure, timeout or malformed body.
    pub connection: String,
}

impl From<&ChatConfig> for Fallbacks {
    fn from(chat: &ChatConfig) -> Self {
        Self {
            empty_reply: chat.empty_reply_fallback.clone(),
            connection: chat.connection_fallback.clone(),
        }
    }
}

impl Default for Fallbacks {
    fn default() -> Self {
        Self::from(&ChatConfig::default())
    }
}

/// Resolved webhook client configuration.
#[derive(Clone)]
pub struct WebhookConfig {
    pub url: String,
    pub credential: Credential,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub fallbacks: Fallbacks,
}

impl fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("url", &self.url)
            .field("credential", &self.credential)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .field("fallbacks", &self.fallbacks)
            .finish()
    }
}

impl WebhookConfig {
    pub fn new(url: impl Into<String>, credential: Credential) -> Self {
        Self {
            url: url.into(),
            credential,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            fallbacks: Fallbacks::default(),
        }
    }

    /// Resolve from the loaded config and the process environment.
    ///
    /// `TITU_WEBHOOK_URL` overrides `[webhook].url`; either way the result
    /// must be an http(s) URL. The credential comes
    /// from `TITU_WEBHOOK_TOKEN` (bearer) or `TITU_WEBHOOK_USER` +
    /// `TITU_WEBHOOK_PASSWORD` (basic), per `[webhook].auth_scheme`.
    pub fn from_env(config: &TituConfig) -> Result<Self, ConfigError> {
        Self::from_lookup(config, |key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable lookup.
    pub fn from_lookup(
        config: &TituConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let url = var(ENV_URL)
            .or_else(|| Some(config.webhook.url.clone()).filter(|u| !u.trim().is_empty()))
            .ok_or_else(|| {
                ConfigError::MissingSetting(format!(
                    "webhook endpoint: set {ENV_URL} or [webhook].url"
                ))
            })?;
        if !is_http_url(&url) {
            return Err(ConfigError::ValidationError(format!(
                "webhook endpoint {url:?} must start with http:// or https://"
            )));
        }

        let credential = match config.webhook.auth_scheme {
            AuthScheme::Bearer => Credential::Bearer(var(ENV_TOKEN).ok_or_else(|| {
                ConfigError::MissingSetting(format!("webhook credential: set {ENV_TOKEN}"))
            })?),
            AuthScheme::Basic => match (var(ENV_USER), var(ENV_PASSWORD)) {
                (Some(user), Some(password)) => Credential::Basic { user, password },
                _ => {
                    return Err(ConfigError::MissingSetting(format!(
                        "webhook credential: set {ENV_USER} and {ENV_PASSWORD}"
                    )))
                }
            },
        };

        Ok(Self {
            url,
            credential,
            connect_timeout: Duration::from_secs(config.webhook.connect_timeout_secs.into()),
            request_timeout: Duration::from_secs(config.webhook.request_timeout_secs.into()),
            fallbacks: Fallbacks::from(&config.chat),
        })
    }

    pub fn with_fallbacks(mut self, fallbacks: Fallbacks) -> Self {
        self.fallbacks = fallbacks;
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, request: Duration) -> Self {
        self.connect_timeout = connect;
        self.request_timeout = request;
        self
    }
}
