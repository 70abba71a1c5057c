//! Airtable client configuration.

use std::fmt;
use std::time::Duration;

use titu_common::ConfigError;
use titu_config::TituConfig;

pub const ENV_BASE_ID: &str = "TITU_AIRTABLE_BASE_ID";
pub const ENV_TOKEN: &str = "TITU_AIRTABLE_TOKEN";

#[derive(Clone)]
pub struct AirtableConfig {
    pub api_base: String,
    pub base_id: String,
    pub table: String,
    pub token: String,
    pub request_timeout: Duration,
}

impl fmt::Debug for AirtableConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AirtableConfig")
            .field("api_base", &self.api_base)
            .field("base_id", &self.base_id)
            .field("table", &self.table)
            .field("token", &"[REDACTED]")
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl AirtableConfig {
    pub fn new(base_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_base: "https://api.airtable.com/v0".to_string(),
            base_id: base_id.into(),
            table: "Leads".to_string(),
            token: token.into(),
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Resolve from `[leads]` plus `TITU_AIRTABLE_BASE_ID` and
    /// `TITU_AIRTABLE_TOKEN`. Both variables are required.
    pub fn from_env(config: &TituConfig) -> Result<Self, ConfigError> {
        Self::from_lookup(config, |key| std::env::var(key).ok())
    }

    pub fn from_lookup(
        config: &TituConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingSetting(format!("lead store: set {key}")))
        };

        Ok(Self {
            api_base: config.leads.api_base.clone(),
            base_id: require(ENV_BASE_ID)?,
            table: config.leads.table.clone(),
            token: require(ENV_TOKEN)?,
            request_timeout: Duration::from_secs(config.leads.request_timeout_secs.into()),
        })
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}
