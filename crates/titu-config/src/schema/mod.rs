//! Configuration schema types for Titu.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Secrets (webhook and record-store credentials) are never part of the
//! file schema; they are read from the environment at startup.

mod chat;
mod leads;
mod system;
mod webhook;

pub use chat::*;
pub use leads::*;
pub use system::*;
pub use webhook::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Titu.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TituConfig {
    pub chat: ChatConfig,
    pub webhook: WebhookSchemaConfig,
    pub leads: LeadsSchemaConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chat_section() {
        let config = TituConfig::default();
        assert_eq!(config.chat.greeting, "👋 Hola, soy Titu ¿En qué puedo ayudarte hoy?");
        assert_eq!(config.chat.typing_delay_ms, 2000);
        assert_eq!(config.chat.idle_interval_ms, 6000);
        assert_eq!(config.chat.idle_shake_ms, 600);
        assert_eq!(config.chat.quick_replies.len(), 2);
        assert_eq!(config.chat.quick_replies[0].id, "1");
        assert_eq!(config.chat.quick_replies[0].label, "Consultas");
        assert_eq!(config.chat.quick_replies[1].label, "Agendar Asesoría");
    }

    #[test]
    fn default_webhook_section_has_no_endpoint() {
        let config = TituConfig::default();
        assert!(config.webhook.url.is_empty());
        assert_eq!(config.webhook.auth_scheme, AuthScheme::Basic);
        assert_eq!(config.webhook.connect_timeout_secs, 10);
        assert_eq!(config.webhook.request_timeout_secs, 30);
    }

    #[test]
    fn default_leads_section() {
        let config = TituConfig::default();
        assert_eq!(config.leads.api_base, "https://api.airtable.com/v0");
        assert_eq!(config.leads.table, "Leads");
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: TituConfig = toml::from_str(
            r#"
[chat]
typing_delay_ms = 500

[webhook]
auth_scheme = "bearer"
"#,
        )
        .unwrap();
        assert_eq!(config.chat.typing_delay_ms, 500);
        assert_eq!(config.chat.idle_interval_ms, 6000);
        assert_eq!(config.webhook.auth_scheme, AuthScheme::Bearer);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn quick_replies_can_be_replaced() {
        let config: TituConfig = toml::from_str(
            r#"
[[chat.quick_replies]]
id = "a"
label = "Precios"
"#,
        )
        .unwrap();
        assert_eq!(config.chat.quick_replies.len(), 1);
        assert_eq!(config.chat.quick_replies[0].label, "Precios");
    }
}
