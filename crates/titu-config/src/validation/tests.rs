//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = TituConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_typing_delay_too_large() {
    let mut config = TituConfig::default();
    config.chat.typing_delay_ms = 60_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.typing_delay_ms"));
}

#[test]
fn zero_typing_delay_is_allowed() {
    let mut config = TituConfig::default();
    config.chat.typing_delay_ms = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_shake_longer_than_interval() {
    let mut config = TituConfig::default();
    config.chat.idle_interval_ms = 1_000;
    config.chat.idle_shake_ms = 2_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("must be shorter than chat.idle_interval_ms"));
}

#[test]
fn catches_blank_fallback() {
    let mut config = TituConfig::default();
    config.chat.connection_fallback = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.connection_fallback must not be empty"));
}

#[test]
fn catches_empty_quick_reply_catalog() {
    let mut config = TituConfig::default();
    config.chat.quick_replies.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("at least one option"));
}

#[test]
fn catches_duplicate_quick_reply_ids() {
    let mut config = TituConfig::default();
    config.chat.quick_replies[1].id = "1".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("duplicate id"));
}

#[test]
fn catches_non_http_webhook_url() {
    let mut config = TituConfig::default();
    config.webhook.url = "ftp://example.com/hook".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("webhook.url"));
}

#[test]
fn accepts_configured_webhook_url() {
    let mut config = TituConfig::default();
    config.webhook.url = "http://localhost:5678/webhook/chatbot".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_timeouts() {
    let mut config = TituConfig::default();
    config.webhook.request_timeout_secs = 0;
    config.leads.request_timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("webhook.request_timeout_secs"));
    assert!(err.contains("leads.request_timeout_secs"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = TituConfig::default();
    config.chat.greeting = String::new();
    config.leads.table = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("chat.greeting"));
    assert!(err.contains("leads.table"));
    assert!(err.contains("; "));
}
