//! Full configuration validation.
//!
//! Validates numeric ranges, quick-reply catalog shape and endpoint URLs.
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod chat;
mod endpoints;
mod helpers;

#[cfg(test)]
mod tests;

pub use helpers::is_http_url;

use crate::schema::TituConfig;
use titu_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TituConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    chat::validate_timing(&mut errors, config);
    chat::validate_texts(&mut errors, config);
    chat::validate_quick_replies(&mut errors, config);
    endpoints::validate_webhook(&mut errors, config);
    endpoints::validate_leads(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
