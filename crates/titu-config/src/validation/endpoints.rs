//! Validation for the `[webhook]` and `[leads]` sections.

use crate::schema::TituConfig;

use super::helpers::{validate_http_url, validate_not_blank, validate_range};

pub(crate) fn validate_webhook(errors: &mut Vec<String>, config: &TituConfig) {
    let webhook = &config.webhook;
    // An empty url is allowed here; the environment must then supply it.
    if !webhook.url.is_empty() {
        validate_http_url(errors, "webhook.url", &webhook.url);
    }
    validate_range(
        errors,
        "webhook.connect_timeout_secs",
        webhook.connect_timeout_secs,
        1,
        120,
    );
    validate_range(
        errors,
        "webhook.request_timeout_secs",
        webhook.request_timeout_secs,
        1,
        300,
    );
}

pub(crate) fn validate_leads(errors: &mut Vec<String>, config: &TituConfig) {
    let leads = &config.leads;
    validate_http_url(errors, "leads.api_base", &leads.api_base);
    validate_not_blank(errors, "leads.table", &leads.table);
    validate_range(
        errors,
        "leads.request_timeout_secs",
        leads.request_timeout_secs,
        1,
        300,
    );
}
