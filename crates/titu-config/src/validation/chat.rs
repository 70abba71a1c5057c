//! Validation for the `[chat]` section.

use std::collections::HashSet;

use crate::schema::TituConfig;

use super::helpers::{validate_not_blank, validate_range};

/// Validate typing latency and idle cue timing.
pub(crate) fn validate_timing(errors: &mut Vec<String>, config: &TituConfig) {
    let chat = &config.chat;
    validate_range(errors, "chat.typing_delay_ms", chat.typing_delay_ms, 0, 30_000);
    validate_range(
        errors,
        "chat.idle_interval_ms",
        chat.idle_interval_ms,
        1_000,
        600_000,
    );
    validate_range(errors, "chat.idle_shake_ms", chat.idle_shake_ms, 50, 5_000);

    if chat.idle_shake_ms >= chat.idle_interval_ms {
        errors.push(format!(
            "chat.idle_shake_ms = {} must be shorter than chat.idle_interval_ms = {}",
            chat.idle_shake_ms, chat.idle_interval_ms
        ));
    }
}

/// Greeting and fallback replies are shown verbatim and must be non-empty.
pub(crate) fn validate_texts(errors: &mut Vec<String>, config: &TituConfig) {
    let chat = &config.chat;
    validate_not_blank(errors, "chat.greeting", &chat.greeting);
    validate_not_blank(errors, "chat.empty_reply_fallback", &chat.empty_reply_fallback);
    validate_not_blank(errors, "chat.connection_fallback", &chat.connection_fallback);
}

/// Quick replies need unique ids and visible labels.
pub(crate) fn validate_quick_replies(errors: &mut Vec<String>, config: &TituConfig) {
    let replies = &config.chat.quick_replies;
    if replies.is_empty() {
        errors.push("chat.quick_replies must offer at least one option".into());
    }

    let mut seen = HashSet::new();
    for (i, reply) in replies.iter().enumerate() {
        validate_not_blank(errors, &format!("chat.quick_replies[{i}].id"), &reply.id);
        validate_not_blank(errors, &format!("chat.quick_replies[{i}].label"), &reply.label);
        if !seen.insert(reply.id.as_str()) {
            errors.push(format!("chat.quick_replies: duplicate id {:?}", reply.id));
        }
    }
}
