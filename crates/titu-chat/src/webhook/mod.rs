//! Responder webhook client.
//!
//! Posts each visitor message as a JSON envelope to the configured endpoint
//! and turns whatever comes back (or doesn't) into displayable reply text.
//! Endpoint and credential are resolved from config plus environment; a
//! missing credential is a configuration error, never a built-in default.

mod api;
mod client;
mod config;


pub use client::{Envelope, WebhookClient, CORRELATION_HEADER};
pub use config::{Credential, Fallbacks, WebhookConfig};
