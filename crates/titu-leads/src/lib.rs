//! Lead capture for the Titu landing page.
//!
//! A `LeadForm` collects a prospect's contact details and catalog choices,
//! validates them locally, and `LeadClient` stores the result as a new row
//! in the Airtable `Leads` table. Every outcome is reported to the surface
//! as a [`Notice`](titu_common::Notice).

pub mod airtable;
pub mod catalog;
pub mod form;
pub mod notices;

pub use airtable::{AirtableConfig, LeadClient};
pub use catalog::{Budget, CompanySize, Interest};
pub use form::{FormIssue, LeadForm, LeadRecord};

use titu_common::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum LeadError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid form: {0}")]
    Invalid(#[from] FormIssue),
    #[error("http client error: {0}")]
    Http(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("record store rejected the lead (HTTP {status}): {message}")]
    Api { status: u16, message: String },
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<LeadError> for titu_common::TituError {
    fn from(err: LeadError) -> Self {
        match err {
            LeadError::Config(e) => e.into(),
            other => titu_common::TituError::Lead(other.to_string()),
        }
    }
}
