//! Airtable record store client for captured leads.

mod client;
mod config;

#[cfg(test)]
mod tests;

pub use client::LeadClient;
pub use config::AirtableConfig;
