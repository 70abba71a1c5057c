//! Lead-capture record store settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadsSchemaConfig {
    pub api_base: String,
    pub table: String,
    /// Valid range: 1-300.
    pub request_timeout_secs: u32,
}

impl Default for LeadsSchemaConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.airtable.com/v0".into(),
            table: "Leads".into(),
            request_timeout_secs: 30,
        }
    }
}
