//! Lead submission: one POST per lead, no retry.

use reqwest::Url;
use serde::Serialize;
use titu_common::{new_correlation_id, Notice};
use tracing::{debug, info, warn};

use crate::form::{LeadForm, LeadRecord};
use crate::{notices, LeadError};

use super::config::AirtableConfig;

#[derive(Serialize)]
struct CreateRecords<'a> {
    records: [RecordFields<'a>; 1],
}

#[derive(Serialize)]
struct RecordFields<'a> {
    fields: &'a LeadRecord,
}

/// Stores validated leads as new rows of the configured table.
pub struct LeadClient {
    config: AirtableConfig,
    endpoint: Url,
    http: reqwest::Client,
}

impl LeadClient {
    pub fn new(config: AirtableConfig) -> Result<Self, LeadError> {
        let mut endpoint = Url::parse(&config.api_base)
            .map_err(|e| LeadError::Http(format!("invalid api base {}: {e}", config.api_base)))?;
        endpoint
            .path_segments_mut()
            .map_err(|()| LeadError::Http(format!("invalid api base {}", config.api_base)))?
            .pop_if_empty()
            .push(&config.base_id)
            .push(&config.table);

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| LeadError::Http(e.to_string()))?;

        Ok(Self {
            config,
            endpoint,
            http,
        })
    }

    /// `{api_base}/{base_id}/{table}`.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Create one record. Returns the store's record id when the response
    /// carries one.
    pub async fn submit(&self, record: &LeadRecord) -> Result<Option<String>, LeadError> {
        self.post(record, &new_correlation_id()).await
    }

    async fn post(
        &self,
        record: &LeadRecord,
        correlation_id: &str,
    ) -> Result<Option<String>, LeadError> {
        let body = CreateRecords {
            records: [RecordFields { fields: record }],
        };

        debug!(correlation_id = %correlation_id, table = %self.config.table, "lead store request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.config.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LeadError::Timeout
                } else {
                    LeadError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            let json: serde_json::Value = serde_json::from_str(&text).unwrap_or_default();
            return Err(LeadError::Api {
                status: status.as_u16(),
                message: api_error_message(&json),
            });
        }

        let json: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| LeadError::Parse(e.to_string()))?;
        let record_id = json["records"][0]["id"].as_str().map(String::from);
        if record_id.is_none() {
            warn!(
                correlation_id = %correlation_id,
                body = %truncate(&text),
                "lead accepted without a record id"
            );
        }
        Ok(record_id)
    }

    /// Validate, submit and report.
    ///
    /// The form is reset only after the store accepted the lead; on any
    /// failure it keeps what the prospect typed.
    pub async fn submit_form(&self, form: &mut LeadForm) -> Notice {
        let record = match form.validate() {
            Ok(record) => record,
            Err(issue) => {
                debug!(%issue, "lead form rejected");
                return issue.notice();
            }
        };

        let correlation_id = new_correlation_id();
        match self.post(&record, &correlation_id).await {
            Ok(record_id) => {
                info!(
                    correlation_id = %correlation_id,
                    record_id = record_id.as_deref().unwrap_or("-"),
                    "lead stored"
                );
                form.reset();
                notices::submitted()
            }
            Err(e) => {
                warn!(correlation_id = %correlation_id, error = %e, "lead submission failed");
                notices::transmission_failed()
            }
        }
    }
}

/// `error.message`, or `error` when the store sends a bare code.
fn api_error_message(json: &serde_json::Value) -> String {
    let error = &json["error"];
    error["message"]
        .as_str()
        .or_else(|| error.as_str())
        .unwrap_or("unknown error")
        .to_string()
}

fn truncate(text: &str) -> String {
    text.chars().take(200).collect()
}
