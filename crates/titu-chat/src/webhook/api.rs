//! Responder implementation for WebhookClient (single POST, no retry).

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use titu_common::{new_correlation_id, SessionId};
use tracing::{debug, warn};

use crate::{DeliveryError, Responder};

use super::client::{parse_reply, Envelope, WebhookClient, CORRELATION_HEADER};

impl WebhookClient {
    /// One delivery attempt. `Ok(None)` means the responder answered 2xx
    /// without a usable reply.
    pub async fn try_deliver(
        &self,
        session_id: &SessionId,
        text: &str,
    ) -> Result<Option<String>, DeliveryError> {
        self.post(session_id, text, &new_correlation_id()).await
    }

    async fn post(
        &self,
        session_id: &SessionId,
        text: &str,
        correlation_id: &str,
    ) -> Result<Option<String>, DeliveryError> {
        let envelope = Envelope::new(session_id.as_str(), text);

        debug!(correlation_id = %correlation_id, url = %self.config.url, "webhook request");

        let response = self
            .http
            .post(&self.config.url)
            .header(AUTHORIZATION, self.authorization.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(CORRELATION_HEADER, correlation_id)
            .json(&envelope)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DeliveryError::Timeout
                } else {
                    DeliveryError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = body.chars().take(200).collect::<String>();
            return Err(DeliveryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| DeliveryError::Parse(e.to_string()))?;

        Ok(parse_reply(&json))
    }
}

#[async_trait]
impl Responder for WebhookClient {
    async fn deliver(&self, session_id: &SessionId, text: &str) -> String {
        let correlation_id = new_correlation_id();
        match self.post(session_id, text, &correlation_id).await {
            Ok(Some(reply)) => reply,
            Ok(None) => {
                warn!(correlation_id = %correlation_id, "webhook reply missing or blank");
                self.config.fallbacks.empty_reply.clone()
            }
            Err(e) => {
                warn!(correlation_id = %correlation_id, error = %e, "webhook delivery failed");
                self.config.fallbacks.connection.clone()
            }
        }
    }
}
