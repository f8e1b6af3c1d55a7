//! Twitter/X publish strategy.

use crate::{OauthCredentials, PublishStrategy};
use async_trait::async_trait;
use herald_core::PlatformKind;
use herald_error::{HeraldResult, HttpError, JsonError};
use reqwest::Client;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use tracing::{debug, error, instrument};

/// Messages endpoint of the Twitter/X API.
pub const TWITTER_MESSAGES_ENDPOINT: &str = "https://api.x.com/2/tweets";

/// Publishes composed text as a single message via the OAuth1.0a-signed
/// Twitter/X API.
#[derive(Debug, Clone)]
pub struct TwitterClient {
    client: Client,
    credentials: OauthCredentials,
    endpoint: String,
}

impl TwitterClient {
    /// Create a client posting to the production endpoint.
    pub fn new(credentials: OauthCredentials) -> Self {
        Self::with_endpoint(credentials, TWITTER_MESSAGES_ENDPOINT)
    }

    /// Create a client posting to a custom endpoint.
    pub fn with_endpoint(credentials: OauthCredentials, endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            credentials,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl PublishStrategy for TwitterClient {
    #[instrument(skip(self, text))]
    async fn publish(&self, text: &str) -> HeraldResult<Value> {
        // Signed fresh per request; the JSON body carries the message,
        // so only oauth_* parameters enter the signature.
        let header = self
            .credentials
            .sign_request("POST", &self.endpoint, &BTreeMap::new());

        debug!(chars = text.chars().count(), "Sending message");
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", header)
            .json(&json!({ "text": text }))
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                HttpError::new(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            error!(status = %status, body = %body, "Platform API error");
            return Err(HttpError::new(format!(
                "HTTP error! status: {}, body: {}",
                status.as_u16(),
                body
            ))
            .into());
        }

        let value: Value = serde_json::from_str(&body).map_err(|e| {
            error!(error = ?e, "Failed to parse platform response");
            JsonError::new(format!("Failed to parse JSON: {}", e))
        })?;

        debug!("Message accepted");
        Ok(value)
    }

    fn platform(&self) -> PlatformKind {
        PlatformKind::Twitter
    }
}
