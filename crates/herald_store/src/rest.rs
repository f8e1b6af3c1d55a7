//! REST adapter for a PostgREST-style post store API.

use crate::PostStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use herald_core::{PostId, PostStatus, ScheduledPost, UserId};
use herald_error::{ConfigError, HeraldResult, HttpError, JsonError, StoreError};
use reqwest::Client;
use serde_json::json;
use tracing::{debug, error, instrument};

/// Columns fetched for the poller/pipeline projection.
const POST_PROJECTION: &str =
    "id,title,content,hashtags,platform_name,scheduled_at,status,updated_at";

/// Connection settings for the REST post store.
#[derive(Clone)]
pub struct RestStoreConfig {
    base_url: String,
    service_key: String,
}

impl RestStoreConfig {
    /// Create a config from explicit values.
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            service_key: service_key.into(),
        }
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `HERALD_STORE_URL` (required)
    /// - `HERALD_STORE_SERVICE_KEY` (required)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when either variable is absent.
    pub fn from_env() -> HeraldResult<Self> {
        let base_url = std::env::var("HERALD_STORE_URL")
            .map_err(|_| ConfigError::new("Missing HERALD_STORE_URL environment variable"))?;
        let service_key = std::env::var("HERALD_STORE_SERVICE_KEY").map_err(|_| {
            ConfigError::new("Missing HERALD_STORE_SERVICE_KEY environment variable")
        })?;
        Ok(Self::new(base_url.trim(), service_key.trim()))
    }

    /// Base URL of the store API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for RestStoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestStoreConfig")
            .field("base_url", &self.base_url)
            .field("service_key", &"[redacted]")
            .finish()
    }
}

/// Post store backed by a PostgREST-style HTTP API.
#[derive(Debug, Clone)]
pub struct RestPostStore {
    client: Client,
    config: RestStoreConfig,
}

impl RestPostStore {
    /// Create a new REST store client.
    pub fn new(config: RestStoreConfig) -> Self {
        debug!(url = %config.base_url, "Created REST post store");
        Self {
            client: Client::new(),
            config,
        }
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl PostStore for RestPostStore {
    #[instrument(skip(self), fields(owner = %owner))]
    async fn due_posts(
        &self,
        owner: &UserId,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> HeraldResult<Vec<ScheduledPost>> {
        let response = self
            .client
            .get(self.posts_url())
            .header("apikey", &self.config.service_key)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.service_key),
            )
            .query(&[
                ("select", POST_PROJECTION.to_string()),
                ("user_id", format!("eq.{owner}")),
                ("status", format!("eq.{}", PostStatus::Scheduled)),
                ("scheduled_at", format!("gte.{}", from.to_rfc3339())),
                ("scheduled_at", format!("lte.{}", until.to_rfc3339())),
            ])
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                HttpError::new(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "Store query failed");
            return Err(StoreError::new(format!(
                "Query failed with status {}: {}",
                status, error_text
            ))
            .into());
        }

        let posts: Vec<ScheduledPost> = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse store response");
            JsonError::new(format!("Failed to parse JSON: {}", e))
        })?;

        debug!(count = posts.len(), "Fetched due posts");
        Ok(posts)
    }

    #[instrument(skip(self), fields(post_id = %id, status = %status))]
    async fn update_status(&self, id: &PostId, status: PostStatus) -> HeraldResult<()> {
        let response = self
            .client
            .patch(self.posts_url())
            .header("apikey", &self.config.service_key)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.service_key),
            )
            .header("Prefer", "return=minimal")
            .query(&[("id", format!("eq.{id}"))])
            .json(&json!({
                "status": status.to_string(),
                "updated_at": Utc::now().to_rfc3339(),
            }))
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                HttpError::new(format!("Request failed: {}", e))
            })?;

        let http_status = response.status();
        if !http_status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %http_status, error = %error_text, "Status update failed");
            return Err(StoreError::new(format!(
                "Update failed with status {}: {}",
                http_status, error_text
            ))
            .into());
        }

        debug!("Post status updated");
        Ok(())
    }
}
