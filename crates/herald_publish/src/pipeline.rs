//! Publish pipeline orchestration.

use crate::{PlatformRegistry, PlatformSupport, not_implemented};
use derive_getters::Getters;
use herald_core::{PlatformKind, PostId, PostStatus, compose_text};
use herald_error::{HeraldResult, ValidationError};
use herald_store::PostStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Incoming publish request, exactly as received on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    /// Post to publish.
    #[serde(default)]
    post_id: Option<String>,
    /// Target platform name.
    #[serde(default)]
    platform: Option<String>,
    /// Text body.
    #[serde(default)]
    content: Option<String>,
    /// Hashtags in display order.
    #[serde(default)]
    hashtags: Option<Vec<String>>,
}

impl PublishRequest {
    /// Create a fully-populated request.
    pub fn new(
        post_id: impl Into<String>,
        platform: impl Into<String>,
        content: impl Into<String>,
        hashtags: Vec<String>,
    ) -> Self {
        Self {
            post_id: Some(post_id.into()),
            platform: Some(platform.into()),
            content: Some(content.into()),
            hashtags: Some(hashtags),
        }
    }

    /// Check the required fields and produce a validated order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when `postId`, `platform` or
    /// `content` is absent or empty. Validation failures never touch
    /// the store.
    pub fn validate(&self) -> Result<PublishOrder, ValidationError> {
        let (Some(post_id), Some(platform), Some(content)) = (
            self.post_id.as_deref(),
            self.platform.as_deref(),
            self.content.as_deref(),
        ) else {
            return Err(missing_fields());
        };
        if post_id.is_empty() || platform.is_empty() || content.is_empty() {
            return Err(missing_fields());
        }

        Ok(PublishOrder {
            post_id: PostId::new(post_id),
            platform: platform.to_string(),
            content: content.to_string(),
            hashtags: self.hashtags.clone().unwrap_or_default(),
        })
    }
}

#[track_caller]
fn missing_fields() -> ValidationError {
    ValidationError::new("Missing required fields: postId, platform, and content are required")
}

/// A validated publish order.
#[derive(Debug, Clone, Getters)]
pub struct PublishOrder {
    /// Post to publish.
    post_id: PostId,
    /// Platform name as received, matched case-insensitively.
    platform: String,
    /// Text body.
    content: String,
    /// Hashtags in display order.
    hashtags: Vec<String>,
}

/// Outcome of a successful publish attempt.
#[derive(Debug, Clone, Getters)]
pub struct PublishReceipt {
    /// Raw platform response body.
    result: Value,
    /// Platform name echoed from the request.
    platform: String,
}

/// Orchestrates one publish attempt per invocation.
///
/// Stateless across invocations: nothing is shared but the store's
/// persisted status field. Two concurrent invocations for the same
/// post can both dispatch and both mutate status, last write wins.
pub struct PublishPipeline {
    store: Arc<dyn PostStore>,
    registry: PlatformRegistry,
}

impl PublishPipeline {
    /// Create a pipeline over the given store and platform registry.
    pub fn new(store: Arc<dyn PostStore>, registry: PlatformRegistry) -> Self {
        Self { store, registry }
    }

    /// Attempt exactly one publish, then persist the outcome.
    ///
    /// On success the post is marked `published`; on any dispatch
    /// failure it is marked `failed` and the error is returned. A
    /// store failure while recording the outcome is logged and does
    /// not displace the primary result. No retries.
    #[instrument(skip(self, request))]
    pub async fn publish(&self, request: &PublishRequest) -> HeraldResult<PublishReceipt> {
        let order = request.validate()?;
        info!(post_id = %order.post_id(), platform = %order.platform(), "Publishing post");

        match self.dispatch(&order).await {
            Ok(result) => {
                self.record_outcome(order.post_id(), PostStatus::Published)
                    .await;
                Ok(PublishReceipt {
                    result,
                    platform: order.platform().clone(),
                })
            }
            Err(e) => {
                error!(platform = %order.platform(), error = %e, "Publish failed");
                self.record_outcome(order.post_id(), PostStatus::Failed)
                    .await;
                Err(e)
            }
        }
    }

    async fn dispatch(&self, order: &PublishOrder) -> HeraldResult<Value> {
        let text = compose_text(order.content(), order.hashtags());
        let kind = PlatformKind::from_name(order.platform())?;
        match self.registry.resolve(kind) {
            PlatformSupport::Implemented(strategy) => strategy.publish(&text).await,
            PlatformSupport::Planned(platform) => Err(not_implemented(platform).into()),
        }
    }

    async fn record_outcome(&self, id: &PostId, status: PostStatus) {
        if let Err(e) = self.store.update_status(id, status).await {
            error!(post_id = %id, error = %e, "Error updating post status");
        }
    }
}
