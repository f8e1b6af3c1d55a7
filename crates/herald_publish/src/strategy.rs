//! Publish strategy seam.

use async_trait::async_trait;
use herald_core::PlatformKind;
use herald_error::HeraldResult;
use serde_json::Value;

/// Platform-specific logic turning composed text into one outbound
/// API call.
#[async_trait]
pub trait PublishStrategy: Send + Sync {
    /// Deliver the composed text as a single message.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-success response;
    /// the error text carries the upstream status and body.
    async fn publish(&self, text: &str) -> HeraldResult<Value>;

    /// Platform this strategy posts to.
    fn platform(&self) -> PlatformKind;
}
