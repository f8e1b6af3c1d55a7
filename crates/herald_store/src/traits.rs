//! Post store trait definition.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use herald_core::{PostId, PostStatus, ScheduledPost, UserId};
use herald_error::HeraldResult;

/// Persistence contract for scheduled posts.
///
/// The store provides at most last-write-wins consistency per record;
/// no transaction or locking discipline is imposed here.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Scheduled posts belonging to `owner` with `scheduled_at` inside
    /// `[from, until]`, in store order.
    ///
    /// Only posts with status `scheduled` are returned.
    async fn due_posts(
        &self,
        owner: &UserId,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> HeraldResult<Vec<ScheduledPost>>;

    /// Update a single post's status, stamping `updated_at`.
    async fn update_status(&self, id: &PostId, status: PostStatus) -> HeraldResult<()>;
}
