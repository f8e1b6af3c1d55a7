//! In-memory implementation of PostStore for testing.
//!
//! This module provides a simple HashMap-based store that keeps posts
//! in memory. Useful for unit tests and demonstrating the trait
//! interface.

use crate::PostStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use herald_core::{PostId, PostStatus, ScheduledPost, UserId};
use herald_error::{HeraldResult, StoreError};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory post store.
///
/// Stores posts in a HashMap protected by an RwLock for thread-safe
/// access. All data is lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPostStore {
    /// Storage for posts with their owner, keyed by post id
    posts: Arc<RwLock<HashMap<PostId, OwnedPost>>>,
}

/// Internal storage structure pairing a post with its owner.
#[derive(Debug, Clone)]
struct OwnedPost {
    owner: UserId,
    post: ScheduledPost,
}

impl InMemoryPostStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a post for the given owner, replacing any prior record
    /// with the same id.
    pub async fn insert(&self, owner: UserId, post: ScheduledPost) {
        let id = post.id().clone();
        self.posts.write().await.insert(id, OwnedPost { owner, post });
    }

    /// Fetch a post by id (for testing).
    pub async fn get(&self, id: &PostId) -> Option<ScheduledPost> {
        self.posts.read().await.get(id).map(|owned| owned.post.clone())
    }

    /// Get the number of stored posts (for testing).
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    /// Check if the store is empty (for testing).
    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }

    /// Clear all posts (for testing).
    pub async fn clear(&self) {
        self.posts.write().await.clear();
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn due_posts(
        &self,
        owner: &UserId,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> HeraldResult<Vec<ScheduledPost>> {
        let posts = self.posts.read().await;
        Ok(posts
            .values()
            .filter(|owned| owned.owner == *owner)
            .filter(|owned| *owned.post.status() == PostStatus::Scheduled)
            .filter(|owned| {
                let at = *owned.post.scheduled_at();
                at >= from && at <= until
            })
            .map(|owned| owned.post.clone())
            .collect())
    }

    async fn update_status(&self, id: &PostId, status: PostStatus) -> HeraldResult<()> {
        let mut posts = self.posts.write().await;
        match posts.get_mut(id) {
            Some(owned) => {
                owned.post = owned.post.clone().with_status(status, Utc::now());
                Ok(())
            }
            None => Err(StoreError::new(format!("Post {} not found", id)).into()),
        }
    }
}
