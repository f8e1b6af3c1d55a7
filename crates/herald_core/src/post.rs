//! Scheduled post types.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Opaque unique identifier of a scheduled post.
///
/// The post store mints these; the core never inspects their shape.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Create a post id from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Identity of the signed-in user owning a set of posts.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a user id from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Lifecycle status of a scheduled post.
///
/// The core only performs the `Scheduled -> Published` and
/// `Scheduled -> Failed` transitions; `Draft` posts are never touched.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PostStatus {
    /// Not yet scheduled for publication.
    Draft,
    /// Waiting for its scheduled instant.
    Scheduled,
    /// A publish attempt succeeded.
    Published,
    /// A publish attempt failed.
    Failed,
}

/// Projection of a scheduled post as read from the external store.
#[derive(
    Debug, Clone, PartialEq, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ScheduledPost {
    /// Store-assigned identifier.
    id: PostId,

    /// Optional display title.
    #[builder(default)]
    #[serde(default)]
    title: Option<String>,

    /// Text body.
    content: String,

    /// Hashtags in display order.
    #[builder(default)]
    #[serde(default)]
    hashtags: Vec<String>,

    /// Target platform name, matched case-insensitively at dispatch.
    platform_name: String,

    /// UTC instant the post is due.
    scheduled_at: DateTime<Utc>,

    /// Current lifecycle status.
    status: PostStatus,

    /// Last status mutation, stamped by the store on update.
    #[builder(default)]
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl ScheduledPost {
    /// Apply a status transition, stamping the mutation instant.
    pub fn with_status(mut self, status: PostStatus, at: DateTime<Utc>) -> Self {
        self.status = status;
        self.updated_at = Some(at);
        self
    }
}
