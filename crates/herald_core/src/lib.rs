//! Core data types for the Herald post scheduling core.
//!
//! This crate provides the foundation data types shared by the
//! notification poller and the publish pipeline.

mod compose;
mod platform;
mod post;

pub use compose::compose_text;
pub use platform::PlatformKind;
pub use post::{PostId, PostStatus, ScheduledPost, ScheduledPostBuilder, UserId};
