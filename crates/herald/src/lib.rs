//! Herald: due-post notifications and OAuth1.0a publishing.
//!
//! Facade crate re-exporting the Herald workspace and housing the CLI
//! for the `herald` binary.

pub mod cli;
mod config;

pub use config::{HeraldConfig, PollerSettings, ServerSettings};

pub use herald_core::{
    PlatformKind, PostId, PostStatus, ScheduledPost, ScheduledPostBuilder, UserId, compose_text,
};
pub use herald_error::{HeraldError, HeraldErrorKind, HeraldResult};
pub use herald_notify::{
    Alert, AlertKind, AlertSink, NotificationPoller, NotificationService, NotifiedSet,
};
pub use herald_publish::{
    OauthCredentials, PlatformRegistry, PublishPipeline, PublishRequest, PublishStrategy,
    TwitterClient,
};
pub use herald_server::create_router;
pub use herald_store::{InMemoryPostStore, PostStore, RestPostStore, RestStoreConfig};
