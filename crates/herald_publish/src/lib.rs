//! OAuth1.0a-signed publish pipeline for Herald.
//!
//! Given a post's platform, content and hashtags, this crate formats
//! the payload, signs one request per attempt, calls the target
//! platform's API and reports the outcome for persistence.

#![warn(missing_docs)]

mod dispatch;
mod oauth;
mod pipeline;
mod strategy;
mod twitter;

pub use dispatch::{PlatformRegistry, PlatformSupport, not_implemented};
pub use oauth::{
    OAUTH_VERSION, OauthCredentials, SIGNATURE_METHOD, authorization_header, percent_encode,
};
pub use pipeline::{PublishOrder, PublishPipeline, PublishReceipt, PublishRequest};
pub use strategy::PublishStrategy;
pub use twitter::{TWITTER_MESSAGES_ENDPOINT, TwitterClient};
