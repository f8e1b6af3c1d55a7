//! Error types for the Herald post scheduling core.
//!
//! This crate provides the foundation error types used throughout the
//! Herald ecosystem. Each error kind carries the source location where
//! it was constructed, and all kinds aggregate into [`HeraldError`]
//! for transport across crate boundaries.

#![warn(missing_docs)]

mod alert;
mod config;
mod http;
mod json;
mod not_implemented;
mod store;
mod unsupported_platform;
mod validation;

pub use alert::AlertError;
pub use config::ConfigError;
pub use http::HttpError;
pub use json::JsonError;
pub use not_implemented::NotImplementedError;
pub use store::StoreError;
pub use unsupported_platform::UnsupportedPlatformError;
pub use validation::ValidationError;

/// Crate-level error variants.
#[derive(Debug, Clone, derive_more::From)]
pub enum HeraldErrorKind {
    /// Alert delivery error
    Alert(AlertError),
    /// Configuration error
    Config(ConfigError),
    /// HTTP error
    Http(HttpError),
    /// JSON serialization/deserialization error
    Json(JsonError),
    /// Feature not yet implemented
    NotImplemented(NotImplementedError),
    /// Post store error
    Store(StoreError),
    /// Platform name not in the registry
    UnsupportedPlatform(UnsupportedPlatformError),
    /// Request validation error
    Validation(ValidationError),
}

impl std::fmt::Display for HeraldErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeraldErrorKind::Alert(e) => write!(f, "{}", e),
            HeraldErrorKind::Config(e) => write!(f, "{}", e),
            HeraldErrorKind::Http(e) => write!(f, "{}", e),
            HeraldErrorKind::Json(e) => write!(f, "{}", e),
            HeraldErrorKind::NotImplemented(e) => write!(f, "{}", e),
            HeraldErrorKind::Store(e) => write!(f, "{}", e),
            HeraldErrorKind::UnsupportedPlatform(e) => write!(f, "{}", e),
            HeraldErrorKind::Validation(e) => write!(f, "{}", e),
        }
    }
}

/// Herald error with kind discrimination.
#[derive(Debug, Clone)]
pub struct HeraldError(Box<HeraldErrorKind>);

impl HeraldError {
    /// Create a new error from a kind.
    pub fn new(kind: HeraldErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &HeraldErrorKind {
        &self.0
    }

    /// The bare error message without the kind prefix or source location.
    ///
    /// This is the text surfaced to API callers in failure responses.
    pub fn message(&self) -> String {
        match self.kind() {
            HeraldErrorKind::Alert(e) => e.message.clone(),
            HeraldErrorKind::Config(e) => e.message.clone(),
            HeraldErrorKind::Http(e) => e.message.clone(),
            HeraldErrorKind::Json(e) => e.message.clone(),
            HeraldErrorKind::NotImplemented(e) => e.message.clone(),
            HeraldErrorKind::Store(e) => e.message.clone(),
            HeraldErrorKind::UnsupportedPlatform(e) => {
                format!("Unsupported platform: {}", e.platform)
            }
            HeraldErrorKind::Validation(e) => e.message.clone(),
        }
    }
}

impl std::fmt::Display for HeraldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Herald Error: {}", self.0)
    }
}

impl std::error::Error for HeraldError {}

// Generic From implementation for any type that converts to HeraldErrorKind
impl<T> From<T> for HeraldError
where
    T: Into<HeraldErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Herald operations.
pub type HeraldResult<T> = std::result::Result<T, HeraldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_converts_into_boxed_error() {
        let err: HeraldError = ConfigError::new("missing secret").into();
        assert!(matches!(err.kind(), HeraldErrorKind::Config(_)));
        assert!(err.to_string().contains("missing secret"));
    }

    #[test]
    fn message_strips_location() {
        let err: HeraldError = HttpError::new("HTTP error! status: 503").into();
        assert_eq!(err.message(), "HTTP error! status: 503");
        assert!(!err.message().contains("line"));
    }

    #[test]
    fn unsupported_platform_message_names_the_platform() {
        let err: HeraldError = UnsupportedPlatformError::new("mastodon").into();
        assert_eq!(err.message(), "Unsupported platform: mastodon");
    }
}
