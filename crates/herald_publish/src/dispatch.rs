//! Platform dispatch.

use crate::PublishStrategy;
use herald_core::PlatformKind;
use herald_error::NotImplementedError;
use std::sync::Arc;

/// Implementation status of a platform in the registry.
pub enum PlatformSupport {
    /// A working integration exists.
    Implemented(Arc<dyn PublishStrategy>),
    /// The platform is recognized but has no working integration yet.
    Planned(PlatformKind),
}

/// Fixed registry mapping platform identifiers to publish strategies.
///
/// Resolution is exhaustive over [`PlatformKind`]: adding a platform
/// variant forces a decision here at compile time.
pub struct PlatformRegistry {
    twitter: Arc<dyn PublishStrategy>,
}

impl PlatformRegistry {
    /// Create a registry with the one implemented strategy.
    pub fn new(twitter: Arc<dyn PublishStrategy>) -> Self {
        Self { twitter }
    }

    /// Resolve a platform to its implementation status.
    pub fn resolve(&self, platform: PlatformKind) -> PlatformSupport {
        match platform {
            PlatformKind::Twitter => PlatformSupport::Implemented(Arc::clone(&self.twitter)),
            PlatformKind::Linkedin
            | PlatformKind::Facebook
            | PlatformKind::Instagram
            | PlatformKind::Tiktok
            | PlatformKind::Youtube => PlatformSupport::Planned(platform),
        }
    }
}

/// The failure raised when dispatching to a planned platform.
#[track_caller]
pub fn not_implemented(platform: PlatformKind) -> NotImplementedError {
    let name = platform.display_name();
    NotImplementedError::new(format!(
        "{} publishing not yet implemented. Please connect your {} API credentials.",
        name, name
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planned_platform_message_names_the_platform() {
        let err = not_implemented(PlatformKind::Linkedin);
        assert_eq!(
            err.message,
            "LinkedIn publishing not yet implemented. Please connect your LinkedIn API credentials."
        );
    }
}
