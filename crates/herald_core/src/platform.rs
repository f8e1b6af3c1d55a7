//! Target platform identifiers.

use herald_error::UnsupportedPlatformError;
use serde::{Deserialize, Serialize};

/// Known target platforms.
///
/// The set is closed: a platform name outside it is an unsupported
/// platform, distinct from a recognized platform without a working
/// integration. Dispatch matches names case-insensitively.
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
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlatformKind {
    /// Twitter/X, the one platform with a working integration.
    #[strum(to_string = "twitter", serialize = "twitter/x")]
    Twitter,
    /// LinkedIn.
    Linkedin,
    /// Facebook.
    Facebook,
    /// Instagram.
    Instagram,
    /// TikTok.
    Tiktok,
    /// YouTube.
    Youtube,
}

impl PlatformKind {
    /// Resolve a platform name as received in a publish request.
    ///
    /// Matching is case-insensitive and accepts the `twitter/x` alias.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedPlatformError`] when the name is not in the
    /// registry.
    pub fn from_name(name: &str) -> Result<Self, UnsupportedPlatformError> {
        name.parse::<Self>()
            .map_err(|_| UnsupportedPlatformError::new(name))
    }

    /// Human-facing platform name, used in operator-visible messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Linkedin => "LinkedIn",
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::Tiktok => "TikTok",
            Self::Youtube => "YouTube",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_names_case_insensitively() {
        assert_eq!(PlatformKind::from_name("Twitter"), Ok(PlatformKind::Twitter));
        assert_eq!(PlatformKind::from_name("LINKEDIN"), Ok(PlatformKind::Linkedin));
        assert_eq!(PlatformKind::from_name("tikTok"), Ok(PlatformKind::Tiktok));
    }

    #[test]
    fn accepts_the_twitter_x_alias() {
        assert_eq!(
            PlatformKind::from_name("twitter/x"),
            Ok(PlatformKind::Twitter)
        );
        assert_eq!(
            PlatformKind::from_name("Twitter/X"),
            Ok(PlatformKind::Twitter)
        );
    }

    #[test]
    fn rejects_unknown_platforms() {
        let err = PlatformKind::from_name("mastodon").unwrap_err();
        assert_eq!(err.platform, "mastodon");
    }
}
