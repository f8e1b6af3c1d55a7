//! Server configuration loaded from a TOML file.

use herald_error::{ConfigError, HeraldResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration for the herald binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeraldConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerSettings,
    /// Notification poller settings
    #[serde(default)]
    pub poller: PollerSettings,
}

impl HeraldConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or the TOML
    /// is invalid.
    pub fn from_file(path: impl AsRef<Path>) -> HeraldResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Self = toml::from_str(&contents).map_err(|e| {
            ConfigError::new(format!("Invalid TOML in {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    /// The address the HTTP server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Notification poller settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollerSettings {
    /// Whether the poller starts with the server
    #[serde(default)]
    pub enabled: bool,
    /// Identity whose posts are polled; the poller stays off without one
    #[serde(default)]
    pub identity: Option<String>,
    /// Seconds between poll ticks
    #[serde(default = "default_poll_interval")]
    pub interval_seconds: u64,
    /// Whether OS-level notifications are permitted
    #[serde(default)]
    pub desktop_notifications: bool,
}

impl Default for PollerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            identity: None,
            interval_seconds: default_poll_interval(),
            desktop_notifications: false,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_poll_interval() -> u64 {
    herald_notify::DEFAULT_POLL_INTERVAL_SECONDS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_fill_an_empty_config() {
        let config: HeraldConfig = toml::from_str("").unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert!(!config.poller.enabled);
        assert_eq!(config.poller.interval_seconds, 60);
    }

    #[test]
    fn from_file_parses_partial_settings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[server]\nport = 8080\n\n[poller]\nenabled = true\nidentity = \"user-1\"\n"
        )
        .unwrap();

        let config = HeraldConfig::from_file(file.path()).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert!(config.poller.enabled);
        assert_eq!(config.poller.identity.as_deref(), Some("user-1"));
        assert_eq!(config.poller.interval_seconds, 60);
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let err = HeraldConfig::from_file("/nonexistent/herald.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn invalid_toml_is_a_configuration_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[server\nport = 8080").unwrap();

        let err = HeraldConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid TOML"));
    }
}
