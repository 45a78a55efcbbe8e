//! Panel configuration module
//!
//! Settings are layered: built-in defaults first, then environment
//! variables prefixed with `ADMIN_PANEL_`.

use std::time::Duration;

use ::config::{Config, Environment};
use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};

/// Environment prefix for every panel setting
pub const ENV_PREFIX: &str = "ADMIN_PANEL";

/// Default users collection endpoint
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/users";

/// Default notification display window in milliseconds
pub const DEFAULT_NOTICE_MILLIS: u64 = 2500;

/// Default tracing filter directive
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration for the admin panel client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PanelConfig {
    /// Users collection endpoint (e.g., "http://localhost:8080/api/users")
    pub api_url: String,
    /// How long a notification stays visible
    pub notice_millis: u64,
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            notice_millis: DEFAULT_NOTICE_MILLIS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl PanelConfig {
    /// Create a new PanelConfig from environment variables
    ///
    /// # Environment Variables
    /// - `ADMIN_PANEL_API_URL`: users collection endpoint (default: "http://localhost:8080/api/users")
    /// - `ADMIN_PANEL_NOTICE_MILLIS`: notification window (default: 2500)
    /// - `ADMIN_PANEL_LOG_FILTER`: tracing directive (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let settings = Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .set_default("notice_millis", DEFAULT_NOTICE_MILLIS as i64)?
            .set_default("log_filter", DEFAULT_LOG_FILTER)?
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: PanelConfig = settings.try_deserialize()?;
        config.validated()
    }

    /// Check invariants and normalise the endpoint
    pub fn validated(mut self) -> ConfigResult<Self> {
        let api_url = self.api_url.trim().trim_end_matches('/').to_string();
        if api_url.is_empty() {
            return Err(ConfigError::Invalid("api_url must not be empty".to_string()));
        }
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "api_url must be an http(s) URL, got {api_url}"
            )));
        }
        if self.notice_millis == 0 {
            return Err(ConfigError::Invalid(
                "notice_millis must be greater than zero".to_string(),
            ));
        }

        self.api_url = api_url;
        Ok(self)
    }

    /// Notification display window
    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "ADMIN_PANEL_API_URL",
            "ADMIN_PANEL_NOTICE_MILLIS",
            "ADMIN_PANEL_LOG_FILTER",
        ] {
            // SAFETY: tests touching the environment are serialised.
            unsafe { std::env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn test_panel_config_from_env_defaults() {
        clear_env();
        let config = PanelConfig::from_env().expect("Failed to create panel config");
        assert_eq!(config, PanelConfig::default());
        assert_eq!(config.notice_duration(), Duration::from_millis(2500));
    }

    #[test]
    #[serial]
    fn test_panel_config_from_env_overrides() {
        clear_env();
        // SAFETY: tests touching the environment are serialised.
        unsafe {
            std::env::set_var("ADMIN_PANEL_API_URL", "https://admin.example.com/api/users/");
            std::env::set_var("ADMIN_PANEL_NOTICE_MILLIS", "1000");
        }

        let config = PanelConfig::from_env().expect("Failed to create panel config");
        clear_env();

        assert_eq!(config.api_url, "https://admin.example.com/api/users");
        assert_eq!(config.notice_millis, 1000);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_validated_rejects_bad_values() {
        let config = PanelConfig {
            api_url: "localhost:8080/api/users".to_string(),
            ..PanelConfig::default()
        };
        assert!(matches!(config.validated(), Err(ConfigError::Invalid(_))));

        let config = PanelConfig {
            notice_millis: 0,
            ..PanelConfig::default()
        };
        assert!(matches!(config.validated(), Err(ConfigError::Invalid(_))));

        let config = PanelConfig {
            api_url: "   ".to_string(),
            ..PanelConfig::default()
        };
        assert!(config.validated().is_err());
    }
}
