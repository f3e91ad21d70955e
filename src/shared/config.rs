//! Application configuration. Provider endpoint, timeouts, offline mode.

use serde::Deserialize;
use std::time::Duration;

/// Open Trivia DB question endpoint.
pub const DEFAULT_API_URL: &str = "https://opentdb.com/api.php";

/// Default simulated latency for the offline provider.
pub const DEFAULT_OFFLINE_DELAY_MS: u64 = 300;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Question endpoint. Read from TRIVIA_API_URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Request timeout in seconds; unset keeps the HTTP client's default. Read from TRIVIA_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Serve built-in questions instead of calling the API. Read from TRIVIA_OFFLINE.
    #[serde(default)]
    pub offline: Option<bool>,

    /// Offline provider delay in ms. Read from TRIVIA_OFFLINE_DELAY_MS.
    #[serde(default)]
    pub offline_delay_ms: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("TRIVIA_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        // Environment overrides the file.
        c = c.add_source(config::Environment::with_prefix("TRIVIA").try_parsing(true));
        c.build()?.try_deserialize()
    }

    /// Returns the question endpoint. Defaults to Open Trivia DB.
    pub fn api_url_or_default(&self) -> String {
        self.api_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Returns the request timeout, if configured. Zero means unset.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|&s| s > 0)
            .map(Duration::from_secs)
    }

    pub fn is_offline(&self) -> bool {
        self.offline.unwrap_or(false)
    }

    pub fn offline_delay_ms_or_default(&self) -> u64 {
        self.offline_delay_ms.unwrap_or(DEFAULT_OFFLINE_DELAY_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api_url_or_default(), DEFAULT_API_URL);
        assert_eq!(cfg.request_timeout(), None);
        assert!(!cfg.is_offline());
        assert_eq!(cfg.offline_delay_ms_or_default(), DEFAULT_OFFLINE_DELAY_MS);
    }

    #[test]
    fn test_overrides() {
        let cfg = AppConfig {
            api_url: Some("http://localhost:8080/api.php".into()),
            request_timeout_secs: Some(10),
            offline: Some(true),
            offline_delay_ms: Some(0),
        };
        assert_eq!(cfg.api_url_or_default(), "http://localhost:8080/api.php");
        assert_eq!(cfg.request_timeout(), Some(Duration::from_secs(10)));
        assert!(cfg.is_offline());
        assert_eq!(cfg.offline_delay_ms_or_default(), 0);
    }

    #[test]
    fn test_zero_timeout_and_blank_url_fall_back() {
        let cfg = AppConfig {
            api_url: Some("  ".into()),
            request_timeout_secs: Some(0),
            ..AppConfig::default()
        };
        assert_eq!(cfg.api_url_or_default(), DEFAULT_API_URL);
        assert_eq!(cfg.request_timeout(), None);
    }
}
