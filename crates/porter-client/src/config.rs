//! Configuration management for the Porter client
//!
//! Holds the server URL, request timeout and an optional bearer token.

use crate::error::{ApiError, Result};
use url::Url;

// ============================================================================
// Client Configuration Constants
// ============================================================================

/// Server URL used when `PORTER_SERVER_URL` is not set.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

/// Per-request timeout in seconds, overridable via `PORTER_API_TIMEOUT_SECS`.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the Porter server, without the `/api` prefix
    pub server_url: String,

    pub timeout_secs: u64,

    /// Bearer token attached to every request when set
    pub token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            token: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().merge_from(|key| std::env::var(key).ok())
    }

    /// Overlay `PORTER_*` values found through `lookup`.
    pub fn merge_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("PORTER_SERVER_URL") {
            self.server_url = url;
        }

        if let Some(timeout) = lookup("PORTER_API_TIMEOUT_SECS") {
            self.timeout_secs = timeout.trim().parse().map_err(|_| {
                ApiError::config(format!(
                    "PORTER_API_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    timeout
                ))
            })?;
        }

        if let Some(token) = lookup("PORTER_TOKEN").filter(|t| !t.trim().is_empty()) {
            self.token = Some(token);
        }

        self.validate()?;
        Ok(self)
    }

    /// Check that the server URL is an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.server_url).map_err(|e| {
            ApiError::config(format!("invalid server URL '{}': {}", self.server_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::config(format!(
                "server URL '{}' must use http or https",
                self.server_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ApiError::config("request timeout must be greater than zero"));
        }

        Ok(())
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn set_server_url(&mut self, url: impl Into<String>) {
        self.server_url = url.into();
    }

    pub fn set_timeout_secs(&mut self, secs: u64) {
        self.timeout_secs = secs;
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert_eq!(config.server_url(), DEFAULT_SERVER_URL);
        assert_eq!(config.timeout_secs, DEFAULT_API_TIMEOUT_SECS);
        assert!(config.token.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_lookup() {
        let config = Config::default()
            .merge_from(env(&[
                ("PORTER_SERVER_URL", "https://porter.example.com"),
                ("PORTER_API_TIMEOUT_SECS", "5"),
                ("PORTER_TOKEN", "abc123"),
            ]))
            .unwrap();

        assert_eq!(config.server_url, "https://porter.example.com");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.token.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let config = Config::default()
            .merge_from(env(&[("PORTER_TOKEN", "  ")]))
            .unwrap();
        assert!(config.token.is_none());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Config::default()
            .merge_from(env(&[("PORTER_API_TIMEOUT_SECS", "soon")]))
            .is_err());
        assert!(Config::default()
            .merge_from(env(&[("PORTER_SERVER_URL", "localhost")]))
            .is_err());
        assert!(Config::default()
            .merge_from(env(&[("PORTER_SERVER_URL", "ftp://porter.example.com")]))
            .is_err());
        assert!(Config::default()
            .merge_from(env(&[("PORTER_API_TIMEOUT_SECS", "0")]))
            .is_err());
    }

    #[test]
    fn test_config_setters() {
        let mut config = Config::new();
        config.set_server_url("http://10.0.0.4:8080");
        config.set_timeout_secs(60);
        config.set_token(Some("t".to_string()));

        assert_eq!(config.server_url(), "http://10.0.0.4:8080");
        assert_eq!(config.timeout_secs, 60);
        assert_eq!(config.token.as_deref(), Some("t"));
    }
}
