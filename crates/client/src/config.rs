//! Client configuration.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{Error, Result};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.unkey.com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for [`UnkeyClient`](crate::UnkeyClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL without a trailing slash
    pub base_url: String,
    /// Root key sent as bearer token
    pub root_key: SecretString,
    /// Per-request timeout
    pub timeout: Duration,
    /// `User-Agent` header value
    pub user_agent: String,
}

impl ClientConfig {
    /// Configuration against the production endpoint.
    #[must_use]
    pub fn new(root_key: SecretString) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            root_key,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("unkey-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Overrides the base URL. Trailing slashes are dropped.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Overrides the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Rejects configurations that cannot produce a working client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for an empty root key or a base URL
    /// without an http(s) scheme.
    pub fn validate(&self) -> Result<()> {
        if self.root_key.expose_secret().trim().is_empty() {
            return Err(Error::InvalidConfig {
                message: "root key is empty".to_string(),
            });
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(Error::InvalidConfig {
                message: format!(
                    "base URL '{}' must start with http:// or https://",
                    self.base_url
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> SecretString {
        SecretString::from(s.to_string())
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new(key("unkey_root"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.user_agent.starts_with("unkey-client/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ClientConfig::new(key("k")).with_base_url("http://localhost:8080/");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_validate_rejects_empty_key_and_bad_url() {
        assert!(ClientConfig::new(key("  ")).validate().is_err());
        assert!(
            ClientConfig::new(key("k"))
                .with_base_url("api.unkey.com")
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_debug_redacts_root_key() {
        let config = ClientConfig::new(key("unkey_super_secret"));
        assert!(!format!("{config:?}").contains("unkey_super_secret"));
    }
}
