//! Client configuration.
//!
//! Transport settings shared by the async and blocking fetchers.

use std::time::Duration;

use crate::core::servers::ServerSelection;
use crate::error::MatchingError;

/// Base path used when no operation server is selected.
pub const DEFAULT_BASE_PATH: &str = "http://localhost";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Fetcher configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Client-wide base path, used when `servers` resolves to nothing.
    pub base_path: String,

    /// Operation-level server selection.
    pub servers: ServerSelection,

    /// Request timeout.
    pub timeout: Duration,

    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            servers: ServerSelection::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("roomatch-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration with the given client-wide base path.
    #[must_use]
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_servers(mut self, servers: ServerSelection) -> Self {
        self.servers = servers;
        self
    }

    #[must_use]
    pub fn with_custom_base_url(mut self, url: impl Into<String>) -> Self {
        self.servers.custom_base_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_host_index(mut self, host_index: usize) -> Self {
        self.servers.host_index = host_index;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Base URL the next request goes to, without a trailing slash.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the host index is out of range.
    pub fn effective_base_url(&self) -> Result<&str, MatchingError> {
        let base = self.servers.resolve()?.unwrap_or(self.base_path.as_str());
        Ok(base.trim_end_matches('/'))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured URL is empty or not http(s), or the
    /// host index does not point at a declared server.
    pub fn validate(&self) -> Result<(), MatchingError> {
        check_url("base_path", &self.base_path)?;
        if let Some(custom) = &self.servers.custom_base_url {
            check_url("custom_base_url", custom)?;
        }
        for server in &self.servers.servers {
            check_url("servers", server)?;
        }
        self.servers.resolve()?;
        Ok(())
    }
}

fn check_url(field: &str, url: &str) -> Result<(), MatchingError> {
    if url.is_empty() {
        return Err(MatchingError::InvalidConfig(format!("{} cannot be empty", field)));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(MatchingError::InvalidConfig(format!(
            "{} must start with http:// or https://",
            field
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_path, DEFAULT_BASE_PATH);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.user_agent.starts_with("roomatch-client/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_effective_base_url_falls_back_to_base_path() {
        let config = ClientConfig::new("https://api.roomatch.test/");
        assert_eq!(config.effective_base_url().unwrap(), "https://api.roomatch.test");
    }

    #[test]
    fn test_effective_base_url_prefers_custom() {
        let config = ClientConfig::new("https://api.roomatch.test")
            .with_servers(ServerSelection::default().with_servers(["https://eu.roomatch.test"]))
            .with_custom_base_url("http://127.0.0.1:8080");
        assert_eq!(config.effective_base_url().unwrap(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_effective_base_url_uses_server_list() {
        let config = ClientConfig::new("https://api.roomatch.test")
            .with_servers(
                ServerSelection::default().with_servers(["https://eu.roomatch.test", "https://us.roomatch.test"]),
            )
            .with_host_index(1);
        assert_eq!(config.effective_base_url().unwrap(), "https://us.roomatch.test");
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        assert!(ClientConfig::new("ftp://api.roomatch.test").validate().is_err());
        assert!(ClientConfig::new("").validate().is_err());
        assert!(ClientConfig::default()
            .with_custom_base_url("localhost:8080")
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_bad_host_index() {
        let config = ClientConfig::default()
            .with_servers(ServerSelection::default().with_servers(["https://eu.roomatch.test"]))
            .with_host_index(2);
        assert!(matches!(config.validate(), Err(MatchingError::InvalidConfig(_))));
    }
}
