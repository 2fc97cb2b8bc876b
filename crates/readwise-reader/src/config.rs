//! Client configuration.

use std::time::Duration;

use crate::http::DumpTarget;
use crate::types::BaseUrl;

/// Configuration for a [`Client`](crate::Client).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL all endpoints are resolved against
    pub base_url: BaseUrl,
    /// Per-request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Where request/response dumps go
    pub dump: DumpTarget,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BaseUrl::default(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("readwise-reader/", env!("CARGO_PKG_VERSION")).to_string(),
            dump: DumpTarget::Off,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.config.base_url = base_url;
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Dump every request and response to the given target
    pub fn dump(mut self, target: DumpTarget) -> Self {
        self.config.dump = target;
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("readwise-reader/"));
        assert!(!config.dump.is_enabled());
    }

    #[test]
    fn builder_overrides() {
        let config = ClientConfig::builder()
            .base_url(BaseUrl::new("http://localhost:9000").unwrap())
            .timeout(Duration::from_secs(5))
            .dump(DumpTarget::Stderr)
            .build();
        assert_eq!(config.base_url.endpoint("list"), "http://localhost:9000/list");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.dump.is_enabled());
    }
}
