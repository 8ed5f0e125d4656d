//! Client configuration types.

use std::time::Duration;

/// Default cloud service address
pub const DEFAULT_BASE_URL: &str = "https://cloud.loghive.io";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for a [`crate::LoghiveClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the service
    pub base_url: String,

    /// API token used as the bearer credential on every request
    pub api_token: String,

    /// Request timeout
    pub timeout: Duration,

    /// User-Agent header value
    pub user_agent: String,

    /// PEM-encoded CA certificate bundle for self-hosted installations
    pub ca_certificate_pem: Option<String>,
}

impl ClientConfig {
    /// Create a configuration for the given API token with default settings
    #[must_use]
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: api_token.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("loghive-rust/{}", env!("CARGO_PKG_VERSION")),
            ca_certificate_pem: None,
        }
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Trust an additional PEM-encoded CA certificate bundle
    #[must_use]
    pub fn ca_certificate_pem(mut self, pem: impl Into<String>) -> Self {
        self.ca_certificate_pem = Some(pem.into());
        self
    }
}
