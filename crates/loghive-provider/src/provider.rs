//! Provider configuration and the resource handler registry.

use std::env;

use loghive_client::LoghiveClient;
use loghive_core::{Error, Result};
use tracing::debug;

use crate::resource::{
    AlertResource, IngestTokenResource, NotifierResource, ParserResource, RepositoryResource,
};
use crate::validate::validate_url;

/// Environment variable naming the service address
pub const ENV_ADDR: &str = "LOGHIVE_ADDR";

/// Environment variable carrying the API token
pub const ENV_API_TOKEN: &str = "LOGHIVE_API_TOKEN";

/// Environment variable carrying a PEM-encoded CA bundle
pub const ENV_CA_CERTIFICATE_PEM: &str = "LOGHIVE_CA_CERTIFICATE_PEM";

/// Default service address for the cloud offering
pub const DEFAULT_ADDR: &str = "https://cloud.loghive.io/";

/// Connection settings for a [`Provider`]
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Service address; an absolute http/https URL
    pub address: String,

    /// API token used to authenticate every request
    pub api_token: String,

    /// PEM-encoded CA certificate bundle for self-hosted installations
    pub ca_certificate_pem: Option<String>,
}

impl ProviderConfig {
    /// Settings for the cloud service with the given API token
    #[must_use]
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            address: DEFAULT_ADDR.to_string(),
            api_token: api_token.into(),
            ca_certificate_pem: None,
        }
    }

    /// Read settings from the environment
    ///
    /// `LOGHIVE_API_TOKEN` is required; `LOGHIVE_ADDR` falls back to the
    /// cloud address and `LOGHIVE_CA_CERTIFICATE_PEM` is optional.
    pub fn from_env() -> Result<Self> {
        let api_token = env::var(ENV_API_TOKEN)
            .map_err(|_| Error::Config(format!("{ENV_API_TOKEN} must be set")))?;
        Ok(Self {
            address: env::var(ENV_ADDR).unwrap_or_else(|_| DEFAULT_ADDR.to_string()),
            api_token,
            ca_certificate_pem: env::var(ENV_CA_CERTIFICATE_PEM).ok(),
        })
    }

    /// Set the service address
    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Trust an additional PEM-encoded CA certificate bundle
    #[must_use]
    pub fn ca_certificate_pem(mut self, pem: impl Into<String>) -> Self {
        self.ca_certificate_pem = Some(pem.into());
        self
    }

    /// Validate the settings and build an API client from them
    pub fn connect(&self) -> Result<LoghiveClient> {
        validate_url("addr", &self.address)?;

        let mut builder = LoghiveClient::builder(&self.api_token).base_url(&self.address);
        if let Some(pem) = &self.ca_certificate_pem {
            if !pem.contains("-----BEGIN") {
                return Err(Error::Config(
                    "ca_certificate_pem specified but no PEM block was found".to_string(),
                ));
            }
            builder = builder.ca_certificate_pem(pem.clone());
        }

        debug!(address = %self.address, "connecting");
        builder.build()
    }
}

/// Handle to a configured service connection
///
/// Built once at startup and passed to whatever dispatches resource
/// operations; hands out one CRUD handler per resource kind. There is no
/// process-global registry.
#[derive(Clone)]
pub struct Provider {
    client: LoghiveClient,
}

impl Provider {
    /// Connect using the given settings
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        Ok(Self {
            client: config.connect()?,
        })
    }

    /// Wrap an already-built client
    #[must_use]
    pub const fn from_client(client: LoghiveClient) -> Self {
        Self { client }
    }

    /// The underlying API client
    #[must_use]
    pub const fn client(&self) -> &LoghiveClient {
        &self.client
    }

    /// Alert resources
    #[must_use]
    pub fn alerts(&self) -> AlertResource<'_> {
        AlertResource::new(&self.client)
    }

    /// Ingest token resources
    #[must_use]
    pub fn ingest_tokens(&self) -> IngestTokenResource<'_> {
        IngestTokenResource::new(&self.client)
    }

    /// Notifier resources
    #[must_use]
    pub fn notifiers(&self) -> NotifierResource<'_> {
        NotifierResource::new(&self.client)
    }

    /// Parser resources
    #[must_use]
    pub fn parsers(&self) -> ParserResource<'_> {
        ParserResource::new(&self.client)
    }

    /// Repository resources
    #[must_use]
    pub fn repositories(&self) -> RepositoryResource<'_> {
        RepositoryResource::new(&self.client)
    }
}

/// Split a `<repository>+<name>` identifier into its two halves
///
/// Used when a repository-scoped resource is read by id alone (import);
/// `expected` describes the legal form for the error message.
pub fn parse_composite_id<'a>(id: &'a str, expected: &'static str) -> Result<(&'a str, &'a str)> {
    match id.split_once('+') {
        Some((repository, name)) if !repository.is_empty() && !name.is_empty() => {
            Ok((repository, name))
        }
        _ => Err(Error::InvalidId {
            id: id.to_string(),
            expected,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_ids_split_on_the_first_plus() {
        let (repository, name) = parse_composite_id("prod+oncall", "REPO+NAME").unwrap();
        assert_eq!(repository, "prod");
        assert_eq!(name, "oncall");

        let (repository, name) = parse_composite_id("prod+on+call", "REPO+NAME").unwrap();
        assert_eq!(repository, "prod");
        assert_eq!(name, "on+call");
    }

    #[test]
    fn malformed_composite_ids_are_rejected() {
        for id in ["", "prod", "prod+", "+oncall"] {
            let err = parse_composite_id(id, "REPO+NAME").unwrap_err();
            assert!(matches!(err, Error::InvalidId { .. }), "id {id:?}");
        }
    }

    #[test]
    fn config_rejects_a_bad_address() {
        let config = ProviderConfig::new("token").address("not a url");
        assert!(config.connect().is_err());
    }

    #[test]
    fn config_rejects_a_token_without_pem() {
        let config = ProviderConfig::new("token").ca_certificate_pem("junk");
        assert!(config.connect().is_err());
    }
}
