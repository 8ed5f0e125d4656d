//! Main loghive API client implementation.

use crate::api::*;
use crate::config::ClientConfig;
use loghive_core::{Error, Result};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Main loghive API client
#[derive(Clone)]
pub struct LoghiveClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    api_token: String,
    base_url: String,
}

impl LoghiveClient {
    /// Create a new client for the cloud service using default settings
    #[must_use]
    pub fn new(api_token: impl Into<String>) -> Self {
        LoghiveClientBuilder::new(api_token)
            .build()
            .expect("default client configuration is valid")
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(api_token: impl Into<String>) -> LoghiveClientBuilder {
        LoghiveClientBuilder::new(api_token)
    }

    /// Create a client from an existing configuration
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        LoghiveClientBuilder { config }.build()
    }

    /// Access alert endpoints
    #[must_use]
    pub fn alerts(&self) -> AlertApi<'_> {
        AlertApi::new(self)
    }

    /// Access ingest token endpoints
    #[must_use]
    pub fn ingest_tokens(&self) -> IngestTokenApi<'_> {
        IngestTokenApi::new(self)
    }

    /// Access notifier endpoints
    #[must_use]
    pub fn notifiers(&self) -> NotifierApi<'_> {
        NotifierApi::new(self)
    }

    /// Access parser endpoints
    #[must_use]
    pub fn parsers(&self) -> ParserApi<'_> {
        ParserApi::new(self)
    }

    /// Access repository endpoints
    #[must_use]
    pub fn repositories(&self) -> RepositoryApi<'_> {
        RepositoryApi::new(self)
    }

    /// Perform a GET request
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.build_url(path);
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(&url)
            .bearer_auth(&self.inner.api_token)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Perform a POST request with JSON body
    pub(crate) async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path);
        debug!(url = %url, "POST request");

        let response = self
            .inner
            .http
            .post(&url)
            .bearer_auth(&self.inner.api_token)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Perform a POST request whose response carries no body
    pub(crate) async fn post_no_content<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<()> {
        let url = self.build_url(path);
        debug!(url = %url, "POST request");

        let response = self
            .inner
            .http
            .post(&url)
            .bearer_auth(&self.inner.api_token)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        self.handle_empty_response(response).await
    }

    /// Perform a PUT request with JSON body
    pub(crate) async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path);
        debug!(url = %url, "PUT request");

        let response = self
            .inner
            .http
            .put(&url)
            .bearer_auth(&self.inner.api_token)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Perform a PUT request whose response carries no body
    pub(crate) async fn put_no_content<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<()> {
        let url = self.build_url(path);
        debug!(url = %url, "PUT request");

        let response = self
            .inner
            .http
            .put(&url)
            .bearer_auth(&self.inner.api_token)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        self.handle_empty_response(response).await
    }

    /// Perform a DELETE request
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = self.build_url(path);
        debug!(url = %url, "DELETE request");

        let response = self
            .inner
            .http
            .delete(&url)
            .bearer_auth(&self.inner.api_token)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        self.handle_empty_response(response).await
    }

    /// Perform a DELETE request with JSON body
    pub(crate) async fn delete_with_body<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<()> {
        let url = self.build_url(path);
        debug!(url = %url, "DELETE request");

        let response = self
            .inner
            .http
            .delete(&url)
            .bearer_auth(&self.inner.api_token)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        self.handle_empty_response(response).await
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }

    /// Handle an API response that returns JSON
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await.map_err(|e| Error::Http(e.to_string()))?;
            serde_json::from_str(&body).map_err(Error::Json)
        } else {
            self.handle_error(status.as_u16(), response).await
        }
    }

    /// Handle an API response that returns no body
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            self.handle_error(status.as_u16(), response).await
        }
    }

    /// Convert an error response to an [`Error`]
    async fn handle_error<T>(&self, status: u16, response: reqwest::Response) -> Result<T> {
        let body = response.text().await.unwrap_or_default();

        // Try to parse error message from JSON
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(body);

        match status {
            401 | 403 => {
                warn!("authentication rejected by the API");
                Err(Error::Unauthorized)
            }
            404 => Err(Error::NotFound { resource: message }),
            _ => Err(Error::Api {
                code: status,
                message,
            }),
        }
    }
}

/// Builder for configuring a [`LoghiveClient`]
pub struct LoghiveClientBuilder {
    config: ClientConfig,
}

impl LoghiveClientBuilder {
    /// Create a new builder with the given API token
    #[must_use]
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            config: ClientConfig::new(api_token),
        }
    }

    /// Set the base URL (useful for testing and self-hosted installations)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Trust an additional PEM-encoded CA certificate bundle
    #[must_use]
    pub fn ca_certificate_pem(mut self, pem: impl Into<String>) -> Self {
        self.config.ca_certificate_pem = Some(pem.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<LoghiveClient> {
        let base = url::Url::parse(&self.config.base_url)
            .map_err(|e| Error::Config(format!("invalid base URL {:?}: {e}", self.config.base_url)))?;
        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(Error::Config(format!(
                "base URL {:?} must begin with http or https",
                self.config.base_url
            )));
        }

        let mut http = HttpClient::builder()
            .timeout(self.config.timeout)
            .user_agent(&self.config.user_agent)
            .gzip(true);

        if let Some(pem) = &self.config.ca_certificate_pem {
            let certificate = reqwest::Certificate::from_pem(pem.as_bytes())
                .map_err(|e| Error::Config(format!("invalid CA certificate bundle: {e}")))?;
            http = http.add_root_certificate(certificate);
        }

        let http = http
            .build()
            .map_err(|e| Error::Config(format!("could not build HTTP client: {e}")))?;

        Ok(LoghiveClient {
            inner: Arc::new(ClientInner {
                http,
                api_token: self.config.api_token,
                base_url: self.config.base_url.trim_end_matches('/').to_string(),
            }),
        })
    }
}
