//! Ingest token API endpoints.

use crate::LoghiveClient;
use loghive_core::{CreateIngestTokenRequest, IngestToken, Result, UpdateIngestTokenRequest};

/// Ingest token API endpoints, scoped per repository
pub struct IngestTokenApi<'a> {
    client: &'a LoghiveClient,
}

impl<'a> IngestTokenApi<'a> {
    pub(crate) fn new(client: &'a LoghiveClient) -> Self {
        Self { client }
    }

    /// List all ingest tokens in a repository
    pub async fn list(&self, repository: &str) -> Result<Vec<IngestToken>> {
        self.client
            .get(&format!("/api/v1/repositories/{repository}/ingesttokens"))
            .await
    }

    /// Get an ingest token by name
    pub async fn get(&self, repository: &str, name: &str) -> Result<IngestToken> {
        self.client
            .get(&format!(
                "/api/v1/repositories/{repository}/ingesttokens/{name}"
            ))
            .await
    }

    /// Create an ingest token, optionally with an assigned parser
    pub async fn add(
        &self,
        repository: &str,
        name: &str,
        parser: Option<&str>,
    ) -> Result<IngestToken> {
        let request = CreateIngestTokenRequest {
            name: name.to_string(),
            assigned_parser: parser.map(str::to_owned),
        };
        self.client
            .post(
                &format!("/api/v1/repositories/{repository}/ingesttokens"),
                &request,
            )
            .await
    }

    /// Change the parser assigned to an ingest token
    pub async fn update(
        &self,
        repository: &str,
        name: &str,
        parser: Option<&str>,
    ) -> Result<IngestToken> {
        let request = UpdateIngestTokenRequest {
            assigned_parser: parser.map(str::to_owned),
        };
        self.client
            .put(
                &format!("/api/v1/repositories/{repository}/ingesttokens/{name}"),
                &request,
            )
            .await
    }

    /// Delete an ingest token by name
    pub async fn remove(&self, repository: &str, name: &str) -> Result<()> {
        self.client
            .delete(&format!(
                "/api/v1/repositories/{repository}/ingesttokens/{name}"
            ))
            .await
    }
}
