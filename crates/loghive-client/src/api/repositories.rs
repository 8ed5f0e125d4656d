//! Repository API endpoints.

use crate::LoghiveClient;
use loghive_core::{
    CreateRepositoryRequest, DeleteRepositoryRequest, Repository, Result,
    UpdateDescriptionRequest, UpdateIngestRetentionRequest, UpdateStorageRetentionRequest,
    UpdateTimeRetentionRequest,
};

/// Repository API endpoints
pub struct RepositoryApi<'a> {
    client: &'a LoghiveClient,
}

impl<'a> RepositoryApi<'a> {
    pub(crate) fn new(client: &'a LoghiveClient) -> Self {
        Self { client }
    }

    /// List all repositories visible to the token
    pub async fn list(&self) -> Result<Vec<Repository>> {
        self.client.get("/api/v1/repositories").await
    }

    /// Get a repository by name
    pub async fn get(&self, name: &str) -> Result<Repository> {
        self.client
            .get(&format!("/api/v1/repositories/{name}"))
            .await
    }

    /// Create an empty repository
    pub async fn create(&self, name: &str) -> Result<()> {
        let request = CreateRepositoryRequest {
            name: name.to_string(),
        };
        self.client
            .post_no_content("/api/v1/repositories", &request)
            .await
    }

    /// Replace the repository description
    pub async fn update_description(&self, name: &str, description: &str) -> Result<()> {
        let request = UpdateDescriptionRequest {
            description: description.to_string(),
        };
        self.client
            .put_no_content(&format!("/api/v1/repositories/{name}/description"), &request)
            .await
    }

    /// Change time-based retention; `allow_data_deletion` permits shrinking
    pub async fn update_time_based_retention(
        &self,
        name: &str,
        retention_days: f64,
        allow_data_deletion: bool,
    ) -> Result<()> {
        let request = UpdateTimeRetentionRequest {
            retention_days,
            allow_data_deletion,
        };
        self.client
            .put_no_content(
                &format!("/api/v1/repositories/{name}/retention/time"),
                &request,
            )
            .await
    }

    /// Change ingest-size retention; `allow_data_deletion` permits shrinking
    pub async fn update_ingest_based_retention(
        &self,
        name: &str,
        ingest_retention_size_gb: f64,
        allow_data_deletion: bool,
    ) -> Result<()> {
        let request = UpdateIngestRetentionRequest {
            ingest_retention_size_gb,
            allow_data_deletion,
        };
        self.client
            .put_no_content(
                &format!("/api/v1/repositories/{name}/retention/ingest-size"),
                &request,
            )
            .await
    }

    /// Change storage-size retention; `allow_data_deletion` permits shrinking
    pub async fn update_storage_based_retention(
        &self,
        name: &str,
        storage_retention_size_gb: f64,
        allow_data_deletion: bool,
    ) -> Result<()> {
        let request = UpdateStorageRetentionRequest {
            storage_retention_size_gb,
            allow_data_deletion,
        };
        self.client
            .put_no_content(
                &format!("/api/v1/repositories/{name}/retention/storage-size"),
                &request,
            )
            .await
    }

    /// Delete a repository and, when permitted, its stored data
    pub async fn delete(&self, name: &str, reason: &str, allow_data_deletion: bool) -> Result<()> {
        let request = DeleteRepositoryRequest {
            reason: reason.to_string(),
            allow_data_deletion,
        };
        self.client
            .delete_with_body(&format!("/api/v1/repositories/{name}"), &request)
            .await
    }
}
