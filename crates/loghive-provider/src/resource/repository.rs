//! Repository resources.

use loghive_client::LoghiveClient;
use loghive_core::{Repository, Result};
use tracing::info;

use crate::validate::validate_non_negative;

/// Reason recorded on repository deletion
const DELETE_REASON: &str = "Deleted by loghive provider";

/// Flat configuration record for one repository resource instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepositoryConfig {
    /// Repository name; also the resource identifier
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Whether retention changes and deletion may discard stored data
    pub allow_data_deletion: bool,

    /// Retention limits
    pub retention: RetentionConfig,
}

/// Retention limits for a repository
///
/// Unset values disable the corresponding limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RetentionConfig {
    /// Retention window in days
    pub time_in_days: Option<f64>,

    /// Ingest-size retention in gigabytes
    pub ingest_size_in_gb: Option<f64>,

    /// Storage-size retention in gigabytes
    pub storage_size_in_gb: Option<f64>,
}

impl RepositoryConfig {
    /// Check that every configured retention limit is non-negative
    pub fn validate(&self) -> Result<()> {
        if let Some(days) = self.retention.time_in_days {
            validate_non_negative("retention.time_in_days", days)?;
        }
        if let Some(gb) = self.retention.ingest_size_in_gb {
            validate_non_negative("retention.ingest_size_in_gb", gb)?;
        }
        if let Some(gb) = self.retention.storage_size_in_gb {
            validate_non_negative("retention.storage_size_in_gb", gb)?;
        }
        Ok(())
    }
}

/// Populate a flat configuration record from the authoritative repository
#[must_use]
pub fn config_from_repository(repository: &Repository) -> RepositoryConfig {
    RepositoryConfig {
        name: repository.name.clone(),
        description: repository.description.clone(),
        allow_data_deletion: false,
        retention: RetentionConfig {
            time_in_days: Some(repository.retention_days),
            ingest_size_in_gb: Some(repository.ingest_retention_size_gb),
            storage_size_in_gb: Some(repository.storage_retention_size_gb),
        },
    }
}

/// CRUD handler for repository resources
pub struct RepositoryResource<'a> {
    client: &'a LoghiveClient,
}

impl<'a> RepositoryResource<'a> {
    pub(crate) fn new(client: &'a LoghiveClient) -> Self {
        Self { client }
    }

    /// Create the repository, apply description and retention, and return
    /// the reconciled configuration
    pub async fn create(&self, config: &RepositoryConfig) -> Result<RepositoryConfig> {
        config.validate()?;
        self.client.repositories().create(&config.name).await?;
        info!(name = %config.name, "created repository");
        self.apply_settings(config).await?;
        self.read_with_flags(config).await
    }

    /// Fetch the repository and render it as configuration
    pub async fn read(&self, name: &str) -> Result<RepositoryConfig> {
        let repository = self.client.repositories().get(name).await?;
        Ok(config_from_repository(&repository))
    }

    /// Apply description and retention changes and return the reconciled
    /// configuration
    pub async fn update(&self, config: &RepositoryConfig) -> Result<RepositoryConfig> {
        config.validate()?;
        self.apply_settings(config).await?;
        info!(name = %config.name, "updated repository");
        self.read_with_flags(config).await
    }

    /// Delete the repository and, when permitted, its stored data
    pub async fn delete(&self, config: &RepositoryConfig) -> Result<()> {
        self.client
            .repositories()
            .delete(&config.name, DELETE_REASON, config.allow_data_deletion)
            .await?;
        info!(name = %config.name, "deleted repository");
        Ok(())
    }

    /// Push description and the three retention limits to the server
    async fn apply_settings(&self, config: &RepositoryConfig) -> Result<()> {
        let repositories = self.client.repositories();
        repositories
            .update_description(&config.name, &config.description)
            .await?;
        repositories
            .update_time_based_retention(
                &config.name,
                config.retention.time_in_days.unwrap_or(0.0),
                config.allow_data_deletion,
            )
            .await?;
        repositories
            .update_ingest_based_retention(
                &config.name,
                config.retention.ingest_size_in_gb.unwrap_or(0.0),
                config.allow_data_deletion,
            )
            .await?;
        repositories
            .update_storage_based_retention(
                &config.name,
                config.retention.storage_size_in_gb.unwrap_or(0.0),
                config.allow_data_deletion,
            )
            .await
    }

    /// Read back observed state, carrying over local-only flags
    async fn read_with_flags(&self, config: &RepositoryConfig) -> Result<RepositoryConfig> {
        let mut observed = self.read(&config.name).await?;
        observed.allow_data_deletion = config.allow_data_deletion;
        Ok(observed)
    }
}
