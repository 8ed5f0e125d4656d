//! Ingest token resources.

use loghive_client::LoghiveClient;
use loghive_core::{IngestToken, Result};
use tracing::info;

use crate::provider::parse_composite_id;

/// Flat configuration record for one ingest token resource instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestTokenConfig {
    /// Repository owning the token
    pub repository: String,

    /// Token name
    pub name: String,

    /// Parser applied to events shipped with this token
    pub parser: Option<String>,

    /// The secret token string; output only
    pub token: String,
}

impl IngestTokenConfig {
    /// The composite identifier of this token
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}+{}", self.repository, self.name)
    }
}

/// Populate a flat configuration record from the authoritative token
#[must_use]
pub fn config_from_ingest_token(
    token: &IngestToken,
    repository: impl Into<String>,
) -> IngestTokenConfig {
    IngestTokenConfig {
        repository: repository.into(),
        name: token.name.clone(),
        parser: if token.assigned_parser.is_empty() {
            None
        } else {
            Some(token.assigned_parser.clone())
        },
        token: token.token.clone(),
    }
}

/// CRUD handler for ingest token resources
pub struct IngestTokenResource<'a> {
    client: &'a LoghiveClient,
}

impl<'a> IngestTokenResource<'a> {
    pub(crate) fn new(client: &'a LoghiveClient) -> Self {
        Self { client }
    }

    /// Create the token and return the reconciled configuration
    pub async fn create(&self, config: &IngestTokenConfig) -> Result<IngestTokenConfig> {
        let created = self
            .client
            .ingest_tokens()
            .add(&config.repository, &config.name, config.parser.as_deref())
            .await?;
        info!(repository = %config.repository, name = %created.name, "created ingest token");
        self.read(&config.repository, &created.name).await
    }

    /// Fetch the token and render it as configuration
    pub async fn read(&self, repository: &str, name: &str) -> Result<IngestTokenConfig> {
        let token = self.client.ingest_tokens().get(repository, name).await?;
        Ok(config_from_ingest_token(&token, repository))
    }

    /// Resolve a composite id and read the token it names (import)
    pub async fn read_by_id(&self, id: &str) -> Result<IngestTokenConfig> {
        let (repository, name) = parse_composite_id(id, "REPOSITORYNAME+INGESTTOKENNAME")?;
        self.read(repository, name).await
    }

    /// Change the assigned parser and return the reconciled configuration
    pub async fn update(&self, config: &IngestTokenConfig) -> Result<IngestTokenConfig> {
        let updated = self
            .client
            .ingest_tokens()
            .update(&config.repository, &config.name, config.parser.as_deref())
            .await?;
        info!(repository = %config.repository, name = %updated.name, "updated ingest token");
        self.read(&config.repository, &updated.name).await
    }

    /// Delete the token
    pub async fn delete(&self, config: &IngestTokenConfig) -> Result<()> {
        self.client
            .ingest_tokens()
            .remove(&config.repository, &config.name)
            .await?;
        info!(repository = %config.repository, name = %config.name, "deleted ingest token");
        Ok(())
    }
}
