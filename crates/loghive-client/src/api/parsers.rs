//! Parser API endpoints.

use crate::LoghiveClient;
use loghive_core::{Parser, Result};

/// Parser API endpoints, scoped per repository
pub struct ParserApi<'a> {
    client: &'a LoghiveClient,
}

impl<'a> ParserApi<'a> {
    pub(crate) fn new(client: &'a LoghiveClient) -> Self {
        Self { client }
    }

    /// List all parsers in a repository
    pub async fn list(&self, repository: &str) -> Result<Vec<Parser>> {
        self.client
            .get(&format!("/api/v1/repositories/{repository}/parsers"))
            .await
    }

    /// Get a parser by name
    pub async fn get(&self, repository: &str, name: &str) -> Result<Parser> {
        self.client
            .get(&format!("/api/v1/repositories/{repository}/parsers/{name}"))
            .await
    }

    /// Create a parser, or replace it when `is_update` is set
    pub async fn add(&self, repository: &str, parser: &Parser, is_update: bool) -> Result<()> {
        if is_update {
            self.client
                .put_no_content(
                    &format!("/api/v1/repositories/{repository}/parsers/{}", parser.name),
                    parser,
                )
                .await
        } else {
            self.client
                .post_no_content(&format!("/api/v1/repositories/{repository}/parsers"), parser)
                .await
        }
    }

    /// Delete a parser by name
    pub async fn remove(&self, repository: &str, name: &str) -> Result<()> {
        self.client
            .delete(&format!("/api/v1/repositories/{repository}/parsers/{name}"))
            .await
    }
}
