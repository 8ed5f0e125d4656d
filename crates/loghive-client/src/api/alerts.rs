//! Alert API endpoints.

use crate::LoghiveClient;
use loghive_core::{Alert, Result};

/// Alert API endpoints, scoped per repository
pub struct AlertApi<'a> {
    client: &'a LoghiveClient,
}

impl<'a> AlertApi<'a> {
    pub(crate) fn new(client: &'a LoghiveClient) -> Self {
        Self { client }
    }

    /// List all alerts in a repository
    pub async fn list(&self, repository: &str) -> Result<Vec<Alert>> {
        self.client
            .get(&format!("/api/v1/repositories/{repository}/alerts"))
            .await
    }

    /// Get an alert by name
    pub async fn get(&self, repository: &str, name: &str) -> Result<Alert> {
        self.client
            .get(&format!("/api/v1/repositories/{repository}/alerts/{name}"))
            .await
    }

    /// Create an alert, or replace it when `is_update` is set
    pub async fn add(&self, repository: &str, alert: &Alert, is_update: bool) -> Result<Alert> {
        if is_update {
            self.client
                .put(
                    &format!("/api/v1/repositories/{repository}/alerts/{}", alert.name),
                    alert,
                )
                .await
        } else {
            self.client
                .post(&format!("/api/v1/repositories/{repository}/alerts"), alert)
                .await
        }
    }

    /// Delete an alert by name
    pub async fn delete(&self, repository: &str, name: &str) -> Result<()> {
        self.client
            .delete(&format!("/api/v1/repositories/{repository}/alerts/{name}"))
            .await
    }
}
