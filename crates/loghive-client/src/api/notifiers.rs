//! Notifier API endpoints.

use crate::LoghiveClient;
use loghive_core::{Notifier, NotifierPayload, Result};

/// Notifier API endpoints, scoped per repository
pub struct NotifierApi<'a> {
    client: &'a LoghiveClient,
}

impl<'a> NotifierApi<'a> {
    pub(crate) fn new(client: &'a LoghiveClient) -> Self {
        Self { client }
    }

    /// List all notifiers in a repository
    pub async fn list(&self, repository: &str) -> Result<Vec<Notifier>> {
        let payloads: Vec<NotifierPayload> = self
            .client
            .get(&format!("/api/v1/repositories/{repository}/notifiers"))
            .await?;
        payloads.into_iter().map(Notifier::try_from).collect()
    }

    /// Get a notifier by name
    pub async fn get(&self, repository: &str, name: &str) -> Result<Notifier> {
        let payload: NotifierPayload = self
            .client
            .get(&format!("/api/v1/repositories/{repository}/notifiers/{name}"))
            .await?;
        payload.try_into()
    }

    /// Create a notifier, or replace it when `is_update` is set
    ///
    /// Returns the authoritative copy held by the server.
    pub async fn add(&self, repository: &str, notifier: &Notifier, is_update: bool) -> Result<Notifier> {
        let payload = notifier.to_payload();
        let response: NotifierPayload = if is_update {
            self.client
                .put(
                    &format!(
                        "/api/v1/repositories/{repository}/notifiers/{}",
                        notifier.name
                    ),
                    &payload,
                )
                .await?
        } else {
            self.client
                .post(&format!("/api/v1/repositories/{repository}/notifiers"), &payload)
                .await?
        };
        response.try_into()
    }

    /// Delete a notifier by name
    pub async fn delete(&self, repository: &str, name: &str) -> Result<()> {
        self.client
            .delete(&format!("/api/v1/repositories/{repository}/notifiers/{name}"))
            .await
    }
}
