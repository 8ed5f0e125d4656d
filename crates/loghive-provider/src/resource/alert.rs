//! Alert resources.

use loghive_client::LoghiveClient;
use loghive_core::{Alert, Query, Result};
use tracing::info;

use crate::provider::parse_composite_id;

/// Flat configuration record for one alert resource instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertConfig {
    /// Repository owning the alert
    pub repository: String,

    /// Alert name
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Minimum time between two firings, in milliseconds
    pub throttle_time_millis: i64,

    /// Whether firing is suppressed
    pub silenced: bool,

    /// Relative start of the search window, e.g. `24h`
    pub start: String,

    /// Query text
    pub query: String,

    /// IDs of notifiers to forward triggered events to
    pub notifiers: Vec<String>,

    /// Free-form labels
    pub labels: Vec<String>,
}

impl AlertConfig {
    /// The composite identifier of this alert
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}+{}", self.repository, self.name)
    }
}

/// Build the domain alert; alert queries always run live and end at `now`
#[must_use]
pub fn alert_from_config(config: &AlertConfig) -> Alert {
    Alert {
        name: config.name.clone(),
        description: config.description.clone(),
        throttle_time_millis: config.throttle_time_millis,
        silenced: config.silenced,
        notifiers: config.notifiers.clone(),
        labels: config.labels.clone(),
        query: Query {
            query_string: config.query.clone(),
            start: config.start.clone(),
            end: "now".to_string(),
            is_live: true,
        },
    }
}

/// Populate a flat configuration record from the authoritative alert
#[must_use]
pub fn config_from_alert(alert: &Alert, repository: impl Into<String>) -> AlertConfig {
    AlertConfig {
        repository: repository.into(),
        name: alert.name.clone(),
        description: alert.description.clone(),
        throttle_time_millis: alert.throttle_time_millis,
        silenced: alert.silenced,
        start: alert.query.start.clone(),
        query: alert.query.query_string.clone(),
        notifiers: alert.notifiers.clone(),
        labels: alert.labels.clone(),
    }
}

/// CRUD handler for alert resources
pub struct AlertResource<'a> {
    client: &'a LoghiveClient,
}

impl<'a> AlertResource<'a> {
    pub(crate) fn new(client: &'a LoghiveClient) -> Self {
        Self { client }
    }

    /// Create the alert and return the reconciled configuration
    pub async fn create(&self, config: &AlertConfig) -> Result<AlertConfig> {
        let alert = alert_from_config(config);
        let created = self
            .client
            .alerts()
            .add(&config.repository, &alert, false)
            .await?;
        info!(repository = %config.repository, name = %created.name, "created alert");
        self.read(&config.repository, &created.name).await
    }

    /// Fetch the alert and render it as configuration
    pub async fn read(&self, repository: &str, name: &str) -> Result<AlertConfig> {
        let alert = self.client.alerts().get(repository, name).await?;
        Ok(config_from_alert(&alert, repository))
    }

    /// Resolve a composite id and read the alert it names (import)
    pub async fn read_by_id(&self, id: &str) -> Result<AlertConfig> {
        let (repository, name) = parse_composite_id(id, "REPOSITORYNAME+ALERTNAME")?;
        self.read(repository, name).await
    }

    /// Replace the alert and return the reconciled configuration
    pub async fn update(&self, config: &AlertConfig) -> Result<AlertConfig> {
        let alert = alert_from_config(config);
        let updated = self
            .client
            .alerts()
            .add(&config.repository, &alert, true)
            .await?;
        info!(repository = %config.repository, name = %updated.name, "updated alert");
        self.read(&config.repository, &updated.name).await
    }

    /// Delete the alert
    pub async fn delete(&self, config: &AlertConfig) -> Result<()> {
        self.client
            .alerts()
            .delete(&config.repository, &config.name)
            .await?;
        info!(repository = %config.repository, name = %config.name, "deleted alert");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_queries_always_run_live_until_now() {
        let config = AlertConfig {
            repository: "prod".to_string(),
            name: "errors".to_string(),
            throttle_time_millis: 300_000,
            start: "24h".to_string(),
            query: "loglevel=ERROR".to_string(),
            notifiers: vec!["n1".to_string()],
            ..AlertConfig::default()
        };

        let alert = alert_from_config(&config);
        assert_eq!(alert.query.end, "now");
        assert!(alert.query.is_live);
        assert_eq!(alert.query.query_string, "loglevel=ERROR");
        assert_eq!(alert.query.start, "24h");
    }

    #[test]
    fn alert_round_trips_through_the_config_surface() {
        let config = AlertConfig {
            repository: "prod".to_string(),
            name: "errors".to_string(),
            description: "error spike".to_string(),
            throttle_time_millis: 60_000,
            silenced: true,
            start: "1h".to_string(),
            query: "loglevel=ERROR | count()".to_string(),
            notifiers: vec!["n1".to_string(), "n2".to_string()],
            labels: vec!["team-a".to_string()],
        };

        let rebuilt = config_from_alert(&alert_from_config(&config), "prod");
        assert_eq!(rebuilt, config);
        assert_eq!(rebuilt.id(), "prod+errors");
    }
}
