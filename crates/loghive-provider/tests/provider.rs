//! Provider-level tests: configuration in, reconciled configuration out.

use std::collections::BTreeMap;

use loghive_client::LoghiveClient;
use loghive_provider::{
    AlertConfig, BlockState, NotifierConfig, Provider, RepositoryConfig, RetentionConfig,
    SlackBlock,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> Provider {
    let client = LoghiveClient::builder("test-token")
        .base_url(server.uri())
        .build()
        .unwrap();
    Provider::from_client(client)
}

#[tokio::test]
async fn notifier_create_reconciles_observed_state() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/repositories/prod/notifiers"))
        .and(body_partial_json(json!({
            "entity": "Slack",
            "name": "oncall",
            "properties": {
                "fields": {"Query": "{query_string}"},
                "url": "https://hooks.slack.com/services/X/Y/Z"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "srv-9",
            "entity": "Slack",
            "name": "oncall",
            "properties": {
                "fields": {"Query": "{query_string}"},
                "url": "https://hooks.slack.com/services/X/Y/Z"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/repositories/prod/notifiers/oncall"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "srv-9",
            "entity": "Slack",
            "name": "oncall",
            "properties": {
                "fields": {"Query": "{query_string}"},
                "url": "https://hooks.slack.com/services/X/Y/Z"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = NotifierConfig {
        repository: "prod".to_string(),
        name: "oncall".to_string(),
        entity: "Slack".to_string(),
        slack: BlockState::pending(SlackBlock {
            fields: BTreeMap::from([("Query".to_string(), "{query_string}".to_string())]),
            url: "https://hooks.slack.com/services/X/Y/Z".to_string(),
        }),
        ..NotifierConfig::default()
    };

    let observed = provider_for(&server).notifiers().create(&config).await.unwrap();

    assert_eq!(observed.notifier_id, "srv-9");
    assert_eq!(observed.entity, "Slack");
    assert_eq!(observed.id(), "prod+oncall");
    let block = observed.slack.committed.first().unwrap();
    assert_eq!(block.url, "https://hooks.slack.com/services/X/Y/Z");
    assert!(observed.email.is_empty());
}

#[tokio::test]
async fn notifier_import_splits_the_composite_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/repositories/prod/notifiers/oncall"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "srv-9",
            "entity": "Slack",
            "name": "oncall",
            "properties": {
                "fields": {},
                "url": "https://hooks.slack.com/services/X/Y/Z"
            }
        })))
        .mount(&server)
        .await;

    let observed = provider_for(&server)
        .notifiers()
        .read_by_id("prod+oncall")
        .await
        .unwrap();
    assert_eq!(observed.repository, "prod");
    assert_eq!(observed.name, "oncall");

    let err = provider_for(&server)
        .notifiers()
        .read_by_id("missing-separator")
        .await
        .unwrap_err();
    assert!(matches!(err, loghive_core::Error::InvalidId { .. }));
}

#[tokio::test]
async fn alert_create_reads_back_the_server_copy() {
    let server = MockServer::start().await;
    let body = json!({
        "name": "errors",
        "description": "spike",
        "throttleTimeMillis": 60_000,
        "silenced": false,
        "notifiers": ["n1"],
        "labels": ["team-a"],
        "query": {
            "queryString": "loglevel=ERROR",
            "start": "1h",
            "end": "now",
            "isLive": true
        }
    });
    Mock::given(method("POST"))
        .and(path("/api/v1/repositories/prod/alerts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/repositories/prod/alerts/errors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let config = AlertConfig {
        repository: "prod".to_string(),
        name: "errors".to_string(),
        description: "spike".to_string(),
        throttle_time_millis: 60_000,
        silenced: false,
        start: "1h".to_string(),
        query: "loglevel=ERROR".to_string(),
        notifiers: vec!["n1".to_string()],
        labels: vec!["team-a".to_string()],
    };

    let observed = provider_for(&server).alerts().create(&config).await.unwrap();
    assert_eq!(observed, config);
}

#[tokio::test]
async fn repository_create_applies_every_setting() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/repositories"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/repositories/prod/description"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    for retention in ["time", "ingest-size", "storage-size"] {
        Mock::given(method("PUT"))
            .and(path(format!("/api/v1/repositories/prod/retention/{retention}")))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/api/v1/repositories/prod"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "prod",
            "description": "production logs",
            "retentionDays": 30.0,
            "ingestRetentionSizeGB": 10.0,
            "storageRetentionSizeGB": 5.0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = RepositoryConfig {
        name: "prod".to_string(),
        description: "production logs".to_string(),
        allow_data_deletion: true,
        retention: RetentionConfig {
            time_in_days: Some(30.0),
            ingest_size_in_gb: Some(10.0),
            storage_size_in_gb: Some(5.0),
        },
    };

    let observed = provider_for(&server)
        .repositories()
        .create(&config)
        .await
        .unwrap();
    assert_eq!(observed, config);
}
