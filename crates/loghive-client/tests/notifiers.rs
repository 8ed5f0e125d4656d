//! Notifier endpoint tests against a mock server.

use loghive_client::LoghiveClient;
use loghive_core::{
    Error, Notifier, NotifierSettings, NotifierVariant, SlackSettings, WebHookSettings,
    WebhookMethod,
};
use serde_json::json;
use std::collections::BTreeMap;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> LoghiveClient {
    LoghiveClient::builder("test-token")
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn get_decodes_a_slack_notifier() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/repositories/prod/notifiers/oncall"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "abc123",
            "entity": "Slack",
            "name": "oncall",
            "properties": {
                "fields": {"Query": "{query_string}"},
                "url": "https://hooks.slack.com/services/X/Y/Z"
            }
        })))
        .mount(&server)
        .await;

    let notifier = client_for(&server)
        .notifiers()
        .get("prod", "oncall")
        .await
        .unwrap();

    assert_eq!(notifier.id, "abc123");
    assert_eq!(notifier.variant(), NotifierVariant::Slack);
    let NotifierSettings::Slack(slack) = notifier.settings else {
        panic!("expected slack settings");
    };
    assert_eq!(slack.url, "https://hooks.slack.com/services/X/Y/Z");
    assert_eq!(slack.fields.get("Query").map(String::as_str), Some("{query_string}"));
}

#[tokio::test]
async fn add_posts_the_property_map() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/repositories/prod/notifiers"))
        .and(body_partial_json(json!({
            "entity": "WebHook",
            "name": "hook",
            "properties": {
                "method": "POST",
                "url": "https://example.com/hook"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "srv-1",
            "entity": "WebHook",
            "name": "hook",
            "properties": {
                "bodyTemplate": "{events}",
                "headers": {"Content-Type": "application/json"},
                "method": "POST",
                "url": "https://example.com/hook"
            }
        })))
        .mount(&server)
        .await;

    let notifier = Notifier::new(
        "hook",
        NotifierSettings::WebHook(WebHookSettings {
            body_template: "{events}".to_string(),
            headers: BTreeMap::from([(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )]),
            method: WebhookMethod::Post,
            url: "https://example.com/hook".to_string(),
        }),
    );

    let created = client_for(&server)
        .notifiers()
        .add("prod", &notifier, false)
        .await
        .unwrap();

    assert_eq!(created.id, "srv-1");
    assert_eq!(created.settings, notifier.settings);
}

#[tokio::test]
async fn update_uses_put_on_the_named_notifier() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/repositories/prod/notifiers/oncall"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "abc123",
            "entity": "Slack",
            "name": "oncall",
            "properties": {
                "fields": {},
                "url": "https://hooks.slack.com/services/new"
            }
        })))
        .mount(&server)
        .await;

    let notifier = Notifier::new(
        "oncall",
        NotifierSettings::Slack(SlackSettings {
            fields: BTreeMap::new(),
            url: "https://hooks.slack.com/services/new".to_string(),
        }),
    );

    let updated = client_for(&server)
        .notifiers()
        .add("prod", &notifier, true)
        .await
        .unwrap();
    assert_eq!(updated.id, "abc123");
}

#[tokio::test]
async fn delete_targets_the_named_notifier() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/repositories/prod/notifiers/oncall"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .notifiers()
        .delete("prod", "oncall")
        .await
        .unwrap();
}

#[tokio::test]
async fn unknown_entity_from_the_server_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/repositories/prod/notifiers/odd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "x",
            "entity": "BogusNotifier",
            "name": "odd",
            "properties": {}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .notifiers()
        .get("prod", "odd")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedEntity(entity) if entity == "BogusNotifier"));
}

#[tokio::test]
async fn missing_notifiers_map_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/repositories/prod/notifiers/ghost"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "no such notifier"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .notifiers()
        .get("prod", "ghost")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { resource } if resource == "no such notifier"));
}

#[tokio::test]
async fn rejected_tokens_map_to_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/repositories/prod/notifiers"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server).notifiers().list("prod").await.unwrap_err();
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn server_errors_carry_code_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/repositories/prod/notifiers"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&server)
        .await;

    let err = client_for(&server).notifiers().list("prod").await.unwrap_err();
    assert!(matches!(err, Error::Api { code: 500, message } if message == "boom"));
}
