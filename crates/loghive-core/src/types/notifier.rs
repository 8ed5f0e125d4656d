use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Default OpsGenie API endpoint used when no `api_url` is configured
pub const DEFAULT_OPSGENIE_API_URL: &str = "https://api.opsgenie.com";

/// Default payload template for webhook notifications
pub const DEFAULT_WEBHOOK_BODY_TEMPLATE: &str = "{\n  \"repository\": \"{repo_name}\",\n  \"timestamp\": \"{alert_triggered_timestamp}\",\n  \"alert\": {\n    \"name\": \"{alert_name}\",\n    \"description\": \"{alert_description}\",\n    \"query\": {\n      \"queryString\": \"{query_string} \",\n      \"end\": \"{query_time_end}\",\n      \"start\": \"{query_time_start}\"\n    },\n    \"notifierID\": \"{alert_notifier_id}\",\n    \"id\": \"{alert_id}\"\n  },\n  \"warnings\": \"{warnings}\",\n  \"events\": {events},\n  \"numberOfEvents\": {event_count}\n  }";

/// One of the supported notification channel kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotifierVariant {
    /// Email delivery to a list of recipients
    Email,
    /// Forwarding into another repository via an ingest token
    HumioRepo,
    /// OpsGenie incident creation
    OpsGenie,
    /// PagerDuty event routing
    PagerDuty,
    /// Slack incoming webhook
    Slack,
    /// Slack chat.postMessage API
    SlackPostMessage,
    /// VictorOps (Splunk On-Call) REST endpoint
    VictorOps,
    /// Generic HTTP webhook
    WebHook,
}

impl NotifierVariant {
    /// All variants, in discriminator order
    pub const ALL: [Self; 8] = [
        Self::Email,
        Self::HumioRepo,
        Self::OpsGenie,
        Self::PagerDuty,
        Self::Slack,
        Self::SlackPostMessage,
        Self::VictorOps,
        Self::WebHook,
    ];

    /// The discriminator string for this variant
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::HumioRepo => "HumioRepo",
            Self::OpsGenie => "OpsGenie",
            Self::PagerDuty => "PagerDuty",
            Self::Slack => "Slack",
            Self::SlackPostMessage => "SlackPostMessage",
            Self::VictorOps => "VictorOps",
            Self::WebHook => "WebHook",
        }
    }
}

impl std::fmt::Display for NotifierVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotifierVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| Error::UnsupportedEntity(s.to_string()))
    }
}

/// A single value in a notifier property map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Plain string setting
    String(String),
    /// Boolean flag
    Bool(bool),
    /// List of strings
    List(Vec<String>),
    /// String-to-string mapping
    Map(BTreeMap<String, String>),
}

impl PropertyValue {
    /// Returns the string value, if this is a string
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a flag
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the list value, if this is a list
    #[must_use]
    pub const fn as_list(&self) -> Option<&Vec<String>> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the map value, if this is a map
    #[must_use]
    pub const fn as_map(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<BTreeMap<String, String>> for PropertyValue {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self::Map(entries)
    }
}

/// The loosely-typed key/value representation the API uses to carry
/// variant-specific notifier settings
pub type PropertyMap = BTreeMap<String, PropertyValue>;

/// PagerDuty event severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Critical incident
    Critical,
    /// Error condition
    Error,
    /// Warning condition
    Warning,
    /// Informational event
    Info,
}

impl Severity {
    /// The canonical string form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "critical" => Ok(Self::Critical),
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            _ => Err(Error::InvalidValue {
                field: "severity".to_string(),
                value: s.to_string(),
                allowed: "critical, error, warning, info",
            }),
        }
    }
}

/// HTTP method used by webhook notifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebhookMethod {
    /// HTTP GET
    Get,
    /// HTTP POST
    Post,
    /// HTTP PUT
    Put,
}

impl Default for WebhookMethod {
    fn default() -> Self {
        Self::Post
    }
}

impl WebhookMethod {
    /// The canonical string form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

impl std::fmt::Display for WebhookMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WebhookMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            _ => Err(Error::InvalidValue {
                field: "method".to_string(),
                value: s.to_string(),
                allowed: "GET, POST, PUT",
            }),
        }
    }
}

/// Settings for [`NotifierVariant::Email`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSettings {
    /// Recipient addresses; at least one
    pub recipients: Vec<String>,
    /// Message body template
    pub body_template: Option<String>,
    /// Subject line template
    pub subject_template: Option<String>,
}

/// Settings for [`NotifierVariant::HumioRepo`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumioRepoSettings {
    /// Ingest token of the destination repository
    pub ingest_token: String,
}

/// Settings for [`NotifierVariant::OpsGenie`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpsGenieSettings {
    /// OpsGenie API endpoint
    pub api_url: String,
    /// OpsGenie integration key
    pub genie_key: String,
}

/// Settings for [`NotifierVariant::PagerDuty`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerDutySettings {
    /// Events API routing key
    pub routing_key: String,
    /// Event severity
    pub severity: Severity,
}

/// Settings for [`NotifierVariant::Slack`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlackSettings {
    /// Message fields shown in the Slack attachment
    pub fields: BTreeMap<String, String>,
    /// Incoming webhook URL
    pub url: String,
}

/// Settings for [`NotifierVariant::SlackPostMessage`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlackPostMessageSettings {
    /// Bot API token
    pub api_token: String,
    /// Channels to post to; at least one
    pub channels: Vec<String>,
    /// Message fields shown in the Slack attachment
    pub fields: BTreeMap<String, String>,
    /// Route the request through the service proxy
    pub use_proxy: bool,
}

/// Settings for [`NotifierVariant::VictorOps`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VictorOpsSettings {
    /// VictorOps message type
    pub message_type: String,
    /// REST endpoint notify URL
    pub notify_url: String,
}

/// Settings for [`NotifierVariant::WebHook`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebHookSettings {
    /// Request body template
    pub body_template: String,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
    /// HTTP method for the request
    pub method: WebhookMethod,
    /// Target URL
    pub url: String,
}

/// Variant-specific notifier settings as a tagged sum
///
/// Each variant carries exactly the fields that are legal for that channel.
/// The untyped property map the API exchanges exists only at the
/// serialization boundary; see [`NotifierSettings::to_properties`] and
/// [`NotifierSettings::from_properties`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifierSettings {
    /// Email delivery
    Email(EmailSettings),
    /// Repository forwarding
    HumioRepo(HumioRepoSettings),
    /// OpsGenie incidents
    OpsGenie(OpsGenieSettings),
    /// PagerDuty events
    PagerDuty(PagerDutySettings),
    /// Slack incoming webhook
    Slack(SlackSettings),
    /// Slack chat.postMessage
    SlackPostMessage(SlackPostMessageSettings),
    /// VictorOps endpoint
    VictorOps(VictorOpsSettings),
    /// Generic webhook
    WebHook(WebHookSettings),
}

impl NotifierSettings {
    /// The variant these settings belong to
    #[must_use]
    pub const fn variant(&self) -> NotifierVariant {
        match self {
            Self::Email(_) => NotifierVariant::Email,
            Self::HumioRepo(_) => NotifierVariant::HumioRepo,
            Self::OpsGenie(_) => NotifierVariant::OpsGenie,
            Self::PagerDuty(_) => NotifierVariant::PagerDuty,
            Self::Slack(_) => NotifierVariant::Slack,
            Self::SlackPostMessage(_) => NotifierVariant::SlackPostMessage,
            Self::VictorOps(_) => NotifierVariant::VictorOps,
            Self::WebHook(_) => NotifierVariant::WebHook,
        }
    }

    /// Render these settings as the property map the API understands
    ///
    /// Required keys are always present. Optional keys without a default are
    /// omitted when empty; the API treats key absence differently from an
    /// empty value for some fields.
    #[must_use]
    pub fn to_properties(&self) -> PropertyMap {
        let mut properties = PropertyMap::new();
        match self {
            Self::Email(settings) => {
                properties.insert(
                    "recipients".to_string(),
                    PropertyValue::List(settings.recipients.clone()),
                );
                if let Some(body) = non_empty(settings.body_template.as_deref()) {
                    properties.insert("bodyTemplate".to_string(), body.into());
                }
                if let Some(subject) = non_empty(settings.subject_template.as_deref()) {
                    properties.insert("subjectTemplate".to_string(), subject.into());
                }
            }
            Self::HumioRepo(settings) => {
                properties.insert(
                    "ingestToken".to_string(),
                    settings.ingest_token.as_str().into(),
                );
            }
            Self::OpsGenie(settings) => {
                properties.insert("apiUrl".to_string(), settings.api_url.as_str().into());
                properties.insert("genieKey".to_string(), settings.genie_key.as_str().into());
            }
            Self::PagerDuty(settings) => {
                properties.insert(
                    "routingKey".to_string(),
                    settings.routing_key.as_str().into(),
                );
                properties.insert("severity".to_string(), settings.severity.as_str().into());
            }
            Self::Slack(settings) => {
                properties.insert("fields".to_string(), PropertyValue::Map(settings.fields.clone()));
                properties.insert("url".to_string(), settings.url.as_str().into());
            }
            Self::SlackPostMessage(settings) => {
                properties.insert("apiToken".to_string(), settings.api_token.as_str().into());
                properties.insert(
                    "channels".to_string(),
                    PropertyValue::List(settings.channels.clone()),
                );
                properties.insert("fields".to_string(), PropertyValue::Map(settings.fields.clone()));
                properties.insert("useProxy".to_string(), settings.use_proxy.into());
            }
            Self::VictorOps(settings) => {
                properties.insert(
                    "messageType".to_string(),
                    settings.message_type.as_str().into(),
                );
                properties.insert("notifyUrl".to_string(), settings.notify_url.as_str().into());
            }
            Self::WebHook(settings) => {
                properties.insert(
                    "bodyTemplate".to_string(),
                    settings.body_template.as_str().into(),
                );
                properties.insert("headers".to_string(), PropertyValue::Map(settings.headers.clone()));
                properties.insert("method".to_string(), settings.method.as_str().into());
                properties.insert("url".to_string(), settings.url.as_str().into());
            }
        }
        properties
    }

    /// Rebuild typed settings from a property map returned by the API
    ///
    /// Required keys must be present; defaulted keys fall back to their
    /// documented defaults when absent.
    pub fn from_properties(variant: NotifierVariant, properties: &PropertyMap) -> Result<Self> {
        match variant {
            NotifierVariant::Email => Ok(Self::Email(EmailSettings {
                recipients: required_list(properties, "recipients")?,
                body_template: optional_string(properties, "bodyTemplate"),
                subject_template: optional_string(properties, "subjectTemplate"),
            })),
            NotifierVariant::HumioRepo => Ok(Self::HumioRepo(HumioRepoSettings {
                ingest_token: required_string(properties, "ingestToken")?,
            })),
            NotifierVariant::OpsGenie => Ok(Self::OpsGenie(OpsGenieSettings {
                api_url: optional_string(properties, "apiUrl")
                    .unwrap_or_else(|| DEFAULT_OPSGENIE_API_URL.to_string()),
                genie_key: required_string(properties, "genieKey")?,
            })),
            NotifierVariant::PagerDuty => Ok(Self::PagerDuty(PagerDutySettings {
                routing_key: required_string(properties, "routingKey")?,
                severity: required_string(properties, "severity")?.parse()?,
            })),
            NotifierVariant::Slack => Ok(Self::Slack(SlackSettings {
                fields: required_map(properties, "fields")?,
                url: required_string(properties, "url")?,
            })),
            NotifierVariant::SlackPostMessage => Ok(Self::SlackPostMessage(SlackPostMessageSettings {
                api_token: required_string(properties, "apiToken")?,
                channels: required_list(properties, "channels")?,
                fields: required_map(properties, "fields")?,
                use_proxy: properties
                    .get("useProxy")
                    .and_then(PropertyValue::as_bool)
                    .unwrap_or(true),
            })),
            NotifierVariant::VictorOps => Ok(Self::VictorOps(VictorOpsSettings {
                message_type: required_string(properties, "messageType")?,
                notify_url: required_string(properties, "notifyUrl")?,
            })),
            NotifierVariant::WebHook => Ok(Self::WebHook(WebHookSettings {
                body_template: optional_string(properties, "bodyTemplate")
                    .unwrap_or_else(|| DEFAULT_WEBHOOK_BODY_TEMPLATE.to_string()),
                headers: required_map(properties, "headers")?,
                method: match optional_string(properties, "method") {
                    Some(method) => method.parse()?,
                    None => WebhookMethod::default(),
                },
                url: required_string(properties, "url")?,
            })),
        }
    }
}

/// A configured alert notification destination
///
/// A notifier never exists in isolation; it is always scoped to a repository
/// carried alongside it, not inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notifier {
    /// Identifier assigned by the server; empty until first create
    pub id: String,
    /// User-chosen name, unique within the owning repository
    pub name: String,
    /// Variant-specific settings
    pub settings: NotifierSettings,
}

impl Notifier {
    /// Create a notifier that has not been sent to the server yet
    #[must_use]
    pub fn new(name: impl Into<String>, settings: NotifierSettings) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            settings,
        }
    }

    /// The variant of this notifier
    #[must_use]
    pub const fn variant(&self) -> NotifierVariant {
        self.settings.variant()
    }

    /// The wire representation of this notifier
    #[must_use]
    pub fn to_payload(&self) -> NotifierPayload {
        NotifierPayload {
            id: self.id.clone(),
            entity: self.variant().as_str().to_string(),
            name: self.name.clone(),
            properties: self.settings.to_properties(),
        }
    }
}

/// Wire representation of a notifier as the API exchanges it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierPayload {
    /// Server-assigned identifier
    #[serde(default)]
    pub id: String,

    /// Variant discriminator
    pub entity: String,

    /// Notifier name
    pub name: String,

    /// Variant-specific settings keyed by API field names
    #[serde(default)]
    pub properties: PropertyMap,
}

impl From<&Notifier> for NotifierPayload {
    fn from(notifier: &Notifier) -> Self {
        notifier.to_payload()
    }
}

impl TryFrom<NotifierPayload> for Notifier {
    type Error = Error;

    fn try_from(payload: NotifierPayload) -> Result<Self> {
        let variant: NotifierVariant = payload.entity.parse()?;
        let settings = NotifierSettings::from_properties(variant, &payload.properties)?;
        Ok(Self {
            id: payload.id,
            name: payload.name,
            settings,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_owned)
}

fn required_string(properties: &PropertyMap, key: &str) -> Result<String> {
    properties
        .get(key)
        .and_then(PropertyValue::as_str)
        .map(str::to_owned)
        .ok_or_else(|| Error::MissingField {
            field: key.to_string(),
        })
}

fn optional_string(properties: &PropertyMap, key: &str) -> Option<String> {
    properties
        .get(key)
        .and_then(PropertyValue::as_str)
        .map(str::to_owned)
}

fn required_list(properties: &PropertyMap, key: &str) -> Result<Vec<String>> {
    properties
        .get(key)
        .and_then(PropertyValue::as_list)
        .cloned()
        .ok_or_else(|| Error::MissingField {
            field: key.to_string(),
        })
}

fn required_map(properties: &PropertyMap, key: &str) -> Result<BTreeMap<String, String>> {
    properties
        .get(key)
        .and_then(PropertyValue::as_map)
        .cloned()
        .ok_or_else(|| Error::MissingField {
            field: key.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slack_settings() -> NotifierSettings {
        NotifierSettings::Slack(SlackSettings {
            fields: BTreeMap::from([("Query".to_string(), "{query_string}".to_string())]),
            url: "https://hooks.slack.com/services/X/Y/Z".to_string(),
        })
    }

    #[test]
    fn variant_round_trips_through_str() {
        for variant in NotifierVariant::ALL {
            assert_eq!(variant.as_str().parse::<NotifierVariant>().unwrap(), variant);
        }
    }

    #[test]
    fn unknown_entity_is_rejected() {
        let err = "BogusNotifier".parse::<NotifierVariant>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedEntity(entity) if entity == "BogusNotifier"));
    }

    #[test]
    fn slack_properties_match_api_keys() {
        let properties = slack_settings().to_properties();
        assert_eq!(
            properties.get("url").and_then(PropertyValue::as_str),
            Some("https://hooks.slack.com/services/X/Y/Z")
        );
        let fields = properties.get("fields").and_then(PropertyValue::as_map).unwrap();
        assert_eq!(fields.get("Query").map(String::as_str), Some("{query_string}"));
        assert_eq!(properties.len(), 2);
    }

    #[test]
    fn email_omits_empty_optional_keys() {
        let settings = NotifierSettings::Email(EmailSettings {
            recipients: vec!["a@x.org".to_string()],
            body_template: None,
            subject_template: Some(String::new()),
        });
        let properties = settings.to_properties();
        assert_eq!(properties.len(), 1);
        assert_eq!(
            properties.get("recipients").and_then(PropertyValue::as_list),
            Some(&vec!["a@x.org".to_string()])
        );
    }

    #[test]
    fn settings_round_trip_through_properties() {
        let all = [
            NotifierSettings::Email(EmailSettings {
                recipients: vec!["ops@example.com".to_string(), "dev@example.com".to_string()],
                body_template: Some("{events}".to_string()),
                subject_template: None,
            }),
            NotifierSettings::HumioRepo(HumioRepoSettings {
                ingest_token: "token123".to_string(),
            }),
            NotifierSettings::OpsGenie(OpsGenieSettings {
                api_url: DEFAULT_OPSGENIE_API_URL.to_string(),
                genie_key: "genie".to_string(),
            }),
            NotifierSettings::PagerDuty(PagerDutySettings {
                routing_key: "route-1".to_string(),
                severity: Severity::Critical,
            }),
            slack_settings(),
            NotifierSettings::SlackPostMessage(SlackPostMessageSettings {
                api_token: "xoxb-1".to_string(),
                channels: vec!["#ops".to_string()],
                fields: BTreeMap::from([("Events".to_string(), "{events}".to_string())]),
                use_proxy: false,
            }),
            NotifierSettings::VictorOps(VictorOpsSettings {
                message_type: "CRITICAL".to_string(),
                notify_url: "https://alert.victorops.com/integrations/x".to_string(),
            }),
            NotifierSettings::WebHook(WebHookSettings {
                body_template: DEFAULT_WEBHOOK_BODY_TEMPLATE.to_string(),
                headers: BTreeMap::from([("Content-Type".to_string(), "application/json".to_string())]),
                method: WebhookMethod::Post,
                url: "https://example.com/hook".to_string(),
            }),
        ];
        for settings in all {
            let rebuilt =
                NotifierSettings::from_properties(settings.variant(), &settings.to_properties())
                    .unwrap();
            assert_eq!(rebuilt, settings);
        }
    }

    #[test]
    fn missing_required_property_is_an_error() {
        let err =
            NotifierSettings::from_properties(NotifierVariant::OpsGenie, &PropertyMap::new())
                .unwrap_err();
        assert!(matches!(err, Error::MissingField { field } if field == "genieKey"));
    }

    #[test]
    fn webhook_defaults_apply_when_keys_are_absent() {
        let mut properties = PropertyMap::new();
        properties.insert("url".to_string(), "https://example.com/hook".into());
        properties.insert(
            "headers".to_string(),
            PropertyValue::Map(BTreeMap::from([(
                "Authorization".to_string(),
                "Bearer abc".to_string(),
            )])),
        );
        let settings =
            NotifierSettings::from_properties(NotifierVariant::WebHook, &properties).unwrap();
        let NotifierSettings::WebHook(webhook) = settings else {
            panic!("expected webhook settings");
        };
        assert_eq!(webhook.method, WebhookMethod::Post);
        assert_eq!(webhook.body_template, DEFAULT_WEBHOOK_BODY_TEMPLATE);
    }

    #[test]
    fn invalid_severity_is_rejected() {
        let mut properties = PropertyMap::new();
        properties.insert("routingKey".to_string(), "key".into());
        properties.insert("severity".to_string(), "catastrophic".into());
        let err = NotifierSettings::from_properties(NotifierVariant::PagerDuty, &properties)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidValue { value, .. } if value == "catastrophic"));
    }

    #[test]
    fn payload_conversion_surfaces_unsupported_entity() {
        let payload = NotifierPayload {
            id: "123".to_string(),
            entity: "BogusNotifier".to_string(),
            name: "n".to_string(),
            properties: PropertyMap::new(),
        };
        let err = Notifier::try_from(payload).unwrap_err();
        assert!(matches!(err, Error::UnsupportedEntity(entity) if entity == "BogusNotifier"));
    }

    #[test]
    fn property_value_serde_shapes() {
        let json = serde_json::json!({
            "recipients": ["a@x.org"],
            "useProxy": true,
            "fields": {"Query": "{query_string}"},
            "url": "https://example.com"
        });
        let properties: PropertyMap = serde_json::from_value(json).unwrap();
        assert!(matches!(properties.get("recipients"), Some(PropertyValue::List(_))));
        assert!(matches!(properties.get("useProxy"), Some(PropertyValue::Bool(true))));
        assert!(matches!(properties.get("fields"), Some(PropertyValue::Map(_))));
        assert!(matches!(properties.get("url"), Some(PropertyValue::String(_))));
    }
}
