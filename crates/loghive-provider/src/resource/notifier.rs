//! Notifier resources: configuration surface, codec, and CRUD.
//!
//! One flat record represents a notifier of any of the eight channel kinds:
//! the `entity` discriminator selects a variant and exactly one of the
//! nested blocks carries that variant's settings. The codec translates
//! between this surface and the [`Notifier`] domain entity.

use std::collections::BTreeMap;

use loghive_client::LoghiveClient;
use loghive_core::{
    EmailSettings, Error, HumioRepoSettings, Notifier, NotifierSettings, NotifierVariant,
    OpsGenieSettings, PagerDutySettings, Result, Severity, SlackPostMessageSettings,
    SlackSettings, VictorOpsSettings, WebHookSettings, WebhookMethod,
    DEFAULT_OPSGENIE_API_URL, DEFAULT_WEBHOOK_BODY_TEMPLATE,
};
use tracing::info;

use crate::block::BlockState;
use crate::provider::parse_composite_id;
use crate::validate::{validate_email, validate_url};

/// Flat configuration record for one notifier resource instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotifierConfig {
    /// Repository owning the notifier
    pub repository: String,

    /// Notifier name
    pub name: String,

    /// Variant discriminator; one of the [`NotifierVariant`] names
    pub entity: String,

    /// Server-assigned identifier; output only
    pub notifier_id: String,

    /// Email block
    pub email: BlockState<EmailBlock>,

    /// Repository-forwarding block
    pub humiorepo: BlockState<HumioRepoBlock>,

    /// OpsGenie block
    pub opsgenie: BlockState<OpsGenieBlock>,

    /// PagerDuty block
    pub pagerduty: BlockState<PagerDutyBlock>,

    /// Slack incoming-webhook block
    pub slack: BlockState<SlackBlock>,

    /// Slack chat.postMessage block
    pub slackpostmessage: BlockState<SlackPostMessageBlock>,

    /// VictorOps block
    pub victorops: BlockState<VictorOpsBlock>,

    /// Generic webhook block
    pub webhook: BlockState<WebHookBlock>,
}

/// Settings block for [`NotifierVariant::Email`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailBlock {
    /// Message body template
    pub body_template: Option<String>,
    /// Recipient addresses; at least one
    pub recipients: Vec<String>,
    /// Subject line template
    pub subject_template: Option<String>,
}

/// Settings block for [`NotifierVariant::HumioRepo`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HumioRepoBlock {
    /// Ingest token of the destination repository
    pub ingest_token: String,
}

/// Settings block for [`NotifierVariant::OpsGenie`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpsGenieBlock {
    /// OpsGenie API endpoint; defaults to the public endpoint
    pub api_url: Option<String>,
    /// OpsGenie integration key
    pub genie_key: String,
}

/// Settings block for [`NotifierVariant::PagerDuty`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerDutyBlock {
    /// Events API routing key
    pub routing_key: String,
    /// Event severity
    pub severity: Severity,
}

/// Settings block for [`NotifierVariant::Slack`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlackBlock {
    /// Message fields shown in the Slack attachment
    pub fields: BTreeMap<String, String>,
    /// Incoming webhook URL
    pub url: String,
}

/// Settings block for [`NotifierVariant::SlackPostMessage`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlackPostMessageBlock {
    /// Bot API token
    pub api_token: String,
    /// Channels to post to; at least one
    pub channels: Vec<String>,
    /// Message fields shown in the Slack attachment
    pub fields: BTreeMap<String, String>,
    /// Route the request through the service proxy; defaults to true
    pub use_proxy: Option<bool>,
}

/// Settings block for [`NotifierVariant::VictorOps`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VictorOpsBlock {
    /// VictorOps message type
    pub message_type: String,
    /// REST endpoint notify URL
    pub notify_url: String,
}

/// Settings block for [`NotifierVariant::WebHook`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebHookBlock {
    /// Request body template; defaults to a JSON rendering of the event
    pub body_template: Option<String>,
    /// Extra request headers
    pub headers: BTreeMap<String, String>,
    /// HTTP method; defaults to POST
    pub method: Option<WebhookMethod>,
    /// Target URL
    pub url: String,
}

impl NotifierConfig {
    /// The composite identifier of this notifier
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}+{}", self.repository, self.name)
    }

    /// Check the record the way declared configuration is validated:
    /// known discriminator, at most one populated block, the populated block
    /// matching the discriminator, and field-level formats.
    pub fn validate(&self) -> Result<()> {
        let variant: NotifierVariant = self.entity.parse()?;

        let populated = self.populated_blocks();
        if populated.len() > 1 {
            return Err(Error::ConflictingBlocks {
                first: populated[0],
                second: populated[1],
            });
        }
        if let Some(&block) = populated.first() {
            if block != block_name(variant) {
                return Err(Error::BlockMismatch {
                    entity: self.entity.clone(),
                    block,
                });
            }
        }

        for block in self.email.iter() {
            for recipient in &block.recipients {
                validate_email("email.recipients", recipient)?;
            }
        }
        for block in self.opsgenie.iter() {
            if let Some(api_url) = block.api_url.as_deref().filter(|url| !url.is_empty()) {
                validate_url("opsgenie.api_url", api_url)?;
            }
        }
        for block in self.slack.iter() {
            if !block.url.is_empty() {
                validate_url("slack.url", &block.url)?;
            }
        }
        for block in self.victorops.iter() {
            if !block.notify_url.is_empty() {
                validate_url("victorops.notify_url", &block.notify_url)?;
            }
        }
        for block in self.webhook.iter() {
            if !block.url.is_empty() {
                validate_url("webhook.url", &block.url)?;
            }
        }

        Ok(())
    }

    fn populated_blocks(&self) -> Vec<&'static str> {
        let mut populated = Vec::new();
        if !self.email.is_empty() {
            populated.push("email");
        }
        if !self.humiorepo.is_empty() {
            populated.push("humiorepo");
        }
        if !self.opsgenie.is_empty() {
            populated.push("opsgenie");
        }
        if !self.pagerduty.is_empty() {
            populated.push("pagerduty");
        }
        if !self.slack.is_empty() {
            populated.push("slack");
        }
        if !self.slackpostmessage.is_empty() {
            populated.push("slackpostmessage");
        }
        if !self.victorops.is_empty() {
            populated.push("victorops");
        }
        if !self.webhook.is_empty() {
            populated.push("webhook");
        }
        populated
    }
}

const fn block_name(variant: NotifierVariant) -> &'static str {
    match variant {
        NotifierVariant::Email => "email",
        NotifierVariant::HumioRepo => "humiorepo",
        NotifierVariant::OpsGenie => "opsgenie",
        NotifierVariant::PagerDuty => "pagerduty",
        NotifierVariant::Slack => "slack",
        NotifierVariant::SlackPostMessage => "slackpostmessage",
        NotifierVariant::VictorOps => "victorops",
        NotifierVariant::WebHook => "webhook",
    }
}

fn missing(field: &str) -> Error {
    Error::MissingField {
        field: field.to_string(),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_owned)
}

/// Build the domain notifier from a flat configuration record
///
/// The discriminator selects the variant; the matching block is resolved via
/// [`BlockState::select`] with that variant's marker field, and defaulted
/// fields are filled in. Empty optional fields are dropped so they stay
/// absent from the property map.
pub fn notifier_from_config(config: &NotifierConfig) -> Result<Notifier> {
    let variant: NotifierVariant = config.entity.parse()?;

    let settings = match variant {
        NotifierVariant::Email => {
            let block = config
                .email
                .select(|b| !b.recipients.is_empty())
                .ok_or_else(|| missing("email.recipients"))?;
            NotifierSettings::Email(EmailSettings {
                recipients: block.recipients.clone(),
                body_template: non_empty(block.body_template.as_deref()),
                subject_template: non_empty(block.subject_template.as_deref()),
            })
        }
        NotifierVariant::HumioRepo => {
            let block = config
                .humiorepo
                .select(|b| !b.ingest_token.is_empty())
                .ok_or_else(|| missing("humiorepo.ingest_token"))?;
            NotifierSettings::HumioRepo(HumioRepoSettings {
                ingest_token: block.ingest_token.clone(),
            })
        }
        NotifierVariant::OpsGenie => {
            let block = config
                .opsgenie
                .select(|b| !b.genie_key.is_empty())
                .ok_or_else(|| missing("opsgenie.genie_key"))?;
            NotifierSettings::OpsGenie(OpsGenieSettings {
                api_url: non_empty(block.api_url.as_deref())
                    .unwrap_or_else(|| DEFAULT_OPSGENIE_API_URL.to_string()),
                genie_key: block.genie_key.clone(),
            })
        }
        NotifierVariant::PagerDuty => {
            let block = config
                .pagerduty
                .select(|b| !b.routing_key.is_empty())
                .ok_or_else(|| missing("pagerduty.routing_key"))?;
            NotifierSettings::PagerDuty(PagerDutySettings {
                routing_key: block.routing_key.clone(),
                severity: block.severity,
            })
        }
        NotifierVariant::Slack => {
            let block = config
                .slack
                .select(|b| !b.url.is_empty())
                .ok_or_else(|| missing("slack.url"))?;
            NotifierSettings::Slack(SlackSettings {
                fields: block.fields.clone(),
                url: block.url.clone(),
            })
        }
        NotifierVariant::SlackPostMessage => {
            let block = config
                .slackpostmessage
                .select(|b| !b.api_token.is_empty())
                .ok_or_else(|| missing("slackpostmessage.api_token"))?;
            NotifierSettings::SlackPostMessage(SlackPostMessageSettings {
                api_token: block.api_token.clone(),
                channels: block.channels.clone(),
                fields: block.fields.clone(),
                use_proxy: block.use_proxy.unwrap_or(true),
            })
        }
        NotifierVariant::VictorOps => {
            let block = config
                .victorops
                .select(|b| !b.notify_url.is_empty())
                .ok_or_else(|| missing("victorops.notify_url"))?;
            NotifierSettings::VictorOps(VictorOpsSettings {
                message_type: block.message_type.clone(),
                notify_url: block.notify_url.clone(),
            })
        }
        NotifierVariant::WebHook => {
            let block = config
                .webhook
                .select(|b| !b.url.is_empty())
                .ok_or_else(|| missing("webhook.url"))?;
            NotifierSettings::WebHook(WebHookSettings {
                body_template: non_empty(block.body_template.as_deref())
                    .unwrap_or_else(|| DEFAULT_WEBHOOK_BODY_TEMPLATE.to_string()),
                headers: block.headers.clone(),
                method: block.method.unwrap_or_default(),
                url: block.url.clone(),
            })
        }
    };

    Ok(Notifier {
        id: config.notifier_id.clone(),
        name: config.name.clone(),
        settings,
    })
}

/// Populate a flat configuration record from the authoritative notifier
///
/// Fills `entity` and exactly the one block matching the variant; the other
/// seven blocks stay empty. Settings absent from the notifier leave the
/// corresponding block field at its zero value.
#[must_use]
pub fn config_from_notifier(notifier: &Notifier, repository: impl Into<String>) -> NotifierConfig {
    let mut config = NotifierConfig {
        repository: repository.into(),
        name: notifier.name.clone(),
        entity: notifier.variant().as_str().to_string(),
        notifier_id: notifier.id.clone(),
        ..NotifierConfig::default()
    };

    match &notifier.settings {
        NotifierSettings::Email(settings) => {
            config.email = BlockState::committed(EmailBlock {
                body_template: settings.body_template.clone(),
                recipients: settings.recipients.clone(),
                subject_template: settings.subject_template.clone(),
            });
        }
        NotifierSettings::HumioRepo(settings) => {
            config.humiorepo = BlockState::committed(HumioRepoBlock {
                ingest_token: settings.ingest_token.clone(),
            });
        }
        NotifierSettings::OpsGenie(settings) => {
            config.opsgenie = BlockState::committed(OpsGenieBlock {
                api_url: Some(settings.api_url.clone()),
                genie_key: settings.genie_key.clone(),
            });
        }
        NotifierSettings::PagerDuty(settings) => {
            config.pagerduty = BlockState::committed(PagerDutyBlock {
                routing_key: settings.routing_key.clone(),
                severity: settings.severity,
            });
        }
        NotifierSettings::Slack(settings) => {
            config.slack = BlockState::committed(SlackBlock {
                fields: settings.fields.clone(),
                url: settings.url.clone(),
            });
        }
        NotifierSettings::SlackPostMessage(settings) => {
            config.slackpostmessage = BlockState::committed(SlackPostMessageBlock {
                api_token: settings.api_token.clone(),
                channels: settings.channels.clone(),
                fields: settings.fields.clone(),
                use_proxy: Some(settings.use_proxy),
            });
        }
        NotifierSettings::VictorOps(settings) => {
            config.victorops = BlockState::committed(VictorOpsBlock {
                message_type: settings.message_type.clone(),
                notify_url: settings.notify_url.clone(),
            });
        }
        NotifierSettings::WebHook(settings) => {
            config.webhook = BlockState::committed(WebHookBlock {
                body_template: Some(settings.body_template.clone()),
                headers: settings.headers.clone(),
                method: Some(settings.method),
                url: settings.url.clone(),
            });
        }
    }

    config
}

/// CRUD handler for notifier resources
pub struct NotifierResource<'a> {
    client: &'a LoghiveClient,
}

impl<'a> NotifierResource<'a> {
    pub(crate) fn new(client: &'a LoghiveClient) -> Self {
        Self { client }
    }

    /// Create the notifier and return the reconciled configuration
    pub async fn create(&self, config: &NotifierConfig) -> Result<NotifierConfig> {
        config.validate()?;
        let notifier = notifier_from_config(config)?;
        let created = self
            .client
            .notifiers()
            .add(&config.repository, &notifier, false)
            .await?;
        info!(repository = %config.repository, name = %created.name, "created notifier");
        self.read(&config.repository, &created.name).await
    }

    /// Fetch the notifier and render it as configuration
    pub async fn read(&self, repository: &str, name: &str) -> Result<NotifierConfig> {
        let notifier = self.client.notifiers().get(repository, name).await?;
        Ok(config_from_notifier(&notifier, repository))
    }

    /// Resolve a composite id and read the notifier it names (import)
    pub async fn read_by_id(&self, id: &str) -> Result<NotifierConfig> {
        let (repository, name) = parse_composite_id(id, "REPOSITORYNAME+NOTIFIERNAME")?;
        self.read(repository, name).await
    }

    /// Replace the notifier and return the reconciled configuration
    pub async fn update(&self, config: &NotifierConfig) -> Result<NotifierConfig> {
        config.validate()?;
        let notifier = notifier_from_config(config)?;
        let updated = self
            .client
            .notifiers()
            .add(&config.repository, &notifier, true)
            .await?;
        info!(repository = %config.repository, name = %updated.name, "updated notifier");
        self.read(&config.repository, &updated.name).await
    }

    /// Delete the notifier
    pub async fn delete(&self, config: &NotifierConfig) -> Result<()> {
        self.client
            .notifiers()
            .delete(&config.repository, &config.name)
            .await?;
        info!(repository = %config.repository, name = %config.name, "deleted notifier");
        Ok(())
    }
}
