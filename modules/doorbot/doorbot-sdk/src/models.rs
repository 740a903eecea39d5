use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tenant. Holds the communication configuration shared by every person
/// of the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    /// Subdomain label the account is served on (`{host}.example.com`).
    pub host: String,
    pub contact_name: String,
    pub contact_email: String,
    pub notifications: NotificationSettings,
    pub bridges: BridgeSettings,
}

/// Account level enablement of a single provider.
///
/// `token` is the tenant's own credential for the provider. When it is absent
/// the platform-level credential, if any, is used instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSwitch {
    pub enabled: bool,
    pub token: Option<String>,
}

impl ChannelSwitch {
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            token: None,
        }
    }

    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            enabled: true,
            token: Some(token.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub enabled: bool,
    pub hipchat: ChannelSwitch,
    pub slack: ChannelSwitch,
    pub nexmo: ChannelSwitch,
    pub twilio: ChannelSwitch,
    pub mailgun: ChannelSwitch,
    pub postmark: ChannelSwitch,
    /// SMS body template, `{{name}}` and `{{door}}` are substituted.
    pub sms_template: Option<String>,
    /// Email body template, `{{name}}` and `{{door}}` are substituted.
    pub email_template: Option<String>,
    pub twilio_source_phone_number: Option<String>,
}

impl NotificationSettings {
    /// Account switch for the given channel.
    #[must_use]
    pub fn switch(&self, kind: ChannelKind) -> &ChannelSwitch {
        match kind {
            ChannelKind::HipChat => &self.hipchat,
            ChannelKind::Slack => &self.slack,
            ChannelKind::Nexmo => &self.nexmo,
            ChannelKind::Twilio => &self.twilio,
            ChannelKind::Mailgun => &self.mailgun,
            ChannelKind::Postmark => &self.postmark,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubBridge {
    pub enabled: bool,
    pub url: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeSettings {
    pub hub: HubBridge,
    pub google_directory: ChannelSwitch,
    pub hipchat: ChannelSwitch,
    pub slack: ChannelSwitch,
}

/// Per-person notification opt-ins. `app` is stored but not used for routing.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub enabled: bool,
    pub app: bool,
    pub chat: bool,
    pub sms: bool,
    pub email: bool,
}

impl NotificationPreferences {
    #[must_use]
    pub fn all() -> Self {
        Self {
            enabled: true,
            app: true,
            chat: true,
            sms: true,
            email: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub account_id: Uuid,
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone_number: String,
    pub is_visible: bool,
    pub is_available: bool,
    pub notifications: NotificationPreferences,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    pub id: Uuid,
    pub account_id: Uuid,
    pub name: String,
}

/// External directory a roster can be synchronized from.
///
/// The numeric ids are the ones stored on persisted bridge links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeKind {
    Hub,
    GoogleDirectory,
    #[serde(rename = "hipchat")]
    HipChat,
    Slack,
}

impl BridgeKind {
    pub const ALL: [Self; 4] = [Self::Hub, Self::GoogleDirectory, Self::HipChat, Self::Slack];

    #[must_use]
    pub fn id(self) -> i32 {
        match self {
            Self::Hub => 1,
            Self::GoogleDirectory => 2,
            Self::HipChat => 3,
            Self::Slack => 4,
        }
    }

    #[must_use]
    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Hub => "hub",
            Self::GoogleDirectory => "google_directory",
            Self::HipChat => "hipchat",
            Self::Slack => "slack",
        }
    }
}

impl fmt::Display for BridgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A remote directory user, normalized across providers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeUser {
    pub bridge: BridgeKind,
    pub external_id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub title: String,
}

/// Persisted linkage between a remote directory user and a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeLink {
    pub id: Uuid,
    pub account_id: Uuid,
    pub person_id: Uuid,
    pub bridge: BridgeKind,
    pub external_id: String,
}

/// Notification delivery provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    #[serde(rename = "hipchat")]
    HipChat,
    Slack,
    Nexmo,
    Twilio,
    Mailgun,
    Postmark,
}

impl ChannelKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::HipChat => "hipchat",
            Self::Slack => "slack",
            Self::Nexmo => "nexmo",
            Self::Twilio => "twilio",
            Self::Mailgun => "mailgun",
            Self::Postmark => "postmark",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of dispatching a knock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum KnockOutcome {
    /// Nothing was eligible, no delivery was attempted.
    NoChannel,
    /// Delivery was handed to a background task that tries `channels` in order.
    Accepted { channels: Vec<ChannelKind> },
}

impl KnockOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    pub created: usize,
    pub updated: usize,
    /// Bridges whose fetch failed and contributed nothing to this run.
    pub skipped_bridges: Vec<BridgeKind>,
}
