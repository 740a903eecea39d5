//! Doorbot module configuration.

use std::time::Duration;

use doorbot_sdk::BridgeKind;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Doorbot module configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DoorbotConfig {
    // === Delivery ===
    /// Upper bound for a single channel delivery attempt in milliseconds.
    /// An attempt that runs out of time counts as failed.
    pub delivery_attempt_timeout_ms: u64,

    // === Directory sync ===
    /// Upper bound for fetching one bridge's users in milliseconds.
    pub fetch_timeout_ms: u64,
    /// Bridges reconciled by a sync run, in order.
    pub sync_bridges: Vec<BridgeKind>,
    /// How a remote user is matched against existing bridge links.
    pub match_key: MatchKey,

    /// Platform-level provider credentials and endpoints.
    pub providers: ProvidersConfig,
}

impl Default for DoorbotConfig {
    fn default() -> Self {
        Self {
            delivery_attempt_timeout_ms: 10_000,
            fetch_timeout_ms: 30_000,
            sync_bridges: vec![BridgeKind::Hub, BridgeKind::HipChat],
            match_key: MatchKey::BridgeAndExternalId,
            providers: ProvidersConfig::default(),
        }
    }
}

impl DoorbotConfig {
    #[must_use]
    pub fn delivery_attempt_timeout(&self) -> Duration {
        Duration::from_millis(self.delivery_attempt_timeout_ms)
    }

    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKey {
    /// Match on the external user id alone, regardless of the bridge it came from.
    ExternalId,
    /// Match on `(bridge, external user id)`.
    #[default]
    BridgeAndExternalId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProvidersConfig {
    /// Sender address for outgoing email.
    pub email_from: String,
    pub hipchat: HipChatConfig,
    pub slack: SlackConfig,
    pub nexmo: NexmoConfig,
    pub twilio: TwilioConfig,
    pub mailgun: MailgunConfig,
    pub postmark: PostmarkConfig,
    pub google_directory: GoogleDirectoryConfig,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            email_from: "doorbot@doorbot.co".to_owned(),
            hipchat: HipChatConfig::default(),
            slack: SlackConfig::default(),
            nexmo: NexmoConfig::default(),
            twilio: TwilioConfig::default(),
            mailgun: MailgunConfig::default(),
            postmark: PostmarkConfig::default(),
            google_directory: GoogleDirectoryConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HipChatConfig {
    pub base_url: String,
    /// Used when the account has no token of its own.
    #[serde(skip_serializing)]
    pub token: Option<SecretString>,
}

impl Default for HipChatConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.hipchat.com".to_owned(),
            token: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlackConfig {
    pub base_url: String,
    /// Used when the account has no token of its own.
    #[serde(skip_serializing)]
    pub token: Option<SecretString>,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            base_url: "https://slack.com".to_owned(),
            token: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NexmoConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Overridden by the account's nexmo token.
    #[serde(skip_serializing)]
    pub api_secret: Option<SecretString>,
    /// Alphanumeric sender id.
    pub from: String,
}

impl Default for NexmoConfig {
    fn default() -> Self {
        Self {
            base_url: "https://rest.nexmo.com".to_owned(),
            api_key: None,
            api_secret: None,
            from: "Doorbot".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TwilioConfig {
    pub base_url: String,
    pub account_sid: Option<String>,
    /// Overridden by the account's twilio token.
    #[serde(skip_serializing)]
    pub auth_token: Option<SecretString>,
    /// Used when the account has no source phone number.
    pub phone_number: Option<String>,
}

impl Default for TwilioConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.twilio.com".to_owned(),
            account_sid: None,
            auth_token: None,
            phone_number: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MailgunConfig {
    pub base_url: String,
    pub domain: Option<String>,
    /// Overridden by the account's mailgun token.
    #[serde(skip_serializing)]
    pub api_key: Option<SecretString>,
}

impl Default for MailgunConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.mailgun.net".to_owned(),
            domain: None,
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PostmarkConfig {
    pub base_url: String,
    /// Overridden by the account's postmark token.
    #[serde(skip_serializing)]
    pub server_token: Option<SecretString>,
}

impl Default for PostmarkConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.postmarkapp.com".to_owned(),
            server_token: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GoogleDirectoryConfig {
    pub base_url: String,
    /// Admin SDK customer id whose users are listed.
    pub customer: String,
}

impl Default for GoogleDirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://admin.googleapis.com".to_owned(),
            customer: "my_customer".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn defaults_sync_hub_and_hipchat() {
        let cfg = DoorbotConfig::default();
        assert_eq!(cfg.sync_bridges, vec![BridgeKind::Hub, BridgeKind::HipChat]);
        assert_eq!(cfg.match_key, MatchKey::BridgeAndExternalId);
        assert_eq!(cfg.delivery_attempt_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg: DoorbotConfig = serde_json::from_value(serde_json::json!({
            "fetch_timeout_ms": 500,
            "sync_bridges": ["slack", "google_directory"],
            "providers": { "postmark": { "server_token": "pm-token" } }
        }))
        .unwrap();

        assert_eq!(cfg.fetch_timeout(), Duration::from_millis(500));
        assert_eq!(
            cfg.sync_bridges,
            vec![BridgeKind::Slack, BridgeKind::GoogleDirectory]
        );
        assert_eq!(cfg.delivery_attempt_timeout_ms, 10_000);
        assert_eq!(
            cfg.providers
                .postmark
                .server_token
                .as_ref()
                .unwrap()
                .expose_secret(),
            "pm-token"
        );
        assert_eq!(cfg.providers.postmark.base_url, "https://api.postmarkapp.com");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let res: Result<DoorbotConfig, _> =
            serde_json::from_value(serde_json::json!({ "retries": 3 }));
        assert!(res.is_err());
    }

    #[test]
    fn secrets_are_not_serialized() {
        let mut cfg = DoorbotConfig::default();
        cfg.providers.slack.token = Some(SecretString::from("xoxb-secret".to_owned()));
        let rendered = serde_json::to_string(&cfg).unwrap();
        assert!(!rendered.contains("xoxb-secret"));
    }
}
