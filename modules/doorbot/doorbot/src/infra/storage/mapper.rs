//! Conversions between SeaORM models and SDK contract types.

use chrono::{DateTime, Utc};
use doorbot_sdk::{
    Account, BridgeKind, BridgeLink, BridgeSettings, ChannelSwitch, Door, HubBridge,
    NotificationPreferences, NotificationSettings, Person,
};
use sea_orm::Set;

use crate::domain::error::DomainError;
use crate::infra::storage::entity::{account, bridge_user, door, person};

fn switch(enabled: bool, token: Option<String>) -> ChannelSwitch {
    ChannelSwitch { enabled, token }
}

impl From<account::Model> for Account {
    fn from(m: account::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            host: m.host,
            contact_name: m.contact_name,
            contact_email: m.contact_email,
            notifications: NotificationSettings {
                enabled: m.notifications_enabled,
                hipchat: switch(m.notifications_hipchat_enabled, m.notifications_hipchat_token),
                slack: switch(m.notifications_slack_enabled, m.notifications_slack_token),
                nexmo: switch(m.notifications_nexmo_enabled, m.notifications_nexmo_token),
                twilio: switch(m.notifications_twilio_enabled, m.notifications_twilio_token),
                mailgun: switch(m.notifications_mailgun_enabled, m.notifications_mailgun_token),
                postmark: switch(
                    m.notifications_postmark_enabled,
                    m.notifications_postmark_token,
                ),
                sms_template: m.notifications_sms_message_template,
                email_template: m.notifications_email_message_template,
                twilio_source_phone_number: m.notifications_twilio_source_phone_number,
            },
            bridges: BridgeSettings {
                hub: HubBridge {
                    enabled: m.bridge_hub_enabled,
                    url: m.bridge_hub_url,
                    token: m.bridge_hub_token,
                },
                google_directory: switch(m.bridge_google_enabled, m.bridge_google_token),
                hipchat: switch(m.bridge_hipchat_enabled, m.bridge_hipchat_token),
                slack: switch(m.bridge_slack_enabled, m.bridge_slack_token),
            },
        }
    }
}

#[must_use]
pub fn account_active_model(a: Account, now: DateTime<Utc>) -> account::ActiveModel {
    let n = a.notifications;
    let b = a.bridges;
    account::ActiveModel {
        id: Set(a.id),
        name: Set(a.name),
        host: Set(a.host),
        contact_name: Set(a.contact_name),
        contact_email: Set(a.contact_email),
        notifications_enabled: Set(n.enabled),
        notifications_hipchat_enabled: Set(n.hipchat.enabled),
        notifications_hipchat_token: Set(n.hipchat.token),
        notifications_slack_enabled: Set(n.slack.enabled),
        notifications_slack_token: Set(n.slack.token),
        notifications_nexmo_enabled: Set(n.nexmo.enabled),
        notifications_nexmo_token: Set(n.nexmo.token),
        notifications_twilio_enabled: Set(n.twilio.enabled),
        notifications_twilio_token: Set(n.twilio.token),
        notifications_mailgun_enabled: Set(n.mailgun.enabled),
        notifications_mailgun_token: Set(n.mailgun.token),
        notifications_postmark_enabled: Set(n.postmark.enabled),
        notifications_postmark_token: Set(n.postmark.token),
        notifications_sms_message_template: Set(n.sms_template),
        notifications_email_message_template: Set(n.email_template),
        notifications_twilio_source_phone_number: Set(n.twilio_source_phone_number),
        bridge_hub_enabled: Set(b.hub.enabled),
        bridge_hub_url: Set(b.hub.url),
        bridge_hub_token: Set(b.hub.token),
        bridge_google_enabled: Set(b.google_directory.enabled),
        bridge_google_token: Set(b.google_directory.token),
        bridge_hipchat_enabled: Set(b.hipchat.enabled),
        bridge_hipchat_token: Set(b.hipchat.token),
        bridge_slack_enabled: Set(b.slack.enabled),
        bridge_slack_token: Set(b.slack.token),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

impl From<person::Model> for Person {
    fn from(m: person::Model) -> Self {
        Self {
            id: m.id,
            account_id: m.account_id,
            name: m.name,
            title: m.title,
            email: m.email,
            phone_number: m.phone_number,
            is_visible: m.is_visible,
            is_available: m.is_available,
            notifications: NotificationPreferences {
                enabled: m.notifications_enabled,
                app: m.notifications_app_enabled,
                chat: m.notifications_chat_enabled,
                sms: m.notifications_sms_enabled,
                email: m.notifications_email_enabled,
            },
        }
    }
}

/// Active model for a person; `created_at` is left untouched so the same
/// builder serves inserts and updates.
#[must_use]
pub fn person_active_model(p: Person, now: DateTime<Utc>) -> person::ActiveModel {
    person::ActiveModel {
        id: Set(p.id),
        account_id: Set(p.account_id),
        name: Set(p.name),
        title: Set(p.title),
        email: Set(p.email),
        phone_number: Set(p.phone_number),
        is_visible: Set(p.is_visible),
        is_available: Set(p.is_available),
        notifications_enabled: Set(p.notifications.enabled),
        notifications_app_enabled: Set(p.notifications.app),
        notifications_chat_enabled: Set(p.notifications.chat),
        notifications_sms_enabled: Set(p.notifications.sms),
        notifications_email_enabled: Set(p.notifications.email),
        updated_at: Set(now),
        ..person::ActiveModel::default()
    }
}

impl From<door::Model> for Door {
    fn from(m: door::Model) -> Self {
        Self {
            id: m.id,
            account_id: m.account_id,
            name: m.name,
        }
    }
}

impl TryFrom<bridge_user::Model> for BridgeLink {
    type Error = DomainError;

    fn try_from(m: bridge_user::Model) -> Result<Self, Self::Error> {
        let bridge = BridgeKind::from_id(m.bridge_id).ok_or_else(|| {
            DomainError::database(format!("unknown bridge id {} on link {}", m.bridge_id, m.id))
        })?;

        Ok(Self {
            id: m.id,
            account_id: m.account_id,
            person_id: m.person_id,
            bridge,
            external_id: m.user_id,
        })
    }
}
