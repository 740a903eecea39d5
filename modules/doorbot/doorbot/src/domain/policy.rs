//! Channel eligibility for knock notifications.
//!
//! Families are evaluated chat, then SMS, then email. Within a family the
//! provider order is fixed. A provider is eligible only when the person opted
//! into its family and the account enabled the provider.

use doorbot_sdk::{ChannelKind, NotificationSettings, Person};

/// Phone numbers of this many bytes or fewer are never texted.
pub const MIN_PHONE_LEN: usize = 6;

const CHAT: [ChannelKind; 2] = [ChannelKind::HipChat, ChannelKind::Slack];
const SMS: [ChannelKind; 2] = [ChannelKind::Nexmo, ChannelKind::Twilio];
const EMAIL: [ChannelKind; 2] = [ChannelKind::Mailgun, ChannelKind::Postmark];

#[must_use]
pub fn has_dialable_phone(person: &Person) -> bool {
    person.phone_number.len() > MIN_PHONE_LEN
}

/// Ordered list of channels to try for `person`.
#[must_use]
pub fn eligible_channels(settings: &NotificationSettings, person: &Person) -> Vec<ChannelKind> {
    let prefs = &person.notifications;
    let mut channels = Vec::new();

    if prefs.chat {
        channels.extend(CHAT.into_iter().filter(|&kind| settings.switch(kind).enabled));
    }

    if prefs.sms {
        // the phone floor is checked for each provider
        channels.extend(
            SMS.into_iter()
                .filter(|&kind| settings.switch(kind).enabled && has_dialable_phone(person)),
        );
    }

    if prefs.email {
        channels.extend(EMAIL.into_iter().filter(|&kind| settings.switch(kind).enabled));
    }

    channels
}
