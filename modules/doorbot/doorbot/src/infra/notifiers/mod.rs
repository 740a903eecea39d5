//! Channel notifier adapters and the factory binding them to an account.

use std::sync::Arc;

use doorbot_sdk::{Account, ChannelKind};

use crate::config::ProvidersConfig;
use crate::domain::ports::{ChannelNotifier, NotifierFactory};
use crate::infra::resolve_secret;

mod hipchat;
mod mailgun;
mod nexmo;
mod postmark;
mod slack;
mod twilio;

pub use hipchat::HipChatNotifier;
pub use mailgun::MailgunNotifier;
pub use nexmo::NexmoNotifier;
pub use postmark::PostmarkNotifier;
pub use slack::SlackNotifier;
pub use twilio::TwilioNotifier;

/// Builds HTTP notifiers from the account's tokens, falling back to the
/// platform credentials in [`ProvidersConfig`].
///
/// Account enablement is not checked here; channel selection does that.
pub struct HttpNotifierFactory {
    client: reqwest::Client,
    providers: ProvidersConfig,
}

impl HttpNotifierFactory {
    #[must_use]
    pub fn new(client: reqwest::Client, providers: ProvidersConfig) -> Self {
        Self { client, providers }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToOwned::to_owned)
}

impl NotifierFactory for HttpNotifierFactory {
    fn notifier(&self, kind: ChannelKind, account: &Account) -> Option<Arc<dyn ChannelNotifier>> {
        let p = &self.providers;
        let token = account.notifications.switch(kind).token.as_deref();
        let client = self.client.clone();
        let account = account.clone();

        let notifier: Arc<dyn ChannelNotifier> = match kind {
            ChannelKind::HipChat => {
                let token = resolve_secret(token, p.hipchat.token.as_ref())?;
                Arc::new(HipChatNotifier::new(client, p.hipchat.base_url.clone(), token, account))
            }
            ChannelKind::Slack => {
                let token = resolve_secret(token, p.slack.token.as_ref())?;
                Arc::new(SlackNotifier::new(client, p.slack.base_url.clone(), token, account))
            }
            ChannelKind::Nexmo => {
                let api_secret = resolve_secret(token, p.nexmo.api_secret.as_ref())?;
                let api_key = non_empty(p.nexmo.api_key.as_deref())?;
                Arc::new(NexmoNotifier::new(
                    client,
                    p.nexmo.base_url.clone(),
                    api_key,
                    api_secret,
                    p.nexmo.from.clone(),
                    account,
                ))
            }
            ChannelKind::Twilio => {
                let auth_token = resolve_secret(token, p.twilio.auth_token.as_ref())?;
                let account_sid = non_empty(p.twilio.account_sid.as_deref())?;
                let from = non_empty(account.notifications.twilio_source_phone_number.as_deref())
                    .or_else(|| non_empty(p.twilio.phone_number.as_deref()))?;
                Arc::new(TwilioNotifier::new(
                    client,
                    p.twilio.base_url.clone(),
                    account_sid,
                    auth_token,
                    from,
                    account,
                ))
            }
            ChannelKind::Mailgun => {
                let api_key = resolve_secret(token, p.mailgun.api_key.as_ref())?;
                let domain = non_empty(p.mailgun.domain.as_deref())?;
                Arc::new(MailgunNotifier::new(
                    client,
                    p.mailgun.base_url.clone(),
                    domain,
                    api_key,
                    p.email_from.clone(),
                    account,
                ))
            }
            ChannelKind::Postmark => {
                let server_token = resolve_secret(token, p.postmark.server_token.as_ref())?;
                Arc::new(PostmarkNotifier::new(
                    client,
                    p.postmark.base_url.clone(),
                    server_token,
                    p.email_from.clone(),
                    account,
                ))
            }
        };

        Some(notifier)
    }
}
