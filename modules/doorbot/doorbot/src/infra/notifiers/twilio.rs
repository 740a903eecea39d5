//! Twilio SMS.

use async_trait::async_trait;
use doorbot_sdk::{Account, ChannelKind, Door, Person};

use crate::domain::error::ProviderError;
use crate::domain::ports::ChannelNotifier;
use crate::domain::rendering::KnockMessage;
use crate::infra::http::{endpoint, send};

pub struct TwilioNotifier {
    client: reqwest::Client,
    base_url: String,
    account_sid: String,
    auth_token: String,
    from: String,
    account: Account,
}

impl TwilioNotifier {
    #[must_use]
    pub fn new(
        client: reqwest::Client,
        base_url: String,
        account_sid: String,
        auth_token: String,
        from: String,
        account: Account,
    ) -> Self {
        Self {
            client,
            base_url,
            account_sid,
            auth_token,
            from,
            account,
        }
    }
}

#[async_trait]
impl ChannelNotifier for TwilioNotifier {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Twilio
    }

    #[tracing::instrument(skip_all, fields(channel = "twilio", person_id = %person.id, door_id = %door.id))]
    async fn knock_knock(&self, door: &Door, person: &Person) -> Result<(), ProviderError> {
        let message = KnockMessage::compose(&self.account, door, person);
        let path = format!("/2010-04-01/Accounts/{}/Messages.json", self.account_sid);

        send(
            self.client
                .post(endpoint(&self.base_url, &path))
                .basic_auth(&self.account_sid, Some(&self.auth_token))
                .form(&[
                    ("From", self.from.as_str()),
                    ("To", person.phone_number.as_str()),
                    ("Body", message.sms.as_str()),
                ]),
        )
        .await
        .inspect_err(|e| {
            tracing::error!(from = %self.from, to = %person.phone_number, error = %e, "twilio refused the message");
        })?;

        Ok(())
    }
}
