//! Mailgun email.

use async_trait::async_trait;
use doorbot_sdk::{Account, ChannelKind, Door, Person};

use crate::domain::error::ProviderError;
use crate::domain::ports::ChannelNotifier;
use crate::domain::rendering::{ACCOUNT_CREATED_SUBJECT, KnockMessage, account_created_text};
use crate::infra::http::{endpoint, send};

pub struct MailgunNotifier {
    client: reqwest::Client,
    base_url: String,
    domain: String,
    api_key: String,
    from: String,
    account: Account,
}

impl MailgunNotifier {
    #[must_use]
    pub fn new(
        client: reqwest::Client,
        base_url: String,
        domain: String,
        api_key: String,
        from: String,
        account: Account,
    ) -> Self {
        Self {
            client,
            base_url,
            domain,
            api_key,
            from,
            account,
        }
    }

    async fn send_mail(&self, to: &str, subject: &str, text: &str) -> Result<(), ProviderError> {
        let path = format!("/v3/{}/messages", self.domain);
        send(
            self.client
                .post(endpoint(&self.base_url, &path))
                .basic_auth("api", Some(&self.api_key))
                .form(&[
                    ("from", self.from.as_str()),
                    ("to", to),
                    ("subject", subject),
                    ("text", text),
                ]),
        )
        .await?;
        Ok(())
    }
}

#[async_trait]
impl ChannelNotifier for MailgunNotifier {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Mailgun
    }

    #[tracing::instrument(skip_all, fields(channel = "mailgun", person_id = %person.id, door_id = %door.id))]
    async fn knock_knock(&self, door: &Door, person: &Person) -> Result<(), ProviderError> {
        let message = KnockMessage::compose(&self.account, door, person);
        self.send_mail(&person.email, &message.subject, &message.text)
            .await
    }

    #[tracing::instrument(skip_all, fields(channel = "mailgun", person_id = %person.id))]
    async fn account_created(&self, person: &Person, password: &str) -> Result<(), ProviderError> {
        let text = account_created_text(&self.account, person, password);
        self.send_mail(&person.email, ACCOUNT_CREATED_SUBJECT, &text)
            .await
    }
}
