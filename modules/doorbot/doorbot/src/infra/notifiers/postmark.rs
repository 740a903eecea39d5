//! Postmark email.

use async_trait::async_trait;
use doorbot_sdk::{Account, ChannelKind, Door, Person};
use serde::{Deserialize, Serialize};

use crate::domain::error::ProviderError;
use crate::domain::ports::ChannelNotifier;
use crate::domain::rendering::{ACCOUNT_CREATED_SUBJECT, KnockMessage, account_created_text};
use crate::infra::http::{endpoint, send_json};

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Email<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text_body: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct EmailResponse {
    error_code: i64,
    #[serde(default)]
    message: String,
}

pub struct PostmarkNotifier {
    client: reqwest::Client,
    base_url: String,
    server_token: String,
    from: String,
    account: Account,
}

impl PostmarkNotifier {
    #[must_use]
    pub fn new(
        client: reqwest::Client,
        base_url: String,
        server_token: String,
        from: String,
        account: Account,
    ) -> Self {
        Self {
            client,
            base_url,
            server_token,
            from,
            account,
        }
    }

    async fn send_mail(&self, to: &str, subject: &str, text: &str) -> Result<(), ProviderError> {
        let response: EmailResponse = send_json(
            self.client
                .post(endpoint(&self.base_url, "/email"))
                .header("X-Postmark-Server-Token", &self.server_token)
                .header(reqwest::header::ACCEPT, "application/json")
                .json(&Email {
                    from: &self.from,
                    to,
                    subject,
                    text_body: text,
                }),
        )
        .await?;

        if response.error_code != 0 {
            return Err(ProviderError::rejected(format!(
                "error code {}: {}",
                response.error_code, response.message
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ChannelNotifier for PostmarkNotifier {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Postmark
    }

    #[tracing::instrument(skip_all, fields(channel = "postmark", person_id = %person.id, door_id = %door.id))]
    async fn knock_knock(&self, door: &Door, person: &Person) -> Result<(), ProviderError> {
        let message = KnockMessage::compose(&self.account, door, person);
        self.send_mail(&person.email, &message.subject, &message.text)
            .await
    }

    #[tracing::instrument(skip_all, fields(channel = "postmark", person_id = %person.id))]
    async fn account_created(&self, person: &Person, password: &str) -> Result<(), ProviderError> {
        let text = account_created_text(&self.account, person, password);
        self.send_mail(&person.email, ACCOUNT_CREATED_SUBJECT, &text)
            .await
    }
}
