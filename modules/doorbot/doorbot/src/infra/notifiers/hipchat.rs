//! HipChat private messages.

use async_trait::async_trait;
use doorbot_sdk::{Account, ChannelKind, Door, Person};
use serde::Serialize;

use crate::domain::error::ProviderError;
use crate::domain::ports::ChannelNotifier;
use crate::domain::rendering::KnockMessage;
use crate::infra::http::{endpoint, send};

#[derive(Serialize)]
struct MessageRequest<'a> {
    message: &'a str,
    message_format: &'static str,
    notify: bool,
}

pub struct HipChatNotifier {
    client: reqwest::Client,
    base_url: String,
    token: String,
    account: Account,
}

impl HipChatNotifier {
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: String, token: String, account: Account) -> Self {
        Self {
            client,
            base_url,
            token,
            account,
        }
    }
}

#[async_trait]
impl ChannelNotifier for HipChatNotifier {
    fn kind(&self) -> ChannelKind {
        ChannelKind::HipChat
    }

    #[tracing::instrument(skip_all, fields(channel = "hipchat", person_id = %person.id, door_id = %door.id))]
    async fn knock_knock(&self, door: &Door, person: &Person) -> Result<(), ProviderError> {
        let message = KnockMessage::compose(&self.account, door, person);
        let path = format!("/v2/user/{}/message", person.email);

        send(
            self.client
                .post(endpoint(&self.base_url, &path))
                .bearer_auth(&self.token)
                .json(&MessageRequest {
                    message: &message.text,
                    message_format: "text",
                    notify: true,
                }),
        )
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::infra::notifiers::test_support::{account, client, door, person};
    use httpmock::prelude::*;

    #[tokio::test]
    async fn posts_private_message_to_person_email() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v2/user/ada@example.test/message")
                .header("authorization", "Bearer hc")
                .json_body(serde_json::json!({
                    "message": "Hi Ada,\nThere is someone waiting at the Front Door.\n\n - Doorbot",
                    "message_format": "text",
                    "notify": true
                }));
            then.status(204);
        });

        let notifier = HipChatNotifier::new(client(), server.base_url(), "hc".to_owned(), account());
        notifier.knock_knock(&door(), &person()).await.unwrap();
        mock.assert();
    }

    #[tokio::test]
    async fn unknown_user_fails_the_attempt() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST);
            then.status(404).body("user not found");
        });

        let notifier = HipChatNotifier::new(client(), server.base_url(), "hc".to_owned(), account());
        let err = notifier.knock_knock(&door(), &person()).await.unwrap_err();
        assert!(matches!(err, ProviderError::Http { status: 404, .. }));
    }
}
