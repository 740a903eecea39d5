//! Nexmo SMS.

use async_trait::async_trait;
use doorbot_sdk::{Account, ChannelKind, Door, Person};
use serde::Deserialize;

use crate::domain::error::ProviderError;
use crate::domain::ports::ChannelNotifier;
use crate::domain::rendering::KnockMessage;
use crate::infra::http::{endpoint, send_json};

#[derive(Deserialize)]
struct SmsResponse {
    #[serde(default)]
    messages: Vec<SmsStatus>,
}

#[derive(Deserialize)]
struct SmsStatus {
    status: String,
    #[serde(rename = "error-text")]
    error_text: Option<String>,
}

pub struct NexmoNotifier {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    api_secret: String,
    from: String,
    account: Account,
}

impl NexmoNotifier {
    #[must_use]
    pub fn new(
        client: reqwest::Client,
        base_url: String,
        api_key: String,
        api_secret: String,
        from: String,
        account: Account,
    ) -> Self {
        Self {
            client,
            base_url,
            api_key,
            api_secret,
            from,
            account,
        }
    }
}

#[async_trait]
impl ChannelNotifier for NexmoNotifier {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Nexmo
    }

    #[tracing::instrument(skip_all, fields(channel = "nexmo", person_id = %person.id, door_id = %door.id))]
    async fn knock_knock(&self, door: &Door, person: &Person) -> Result<(), ProviderError> {
        let message = KnockMessage::compose(&self.account, door, person);

        let response: SmsResponse = send_json(
            self.client
                .post(endpoint(&self.base_url, "/sms/json"))
                .form(&[
                    ("api_key", self.api_key.as_str()),
                    ("api_secret", self.api_secret.as_str()),
                    ("from", self.from.as_str()),
                    ("to", person.phone_number.as_str()),
                    ("text", message.sms.as_str()),
                ]),
        )
        .await?;

        if response.messages.is_empty() {
            return Err(ProviderError::decode("no message status"));
        }
        // every message part must be accepted
        if let Some(failed) = response.messages.iter().find(|m| m.status != "0") {
            return Err(ProviderError::rejected(format!(
                "status {}: {}",
                failed.status,
                failed.error_text.as_deref().unwrap_or("")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::infra::notifiers::test_support::{account, client, door, person};
    use httpmock::prelude::*;

    fn notifier(server: &MockServer) -> NexmoNotifier {
        NexmoNotifier::new(
            client(),
            server.base_url(),
            "key".to_owned(),
            "secret".to_owned(),
            "Doorbot".to_owned(),
            account(),
        )
    }

    #[tokio::test]
    async fn sends_rendered_sms() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/sms/json")
                .form_urlencoded_tuple("api_key", "key")
                .form_urlencoded_tuple("to", "+15551234567")
                .form_urlencoded_tuple(
                    "text",
                    "Hi Ada, there is someone waiting for your at the Front Door.",
                );
            then.status(200).json_body(serde_json::json!({
                "message-count": "1",
                "messages": [ { "status": "0", "message-id": "abc" } ]
            }));
        });

        notifier(&server).knock_knock(&door(), &person()).await.unwrap();
        mock.assert();
    }

    #[tokio::test]
    async fn non_zero_status_is_rejected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/sms/json");
            then.status(200).json_body(serde_json::json!({
                "messages": [ { "status": "4", "error-text": "Bad Credentials" } ]
            }));
        });

        let err = notifier(&server)
            .knock_knock(&door(), &person())
            .await
            .unwrap_err();
        assert_eq!(err, ProviderError::rejected("status 4: Bad Credentials"));
    }
}
