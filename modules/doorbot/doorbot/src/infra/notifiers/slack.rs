//! Slack direct messages: resolve the member by email, then post to them.

use async_trait::async_trait;
use doorbot_sdk::{Account, ChannelKind, Door, Person};
use serde::{Deserialize, Serialize};

use crate::domain::error::ProviderError;
use crate::domain::ports::ChannelNotifier;
use crate::domain::rendering::KnockMessage;
use crate::infra::http::{endpoint, send_json};

#[derive(Deserialize)]
struct LookupResponse {
    ok: bool,
    error: Option<String>,
    user: Option<SlackUser>,
}

#[derive(Deserialize)]
struct SlackUser {
    id: String,
}

#[derive(Serialize)]
struct PostMessage<'a> {
    channel: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct PostResponse {
    ok: bool,
    error: Option<String>,
}

fn slack_error(error: Option<String>) -> ProviderError {
    ProviderError::rejected(error.unwrap_or_else(|| "unknown_error".to_owned()))
}

pub struct SlackNotifier {
    client: reqwest::Client,
    base_url: String,
    token: String,
    account: Account,
}

impl SlackNotifier {
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: String, token: String, account: Account) -> Self {
        Self {
            client,
            base_url,
            token,
            account,
        }
    }

    async fn lookup_user_id(&self, email: &str) -> Result<String, ProviderError> {
        let lookup: LookupResponse = send_json(
            self.client
                .get(endpoint(&self.base_url, "/api/users.lookupByEmail"))
                .bearer_auth(&self.token)
                .query(&[("email", email)]),
        )
        .await?;

        if !lookup.ok {
            return Err(slack_error(lookup.error));
        }
        lookup
            .user
            .map(|u| u.id)
            .ok_or_else(|| ProviderError::decode("users.lookupByEmail returned no user"))
    }
}

#[async_trait]
impl ChannelNotifier for SlackNotifier {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Slack
    }

    #[tracing::instrument(skip_all, fields(channel = "slack", person_id = %person.id, door_id = %door.id))]
    async fn knock_knock(&self, door: &Door, person: &Person) -> Result<(), ProviderError> {
        let user_id = self.lookup_user_id(&person.email).await?;
        let message = KnockMessage::compose(&self.account, door, person);

        let posted: PostResponse = send_json(
            self.client
                .post(endpoint(&self.base_url, "/api/chat.postMessage"))
                .bearer_auth(&self.token)
                .json(&PostMessage {
                    channel: &user_id,
                    text: &message.text,
                }),
        )
        .await?;

        if !posted.ok {
            return Err(slack_error(posted.error));
        }
        Ok(())
    }
}
