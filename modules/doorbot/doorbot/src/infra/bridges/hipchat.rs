//! HipChat user directory: list users, then view each one for email and title.

use doorbot_sdk::{BridgeKind, BridgeUser};
use serde::Deserialize;

use crate::domain::error::ProviderError;
use crate::infra::http::{endpoint, send_json};

const MAX_RESULTS: u32 = 1000;

#[derive(Debug, Deserialize)]
struct UserList {
    #[serde(default)]
    items: Vec<UserSummary>,
}

#[derive(Debug, Deserialize)]
struct UserSummary {
    id: u64,
}

#[derive(Debug, Deserialize)]
struct UserDetails {
    id: u64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    title: String,
}

pub struct HipChatDirectory {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl HipChatDirectory {
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// # Errors
    /// Any failed list or view call fails the whole fetch.
    #[tracing::instrument(skip(self), fields(bridge = "hipchat"))]
    pub async fn get_users(&self) -> Result<Vec<BridgeUser>, ProviderError> {
        let list: UserList = send_json(
            self.client
                .get(endpoint(&self.base_url, "/v2/user"))
                .bearer_auth(&self.token)
                .query(&[("start-index", 0), ("max-results", MAX_RESULTS)]),
        )
        .await?;

        let mut users = Vec::with_capacity(list.items.len());
        for summary in list.items {
            let details: UserDetails = send_json(
                self.client
                    .get(endpoint(&self.base_url, &format!("/v2/user/{}", summary.id)))
                    .bearer_auth(&self.token),
            )
            .await?;

            users.push(BridgeUser {
                bridge: BridgeKind::HipChat,
                external_id: details.id.to_string(),
                name: details.name,
                email: details.email,
                phone_number: String::new(),
                title: details.title,
            });
        }

        tracing::info!(count = users.len(), "hipchat users fetched");
        Ok(users)
    }
}
