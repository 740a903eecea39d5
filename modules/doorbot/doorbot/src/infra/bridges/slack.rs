//! Slack workspace members.

use doorbot_sdk::{BridgeKind, BridgeUser};
use serde::Deserialize;

use crate::domain::error::ProviderError;
use crate::infra::http::{endpoint, send_json};

#[derive(Debug, Deserialize)]
struct UsersList {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    members: Vec<Member>,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Deserialize)]
struct Member {
    id: String,
    #[serde(default)]
    deleted: bool,
    #[serde(default)]
    is_bot: bool,
    #[serde(default)]
    is_restricted: bool,
    #[serde(default)]
    is_ultra_restricted: bool,
    #[serde(default)]
    real_name: Option<String>,
    #[serde(default)]
    profile: Profile,
}

#[derive(Debug, Default, Deserialize)]
struct Profile {
    #[serde(default)]
    email: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    real_name: String,
}

impl Member {
    /// Deleted, bot and guest accounts are not people of the account.
    fn is_person(&self) -> bool {
        !(self.deleted || self.is_bot || self.is_restricted || self.is_ultra_restricted)
    }
}

pub struct SlackDirectory {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl SlackDirectory {
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// # Errors
    /// Transport failures, or `Rejected` when Slack answers `ok: false`.
    #[tracing::instrument(skip(self), fields(bridge = "slack"))]
    pub async fn get_users(&self) -> Result<Vec<BridgeUser>, ProviderError> {
        let list: UsersList = send_json(
            self.client
                .get(endpoint(&self.base_url, "/api/users.list"))
                .bearer_auth(&self.token),
        )
        .await?;

        if !list.ok {
            return Err(ProviderError::rejected(
                list.error.unwrap_or_else(|| "unknown_error".to_owned()),
            ));
        }

        let users: Vec<BridgeUser> = list
            .members
            .into_iter()
            .filter(Member::is_person)
            .map(|m| BridgeUser {
                bridge: BridgeKind::Slack,
                name: m.real_name.unwrap_or(m.profile.real_name),
                external_id: m.id,
                email: m.profile.email,
                phone_number: String::new(),
                title: m.profile.title,
            })
            .collect();

        tracing::info!(count = users.len(), "slack users fetched");
        Ok(users)
    }
}
