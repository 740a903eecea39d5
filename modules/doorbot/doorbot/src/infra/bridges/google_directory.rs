//! Google Workspace users via the Admin SDK Directory API.

use doorbot_sdk::{BridgeKind, BridgeUser};
use serde::Deserialize;

use crate::domain::error::ProviderError;
use crate::infra::http::{endpoint, send_json};

const PAGE_SIZE: &str = "500";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsersPage {
    #[serde(default)]
    users: Vec<GoogleUser>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleUser {
    id: String,
    #[serde(default)]
    primary_email: String,
    #[serde(default)]
    name: GoogleName,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleName {
    #[serde(default)]
    full_name: String,
}

pub struct GoogleDirectory {
    client: reqwest::Client,
    base_url: String,
    customer: String,
    token: String,
}

impl GoogleDirectory {
    #[must_use]
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        customer: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            customer: customer.into(),
            token: token.into(),
        }
    }

    /// # Errors
    /// Transport failures, or `Decode` when a user has no id.
    #[tracing::instrument(skip(self), fields(bridge = "google_directory", customer = %self.customer))]
    pub async fn get_users(&self) -> Result<Vec<BridgeUser>, ProviderError> {
        let url = endpoint(&self.base_url, "/admin/directory/v1/users");
        let mut users = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(&url)
                .bearer_auth(&self.token)
                .query(&[("customer", self.customer.as_str()), ("maxResults", PAGE_SIZE)]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let page: UsersPage = send_json(request).await?;
            for user in page.users {
                users.push(normalize(user)?);
            }

            match page.next_page_token {
                Some(next) if !next.is_empty() => page_token = Some(next),
                _ => break,
            }
        }

        tracing::info!(count = users.len(), "google directory users fetched");
        Ok(users)
    }
}

fn normalize(user: GoogleUser) -> Result<BridgeUser, ProviderError> {
    if user.id.trim().is_empty() {
        return Err(ProviderError::decode("google user without id"));
    }

    Ok(BridgeUser {
        bridge: BridgeKind::GoogleDirectory,
        external_id: user.id,
        name: user.name.full_name,
        email: user.primary_email,
        phone_number: String::new(),
        title: String::new(),
    })
}
