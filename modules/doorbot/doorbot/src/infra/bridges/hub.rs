//! Hub people directory.

use doorbot_sdk::{BridgeKind, BridgeUser};
use serde::Deserialize;

use crate::domain::error::ProviderError;
use crate::infra::http::{endpoint, send_json};

#[derive(Debug, Deserialize)]
struct HubPerson {
    #[serde(rename = "ID", alias = "id")]
    id: u64,
    #[serde(rename = "DisplayName", alias = "display_name", default)]
    display_name: Option<String>,
    #[serde(rename = "Email", alias = "email", default)]
    email: String,
}

pub struct HubDirectory {
    client: reqwest::Client,
    url: String,
    token: String,
}

impl HubDirectory {
    #[must_use]
    pub fn new(client: reqwest::Client, url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            token: token.into(),
        }
    }

    /// # Errors
    /// Transport, status or decoding failures.
    #[tracing::instrument(skip(self), fields(bridge = "hub", url = %self.url))]
    pub async fn get_users(&self) -> Result<Vec<BridgeUser>, ProviderError> {
        let people: Vec<HubPerson> = send_json(
            self.client
                .get(endpoint(&self.url, "/api/v1/people"))
                .header(reqwest::header::AUTHORIZATION, format!("token {}", self.token))
                .header(reqwest::header::ACCEPT, "application/json"),
        )
        .await?;

        tracing::info!(count = people.len(), "hub users fetched");

        Ok(people
            .into_iter()
            .map(|p| BridgeUser {
                bridge: BridgeKind::Hub,
                external_id: p.id.to_string(),
                name: p.display_name.unwrap_or_default(),
                email: p.email,
                phone_number: String::new(),
                title: String::new(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use httpmock::prelude::*;
    use std::time::Duration;

    fn client() -> reqwest::Client {
        crate::infra::http::build_client(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn maps_people_and_defaults_missing_name() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/people")
                .header("authorization", "token hub-secret")
                .header("accept", "application/json");
            then.status(200).json_body(serde_json::json!([
                { "ID": 7, "DisplayName": "Ada Lovelace", "Email": "ada@example.test" },
                { "ID": 8, "DisplayName": null, "Email": "anon@example.test" }
            ]));
        });

        let hub = HubDirectory::new(client(), server.base_url(), "hub-secret");
        let users = hub.get_users().await.unwrap();

        mock.assert();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].bridge, BridgeKind::Hub);
        assert_eq!(users[0].external_id, "7");
        assert_eq!(users[0].name, "Ada Lovelace");
        assert_eq!(users[1].name, "");
        assert_eq!(users[1].email, "anon@example.test");
    }

    #[tokio::test]
    async fn error_status_is_reported() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/v1/people");
            then.status(401).body("bad token");
        });

        let hub = HubDirectory::new(client(), server.base_url(), "nope");
        let err = hub.get_users().await.unwrap_err();

        mock.assert();
        assert_eq!(
            err,
            ProviderError::Http {
                status: 401,
                body: "bad token".to_owned()
            }
        );
    }
}
