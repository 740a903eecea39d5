//! Directory bridge adapters.
//!
//! Each bridge is resolved from the account's bridge settings into a
//! [`BridgeSource`] before any request is made, so a disabled bridge or one
//! without credentials never touches the network.

use async_trait::async_trait;
use doorbot_sdk::{Account, BridgeKind, BridgeUser};

use crate::config::ProvidersConfig;
use crate::domain::error::ProviderError;
use crate::domain::ports::Bridges;
use crate::infra::resolve_secret;

mod google_directory;
mod hipchat;
mod hub;
mod slack;

pub use google_directory::GoogleDirectory;
pub use hipchat::HipChatDirectory;
pub use hub::HubDirectory;
pub use slack::SlackDirectory;

/// A bridge ready to be queried.
pub enum BridgeSource {
    Hub(HubDirectory),
    GoogleDirectory(GoogleDirectory),
    HipChat(HipChatDirectory),
    Slack(SlackDirectory),
}

impl BridgeSource {
    /// # Errors
    /// `Disabled` when the account has the bridge switched off,
    /// `MissingCredentials` when no url or token can be resolved.
    pub fn resolve(
        client: &reqwest::Client,
        providers: &ProvidersConfig,
        account: &Account,
        bridge: BridgeKind,
    ) -> Result<Self, ProviderError> {
        let settings = &account.bridges;
        let name = bridge.name();

        match bridge {
            BridgeKind::Hub => {
                let hub = &settings.hub;
                if !hub.enabled {
                    return Err(ProviderError::Disabled { provider: name });
                }
                let url = non_empty(hub.url.as_deref())
                    .ok_or_else(|| ProviderError::missing_credentials(name))?;
                let token = non_empty(hub.token.as_deref())
                    .ok_or_else(|| ProviderError::missing_credentials(name))?;
                Ok(Self::Hub(HubDirectory::new(client.clone(), url, token)))
            }
            BridgeKind::GoogleDirectory => {
                let google = &settings.google_directory;
                if !google.enabled {
                    return Err(ProviderError::Disabled { provider: name });
                }
                let token = non_empty(google.token.as_deref())
                    .ok_or_else(|| ProviderError::missing_credentials(name))?;
                let cfg = &providers.google_directory;
                Ok(Self::GoogleDirectory(GoogleDirectory::new(
                    client.clone(),
                    cfg.base_url.clone(),
                    cfg.customer.clone(),
                    token,
                )))
            }
            BridgeKind::HipChat => {
                if !settings.hipchat.enabled {
                    return Err(ProviderError::Disabled { provider: name });
                }
                let token = resolve_secret(
                    settings.hipchat.token.as_deref(),
                    providers.hipchat.token.as_ref(),
                )
                .ok_or_else(|| ProviderError::missing_credentials(name))?;
                Ok(Self::HipChat(HipChatDirectory::new(
                    client.clone(),
                    providers.hipchat.base_url.clone(),
                    token,
                )))
            }
            BridgeKind::Slack => {
                if !settings.slack.enabled {
                    return Err(ProviderError::Disabled { provider: name });
                }
                let token = resolve_secret(
                    settings.slack.token.as_deref(),
                    providers.slack.token.as_ref(),
                )
                .ok_or_else(|| ProviderError::missing_credentials(name))?;
                Ok(Self::Slack(SlackDirectory::new(
                    client.clone(),
                    providers.slack.base_url.clone(),
                    token,
                )))
            }
        }
    }

    /// # Errors
    /// Whatever the underlying directory call reports.
    pub async fn get_users(&self) -> Result<Vec<BridgeUser>, ProviderError> {
        match self {
            Self::Hub(d) => d.get_users().await,
            Self::GoogleDirectory(d) => d.get_users().await,
            Self::HipChat(d) => d.get_users().await,
            Self::Slack(d) => d.get_users().await,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToOwned::to_owned)
}

/// [`Bridges`] over HTTP, sharing one client across all directories.
pub struct HttpBridges {
    client: reqwest::Client,
    providers: ProvidersConfig,
}

impl HttpBridges {
    #[must_use]
    pub fn new(client: reqwest::Client, providers: ProvidersConfig) -> Self {
        Self { client, providers }
    }
}

#[async_trait]
impl Bridges for HttpBridges {
    async fn get_users(
        &self,
        account: &Account,
        bridge: BridgeKind,
    ) -> Result<Vec<BridgeUser>, ProviderError> {
        BridgeSource::resolve(&self.client, &self.providers, account, bridge)?
            .get_users()
            .await
    }
}
