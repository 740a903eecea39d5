//! Outbound ports: the capabilities the domain needs from external providers.

use std::sync::Arc;

use async_trait::async_trait;
use doorbot_sdk::{Account, BridgeKind, BridgeUser, ChannelKind, Door, Person};

use crate::domain::error::ProviderError;

/// A delivery channel bound to one account's credentials.
#[async_trait]
pub trait ChannelNotifier: Send + Sync {
    fn kind(&self) -> ChannelKind;

    /// Tell `person` that someone is waiting at `door`.
    async fn knock_knock(&self, door: &Door, person: &Person) -> Result<(), ProviderError>;

    /// Welcome message for a newly registered account owner. Only email
    /// channels implement it.
    async fn account_created(&self, _person: &Person, _password: &str) -> Result<(), ProviderError> {
        Err(ProviderError::Unsupported {
            provider: self.kind().name(),
        })
    }
}

/// Builds channel notifiers for an account.
pub trait NotifierFactory: Send + Sync {
    /// Returns `None` when no credentials can be resolved for `kind`, either on
    /// the account or at platform level.
    fn notifier(&self, kind: ChannelKind, account: &Account) -> Option<Arc<dyn ChannelNotifier>>;
}

/// Fetches remote users from an external directory.
#[async_trait]
pub trait Bridges: Send + Sync {
    async fn get_users(
        &self,
        account: &Account,
        bridge: BridgeKind,
    ) -> Result<Vec<BridgeUser>, ProviderError>;
}
