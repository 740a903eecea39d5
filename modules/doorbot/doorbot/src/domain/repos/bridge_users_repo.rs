use async_trait::async_trait;
use doorbot_sdk::{BridgeKind, BridgeLink};
use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Repository trait for the links between remote directory users and people.
#[async_trait]
pub trait BridgeUsersRepository: Send + Sync {
    /// Links already registered for one bridge.
    async fn find_by_bridge<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        account_id: Uuid,
        bridge: BridgeKind,
    ) -> Result<Vec<BridgeLink>, DomainError>;

    /// Insert a link. `link.account_id` is overwritten with `account_id`.
    async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        account_id: Uuid,
        link: BridgeLink,
    ) -> Result<BridgeLink, DomainError>;
}
