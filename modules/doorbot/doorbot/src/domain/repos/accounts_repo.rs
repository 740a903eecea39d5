use async_trait::async_trait;
use doorbot_sdk::Account;
use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Repository trait for Account persistence operations.
///
/// Accounts are the tenants themselves, so lookups here are not scoped.
#[async_trait]
pub trait AccountsRepository: Send + Sync {
    async fn find<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<Option<Account>, DomainError>;

    /// Find the account served on the given subdomain label.
    async fn find_by_host<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        host: &str,
    ) -> Result<Option<Account>, DomainError>;

    async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        account: Account,
    ) -> Result<Account, DomainError>;
}
