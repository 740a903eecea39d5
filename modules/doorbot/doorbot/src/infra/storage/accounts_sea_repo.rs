use async_trait::async_trait;
use chrono::Utc;
use doorbot_sdk::Account;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repos::AccountsRepository;
use crate::infra::storage::entity::account::{Column, Entity as AccountEntity};
use crate::infra::storage::mapper::account_active_model;

/// ORM-based implementation of the `AccountsRepository` trait.
#[derive(Clone, Default)]
pub struct OrmAccountsRepository;

#[async_trait]
impl AccountsRepository for OrmAccountsRepository {
    async fn find<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        id: Uuid,
    ) -> Result<Option<Account>, DomainError> {
        let found = AccountEntity::find_by_id(id).one(conn).await?;
        Ok(found.map(Into::into))
    }

    async fn find_by_host<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        host: &str,
    ) -> Result<Option<Account>, DomainError> {
        let found = AccountEntity::find()
            .filter(Column::Host.eq(host))
            .one(conn)
            .await?;
        Ok(found.map(Into::into))
    }

    async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        account: Account,
    ) -> Result<Account, DomainError> {
        if account.host.is_empty() {
            return Err(DomainError::validation("host", "Host cannot be empty"));
        }

        let inserted = account_active_model(account, Utc::now())
            .insert(conn)
            .await?;
        Ok(inserted.into())
    }
}
