use async_trait::async_trait;
use doorbot_sdk::Door;
use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::domain::error::DomainError;

#[async_trait]
pub trait DoorsRepository: Send + Sync {
    async fn find<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        account_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Door>, DomainError>;

    async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        account_id: Uuid,
        door: Door,
    ) -> Result<Door, DomainError>;
}
