use async_trait::async_trait;
use chrono::Utc;
use doorbot_sdk::Door;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repos::DoorsRepository;
use crate::infra::storage::entity::door::{ActiveModel as DoorAM, Column, Entity as DoorEntity};

/// ORM-based implementation of the `DoorsRepository` trait.
#[derive(Clone, Default)]
pub struct OrmDoorsRepository;

#[async_trait]
impl DoorsRepository for OrmDoorsRepository {
    async fn find<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        account_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Door>, DomainError> {
        let found = DoorEntity::find_by_id(id)
            .filter(Column::AccountId.eq(account_id))
            .one(conn)
            .await?;
        Ok(found.map(Into::into))
    }

    async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        account_id: Uuid,
        door: Door,
    ) -> Result<Door, DomainError> {
        let now = Utc::now();
        let m = DoorAM {
            id: Set(door.id),
            account_id: Set(account_id),
            name: Set(door.name),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = m.insert(conn).await?;
        Ok(inserted.into())
    }
}
