use async_trait::async_trait;
use chrono::Utc;
use doorbot_sdk::{BridgeKind, BridgeLink};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repos::BridgeUsersRepository;
use crate::infra::storage::entity::bridge_user::{
    ActiveModel as BridgeUserAM, Column, Entity as BridgeUserEntity,
};

/// ORM-based implementation of the `BridgeUsersRepository` trait.
#[derive(Clone, Default)]
pub struct OrmBridgeUsersRepository;

#[async_trait]
impl BridgeUsersRepository for OrmBridgeUsersRepository {
    async fn find_by_bridge<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        account_id: Uuid,
        bridge: BridgeKind,
    ) -> Result<Vec<BridgeLink>, DomainError> {
        let rows = BridgeUserEntity::find()
            .filter(Column::AccountId.eq(account_id))
            .filter(Column::BridgeId.eq(bridge.id()))
            .order_by_asc(Column::CreatedAt)
            .all(conn)
            .await?;
        rows.into_iter().map(BridgeLink::try_from).collect()
    }

    async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        account_id: Uuid,
        link: BridgeLink,
    ) -> Result<BridgeLink, DomainError> {
        let now = Utc::now();
        let m = BridgeUserAM {
            id: Set(link.id),
            account_id: Set(account_id),
            person_id: Set(link.person_id),
            bridge_id: Set(link.bridge.id()),
            user_id: Set(link.external_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = m.insert(conn).await?;
        BridgeLink::try_from(inserted)
    }
}
