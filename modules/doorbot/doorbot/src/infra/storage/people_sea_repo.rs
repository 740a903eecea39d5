use async_trait::async_trait;
use chrono::Utc;
use doorbot_sdk::Person;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repos::PeopleRepository;
use crate::infra::storage::entity::person::{Column, Entity as PersonEntity};
use crate::infra::storage::mapper::person_active_model;

/// ORM-based implementation of the `PeopleRepository` trait.
#[derive(Clone, Default)]
pub struct OrmPeopleRepository;

#[async_trait]
impl PeopleRepository for OrmPeopleRepository {
    async fn find<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        account_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Person>, DomainError> {
        let found = PersonEntity::find_by_id(id)
            .filter(Column::AccountId.eq(account_id))
            .one(conn)
            .await?;
        Ok(found.map(Into::into))
    }

    async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        account_id: Uuid,
        mut person: Person,
    ) -> Result<Person, DomainError> {
        person.account_id = account_id;
        let now = Utc::now();

        let mut m = person_active_model(person, now);
        m.created_at = Set(now);

        let inserted = m.insert(conn).await?;
        Ok(inserted.into())
    }

    async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        account_id: Uuid,
        mut person: Person,
    ) -> Result<Person, DomainError> {
        let exists = PersonEntity::find_by_id(person.id)
            .filter(Column::AccountId.eq(account_id))
            .one(conn)
            .await?
            .is_some();

        if !exists {
            return Err(DomainError::person_not_found(person.id));
        }

        person.account_id = account_id;
        let updated = person_active_model(person, Utc::now()).update(conn).await?;
        Ok(updated.into())
    }
}
