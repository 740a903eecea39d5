use async_trait::async_trait;
use doorbot_sdk::Person;
use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::domain::error::DomainError;

/// Repository trait for Person persistence operations.
///
/// All methods accept:
/// - `conn: &C` - generic database connection (`DatabaseConnection` or `DatabaseTransaction`)
/// - `account_id` - the tenant the call is scoped to
#[async_trait]
pub trait PeopleRepository: Send + Sync {
    async fn find<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        account_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Person>, DomainError>;

    /// Insert a person. `person.account_id` is overwritten with `account_id`.
    async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        account_id: Uuid,
        person: Person,
    ) -> Result<Person, DomainError>;

    /// Update an existing person. Fails with `PersonNotFound` when the person
    /// does not belong to `account_id`.
    async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        account_id: Uuid,
        person: Person,
    ) -> Result<Person, DomainError>;
}
