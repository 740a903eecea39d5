//! `DoorbotClientV1` trait definition.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::DoorbotError;
use crate::models::{KnockOutcome, SyncReport};

/// Public API of the `doorbot` module.
///
/// Every call is scoped to a single account; ids from another account
/// resolve as not found.
#[async_trait]
pub trait DoorbotClientV1: Send + Sync {
    /// Notify a person that someone is waiting at a door.
    ///
    /// Returns as soon as the delivery task is dispatched. Delivery
    /// failures are never reported back.
    async fn knock_knock(
        &self,
        account_id: Uuid,
        door_id: Uuid,
        person_id: Uuid,
    ) -> Result<KnockOutcome, DoorbotError>;

    /// Reconcile the account's people with its configured directory bridges.
    async fn sync_people(&self, account_id: Uuid) -> Result<SyncReport, DoorbotError>;

    /// Send the welcome email for a freshly registered account owner.
    async fn account_created(
        &self,
        account_id: Uuid,
        person_id: Uuid,
        password: &str,
    ) -> Result<(), DoorbotError>;
}
