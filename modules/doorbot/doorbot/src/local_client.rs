//! Local implementation of `DoorbotClientV1`.
//!
//! Used for in-process callers. Delegates to the domain service and converts
//! errors to SDK error types.

use std::sync::Arc;

use async_trait::async_trait;
use doorbot_sdk::{DoorbotClientV1, DoorbotError, KnockOutcome, SyncReport};
use uuid::Uuid;

use crate::domain::repos::Repositories;
use crate::domain::service::Service;

pub struct DoorbotLocalClient<R: Repositories> {
    service: Arc<Service<R>>,
}

impl<R: Repositories> DoorbotLocalClient<R> {
    #[must_use]
    pub fn new(service: Arc<Service<R>>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<R: Repositories> DoorbotClientV1 for DoorbotLocalClient<R> {
    async fn knock_knock(
        &self,
        account_id: Uuid,
        door_id: Uuid,
        person_id: Uuid,
    ) -> Result<KnockOutcome, DoorbotError> {
        let account = self.service.account(account_id).await?;
        self.service
            .knock(&account, door_id, person_id)
            .await
            .map_err(Into::into)
    }

    async fn sync_people(&self, account_id: Uuid) -> Result<SyncReport, DoorbotError> {
        let account = self.service.account(account_id).await?;
        self.service
            .sync_people(&account)
            .await
            .map_err(Into::into)
    }

    async fn account_created(
        &self,
        account_id: Uuid,
        person_id: Uuid,
        password: &str,
    ) -> Result<(), DoorbotError> {
        let account = self.service.account(account_id).await?;
        // sending is best effort, an unconfigured provider is only logged
        self.service
            .account_created(&account, person_id, password)
            .await?;
        Ok(())
    }
}
