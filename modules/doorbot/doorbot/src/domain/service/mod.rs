//! Domain service layer.
//!
//! - `notifications` - channel selection and first-success knock delivery
//! - `sync` - directory reconciliation of people against external bridges
//!
//! `Service` ties both to the repositories and resolves the records the HTTP
//! entry points refer to by id.

use std::sync::Arc;

use doorbot_sdk::{Account, KnockOutcome, SyncReport};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::config::DoorbotConfig;
use crate::domain::error::DomainError;
use crate::domain::ports::{Bridges, NotifierFactory};
use crate::domain::repos::{AccountsRepository, DoorsRepository, PeopleRepository, Repositories};

mod notifications;
mod sync;

pub use notifications::{NotificationService, deliver_first_success};
pub use sync::{SyncConfig, SyncService};

pub struct Service<R: Repositories> {
    repos: Arc<R>,
    db: DatabaseConnection,
    notifications: NotificationService,
    sync: SyncService<R>,
}

impl<R: Repositories> Service<R> {
    pub fn new(
        repos: R,
        db: DatabaseConnection,
        notifiers: Arc<dyn NotifierFactory>,
        bridges: Arc<dyn Bridges>,
        config: &DoorbotConfig,
    ) -> Self {
        let repos = Arc::new(repos);
        let sync = SyncService::new(
            Arc::clone(&repos),
            db.clone(),
            bridges,
            SyncConfig {
                bridges: config.sync_bridges.clone(),
                fetch_timeout: config.fetch_timeout(),
                match_key: config.match_key,
            },
        );

        Self {
            repos,
            db,
            notifications: NotificationService::new(notifiers, config.delivery_attempt_timeout()),
            sync,
        }
    }

    #[must_use]
    pub fn repos(&self) -> &R {
        &self.repos
    }

    #[must_use]
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    #[must_use]
    pub fn notifications(&self) -> &NotificationService {
        &self.notifications
    }

    /// # Errors
    /// `AccountNotFound` if there is no such account.
    pub async fn account(&self, id: Uuid) -> Result<Account, DomainError> {
        self.repos
            .accounts()
            .find(&self.db, id)
            .await?
            .ok_or_else(|| DomainError::account_not_found(id))
    }

    /// # Errors
    /// `UnknownHost` if no account is served on `host`.
    pub async fn account_by_host(&self, host: &str) -> Result<Account, DomainError> {
        self.repos
            .accounts()
            .find_by_host(&self.db, host)
            .await?
            .ok_or_else(|| DomainError::unknown_host(host))
    }

    /// Resolve the person and door of a knock and dispatch it.
    ///
    /// # Errors
    /// - `PersonNotFound` / `DoorNotFound` when either id is unknown to the account
    /// - `Forbidden` when the person is hidden or unavailable
    #[tracing::instrument(skip(self, account), fields(account_id = %account.id))]
    pub async fn knock(
        &self,
        account: &Account,
        door_id: Uuid,
        person_id: Uuid,
    ) -> Result<KnockOutcome, DomainError> {
        let person = self
            .repos
            .people()
            .find(&self.db, account.id, person_id)
            .await?
            .ok_or_else(|| DomainError::person_not_found(person_id))?;

        if !person.is_visible || !person.is_available {
            return Err(DomainError::forbidden("person is not reachable"));
        }

        let door = self
            .repos
            .doors()
            .find(&self.db, account.id, door_id)
            .await?
            .ok_or_else(|| DomainError::door_not_found(door_id))?;

        Ok(self.notifications.knock_knock(account, &door, &person))
    }

    /// # Errors
    /// See [`SyncService::sync`].
    pub async fn sync_people(&self, account: &Account) -> Result<SyncReport, DomainError> {
        self.sync.sync(account).await
    }

    /// # Errors
    /// `PersonNotFound` when the person does not belong to the account.
    pub async fn account_created(
        &self,
        account: &Account,
        person_id: Uuid,
        password: &str,
    ) -> Result<bool, DomainError> {
        let person = self
            .repos
            .people()
            .find(&self.db, account.id, person_id)
            .await?
            .ok_or_else(|| DomainError::person_not_found(person_id))?;

        Ok(self.notifications.account_created(account, &person, password))
    }

    /// Wait for background deliveries to finish.
    pub async fn shutdown(&self) {
        tracing::info!(
            in_flight = self.notifications.in_flight(),
            "draining notification deliveries"
        );
        self.notifications.drain().await;
    }
}
