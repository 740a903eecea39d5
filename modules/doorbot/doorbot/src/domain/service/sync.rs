use std::sync::Arc;
use std::time::Duration;

use doorbot_sdk::{
    Account, BridgeKind, BridgeLink, BridgeUser, NotificationPreferences, Person, SyncReport,
};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionError, TransactionTrait};
use uuid::Uuid;

use crate::config::MatchKey;
use crate::domain::error::DomainError;
use crate::domain::ports::Bridges;
use crate::domain::repos::{BridgeUsersRepository, PeopleRepository, Repositories};

#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub bridges: Vec<BridgeKind>,
    pub fetch_timeout: Duration,
    pub match_key: MatchKey,
}

/// Reconciles an account's people with its external directories.
///
/// Remote users are fetched outside of any transaction. The reconciliation
/// itself runs in a single transaction: any read or write failure rolls back
/// every change made by the run.
pub struct SyncService<R: Repositories> {
    repos: Arc<R>,
    db: DatabaseConnection,
    bridges: Arc<dyn Bridges>,
    config: SyncConfig,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct ReconcileCounts {
    created: usize,
    updated: usize,
}

impl<R: Repositories> SyncService<R> {
    pub fn new(
        repos: Arc<R>,
        db: DatabaseConnection,
        bridges: Arc<dyn Bridges>,
        config: SyncConfig,
    ) -> Self {
        Self {
            repos,
            db,
            bridges,
            config,
        }
    }

    /// # Errors
    ///
    /// Returns a `DomainError` when reconciliation fails; nothing is written in
    /// that case. Bridge fetch failures are not errors, the bridge is skipped.
    #[tracing::instrument(skip(self, account), fields(account_id = %account.id))]
    pub async fn sync(&self, account: &Account) -> Result<SyncReport, DomainError> {
        let mut remote: Vec<BridgeUser> = Vec::new();
        let mut registered: Vec<BridgeLink> = Vec::new();
        let mut skipped_bridges = Vec::new();

        for &bridge in &self.config.bridges {
            match self.fetch_bridge(account, bridge).await {
                Some((users, links)) => {
                    tracing::debug!(
                        %bridge,
                        remote = users.len(),
                        registered = links.len(),
                        "bridge fetched"
                    );
                    remote.extend(users);
                    registered.extend(links);
                }
                None => skipped_bridges.push(bridge),
            }
        }

        let repos = Arc::clone(&self.repos);
        let account_id = account.id;
        let match_key = self.config.match_key;

        let counts = self
            .db
            .transaction::<_, ReconcileCounts, DomainError>(move |txn| {
                Box::pin(async move {
                    reconcile(repos.as_ref(), txn, account_id, remote, registered, match_key).await
                })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Connection(db) => DomainError::from(db),
                TransactionError::Transaction(domain) => domain,
            })
            .inspect_err(|e| tracing::error!(error = %e, "directory sync rolled back"))?;

        tracing::info!(
            created = counts.created,
            updated = counts.updated,
            skipped = skipped_bridges.len(),
            "directory sync committed"
        );

        Ok(SyncReport {
            created: counts.created,
            updated: counts.updated,
            skipped_bridges,
        })
    }

    /// Remote users and registered links for one bridge, or `None` when
    /// either could not be read.
    async fn fetch_bridge(
        &self,
        account: &Account,
        bridge: BridgeKind,
    ) -> Option<(Vec<BridgeUser>, Vec<BridgeLink>)> {
        let users = match tokio::time::timeout(
            self.config.fetch_timeout,
            self.bridges.get_users(account, bridge),
        )
        .await
        {
            Ok(Ok(users)) => users,
            Ok(Err(e)) => {
                tracing::warn!(%bridge, error = %e, "bridge fetch failed, skipping");
                return None;
            }
            Err(_) => {
                tracing::warn!(%bridge, "bridge fetch timed out, skipping");
                return None;
            }
        };

        match self
            .repos
            .bridge_users()
            .find_by_bridge(&self.db, account.id, bridge)
            .await
        {
            Ok(links) => Some((users, links)),
            Err(e) => {
                tracing::warn!(%bridge, error = %e, "loading bridge links failed, skipping");
                None
            }
        }
    }
}

fn link_matches(key: MatchKey, link: &BridgeLink, user: &BridgeUser) -> bool {
    match key {
        MatchKey::ExternalId => link.external_id == user.external_id,
        MatchKey::BridgeAndExternalId => {
            link.bridge == user.bridge && link.external_id == user.external_id
        }
    }
}

async fn reconcile<R: Repositories>(
    repos: &R,
    txn: &DatabaseTransaction,
    account_id: Uuid,
    remote: Vec<BridgeUser>,
    mut registered: Vec<BridgeLink>,
    match_key: MatchKey,
) -> Result<ReconcileCounts, DomainError> {
    let mut counts = ReconcileCounts::default();

    for user in remote {
        let linked_person = registered
            .iter()
            .find(|link| link_matches(match_key, link, &user))
            .map(|link| link.person_id);

        if let Some(person_id) = linked_person {
            let mut person = repos
                .people()
                .find(txn, account_id, person_id)
                .await?
                .ok_or_else(|| DomainError::person_not_found(person_id))?;

            person.name = user.name;
            person.email = user.email;
            person.phone_number = user.phone_number;

            repos.people().update(txn, account_id, person).await?;
            counts.updated += 1;
        } else {
            let person = repos
                .people()
                .create(txn, account_id, new_person(account_id, &user))
                .await?;

            let link = repos
                .bridge_users()
                .create(
                    txn,
                    account_id,
                    BridgeLink {
                        id: Uuid::new_v4(),
                        account_id,
                        person_id: person.id,
                        bridge: user.bridge,
                        external_id: user.external_id,
                    },
                )
                .await?;

            // a later duplicate of the same remote user takes the update path
            registered.push(link);
            counts.created += 1;
        }
    }

    Ok(counts)
}

fn new_person(account_id: Uuid, user: &BridgeUser) -> Person {
    Person {
        id: Uuid::new_v4(),
        account_id,
        name: user.name.clone(),
        title: String::new(),
        email: user.email.clone(),
        phone_number: String::new(),
        is_visible: false,
        is_available: false,
        notifications: NotificationPreferences::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(bridge: BridgeKind, external_id: &str) -> BridgeLink {
        BridgeLink {
            id: Uuid::new_v4(),
            account_id: Uuid::new_v4(),
            person_id: Uuid::new_v4(),
            bridge,
            external_id: external_id.to_owned(),
        }
    }

    fn user(bridge: BridgeKind, external_id: &str) -> BridgeUser {
        BridgeUser {
            bridge,
            external_id: external_id.to_owned(),
            name: "Ada".to_owned(),
            email: "ada@example.test".to_owned(),
            phone_number: String::new(),
            title: String::new(),
        }
    }

    #[test]
    fn compound_key_separates_bridges() {
        let l = link(BridgeKind::Hub, "42");
        assert!(link_matches(
            MatchKey::BridgeAndExternalId,
            &l,
            &user(BridgeKind::Hub, "42")
        ));
        assert!(!link_matches(
            MatchKey::BridgeAndExternalId,
            &l,
            &user(BridgeKind::HipChat, "42")
        ));
    }

    #[test]
    fn external_id_key_ignores_bridge() {
        let l = link(BridgeKind::Hub, "42");
        assert!(link_matches(MatchKey::ExternalId, &l, &user(BridgeKind::HipChat, "42")));
        assert!(!link_matches(MatchKey::ExternalId, &l, &user(BridgeKind::Hub, "43")));
    }

    #[test]
    fn new_person_takes_remote_name_and_email() {
        let account_id = Uuid::new_v4();
        let mut remote = user(BridgeKind::Slack, "U1");
        remote.title = "CTO".to_owned();
        let p = new_person(account_id, &remote);
        assert_eq!(p.account_id, account_id);
        assert_eq!(p.name, "Ada");
        assert_eq!(p.email, "ada@example.test");
        assert!(p.title.is_empty());
        assert!(!p.is_visible);
    }
}
