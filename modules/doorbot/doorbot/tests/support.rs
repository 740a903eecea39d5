#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(dead_code)] // not every test binary uses every helper

//! Test support: in-memory database, seeding, and recording fakes for the
//! outbound ports.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use doorbot::config::DoorbotConfig;
use doorbot::domain::error::{DomainError, ProviderError};
use doorbot::domain::ports::{Bridges, ChannelNotifier, NotifierFactory};
use doorbot::domain::repos::{
    AccountsRepository, DoorsRepository, PeopleRepository, Repositories,
};
use doorbot::domain::service::Service;
use doorbot::infra::storage::entity::{bridge_user, person};
use doorbot::infra::storage::{
    OrmAccountsRepository, OrmBridgeUsersRepository, OrmDoorsRepository, OrmPeopleRepository,
    OrmRepositories,
};
use doorbot_sdk::{
    Account, BridgeKind, BridgeLink, BridgeSettings, BridgeUser, ChannelKind, ChannelSwitch, Door,
    NotificationPreferences, NotificationSettings, Person,
};
use sea_orm::{
    ColumnTrait, ConnectionTrait, Database, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};
use sea_orm_migration::MigratorTrait;
use uuid::Uuid;

/// Fresh in-memory `SQLite` database with migrations applied.
pub async fn inmem_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    doorbot::infra::storage::migrations::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

pub fn account_fixture(host: &str) -> Account {
    Account {
        id: Uuid::new_v4(),
        name: format!("{host} inc"),
        host: host.to_owned(),
        contact_name: "Owner".to_owned(),
        contact_email: format!("owner@{host}.test"),
        notifications: NotificationSettings {
            enabled: true,
            hipchat: ChannelSwitch::enabled(),
            slack: ChannelSwitch::enabled(),
            nexmo: ChannelSwitch::enabled(),
            twilio: ChannelSwitch::enabled(),
            mailgun: ChannelSwitch::enabled(),
            postmark: ChannelSwitch::enabled(),
            ..NotificationSettings::default()
        },
        bridges: BridgeSettings::default(),
    }
}

pub fn person_fixture(name: &str, prefs: NotificationPreferences) -> Person {
    Person {
        id: Uuid::new_v4(),
        account_id: Uuid::nil(),
        name: name.to_owned(),
        title: String::new(),
        email: format!("{}@example.test", name.to_lowercase()),
        phone_number: "+15551234567".to_owned(),
        is_visible: true,
        is_available: true,
        notifications: prefs,
    }
}

pub async fn seed_account(db: &DatabaseConnection, account: Account) -> Account {
    OrmAccountsRepository.create(db, account).await.unwrap()
}

pub async fn seed_person(db: &DatabaseConnection, account_id: Uuid, person: Person) -> Person {
    OrmPeopleRepository.create(db, account_id, person).await.unwrap()
}

pub async fn seed_door(db: &DatabaseConnection, account_id: Uuid, name: &str) -> Door {
    OrmDoorsRepository
        .create(
            db,
            account_id,
            Door {
                id: Uuid::new_v4(),
                account_id,
                name: name.to_owned(),
            },
        )
        .await
        .unwrap()
}

/// People of an account, oldest first.
pub async fn stored_people(db: &DatabaseConnection, account_id: Uuid) -> Vec<Person> {
    person::Entity::find()
        .filter(person::Column::AccountId.eq(account_id))
        .order_by_asc(person::Column::CreatedAt)
        .all(db)
        .await
        .unwrap()
        .into_iter()
        .map(Into::into)
        .collect()
}

/// Bridge links of an account, oldest first.
pub async fn stored_links(db: &DatabaseConnection, account_id: Uuid) -> Vec<BridgeLink> {
    bridge_user::Entity::find()
        .filter(bridge_user::Column::AccountId.eq(account_id))
        .order_by_asc(bridge_user::Column::CreatedAt)
        .all(db)
        .await
        .unwrap()
        .into_iter()
        .map(|m| BridgeLink::try_from(m).unwrap())
        .collect()
}

pub async fn count_rows(db: &DatabaseConnection, table: &str) -> i64 {
    let backend = db.get_database_backend();
    let row = db
        .query_one(sea_orm::Statement::from_string(
            backend,
            format!("SELECT COUNT(*) AS n FROM {table}"),
        ))
        .await
        .unwrap()
        .unwrap();
    row.try_get::<i64>("", "n").unwrap()
}

// --- notifiers ---

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behavior {
    Succeed,
    Fail,
    Hang,
}

/// Shared journal of delivery attempts, in call order.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<ChannelKind>>>);

impl CallLog {
    pub fn calls(&self) -> Vec<ChannelKind> {
        self.0.lock().unwrap().clone()
    }

    fn record(&self, kind: ChannelKind) {
        self.0.lock().unwrap().push(kind);
    }
}

pub struct FakeNotifier {
    kind: ChannelKind,
    behavior: Behavior,
    log: CallLog,
}

#[async_trait]
impl ChannelNotifier for FakeNotifier {
    fn kind(&self) -> ChannelKind {
        self.kind
    }

    async fn knock_knock(&self, _door: &Door, _person: &Person) -> Result<(), ProviderError> {
        self.log.record(self.kind);
        match self.behavior {
            Behavior::Succeed => Ok(()),
            Behavior::Fail => Err(ProviderError::rejected("fake failure")),
            Behavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(())
            }
        }
    }

    async fn account_created(&self, _person: &Person, _password: &str) -> Result<(), ProviderError> {
        self.log.record(self.kind);
        Ok(())
    }
}

/// Hands out fakes for the configured channels; other channels behave as if
/// credentials were missing.
#[derive(Clone, Default)]
pub struct FakeNotifierFactory {
    behaviors: HashMap<ChannelKind, Behavior>,
    pub log: CallLog,
}

impl FakeNotifierFactory {
    pub fn with(mut self, kind: ChannelKind, behavior: Behavior) -> Self {
        self.behaviors.insert(kind, behavior);
        self
    }

    pub fn all(behavior: Behavior) -> Self {
        [
            ChannelKind::HipChat,
            ChannelKind::Slack,
            ChannelKind::Nexmo,
            ChannelKind::Twilio,
            ChannelKind::Mailgun,
            ChannelKind::Postmark,
        ]
        .into_iter()
        .fold(Self::default(), |f, kind| f.with(kind, behavior))
    }
}

impl NotifierFactory for FakeNotifierFactory {
    fn notifier(&self, kind: ChannelKind, _account: &Account) -> Option<Arc<dyn ChannelNotifier>> {
        let behavior = *self.behaviors.get(&kind)?;
        Some(Arc::new(FakeNotifier {
            kind,
            behavior,
            log: self.log.clone(),
        }))
    }
}

// --- bridges ---

/// Serves canned users per bridge; bridges without an entry fail.
#[derive(Clone, Default)]
pub struct FakeBridges {
    users: Arc<Mutex<HashMap<BridgeKind, Vec<BridgeUser>>>>,
}

impl FakeBridges {
    pub fn set(&self, bridge: BridgeKind, users: Vec<BridgeUser>) {
        self.users.lock().unwrap().insert(bridge, users);
    }
}

#[async_trait]
impl Bridges for FakeBridges {
    async fn get_users(
        &self,
        _account: &Account,
        bridge: BridgeKind,
    ) -> Result<Vec<BridgeUser>, ProviderError> {
        self.users
            .lock()
            .unwrap()
            .get(&bridge)
            .cloned()
            .ok_or(ProviderError::Connection("bridge unreachable".to_owned()))
    }
}

pub fn remote_user(bridge: BridgeKind, id: &str, name: &str) -> BridgeUser {
    BridgeUser {
        bridge,
        external_id: id.to_owned(),
        name: name.to_owned(),
        email: format!("{}@example.test", name.to_lowercase()),
        phone_number: String::new(),
        title: String::new(),
    }
}

// --- repositories ---

/// People repository whose n-th `update` call (1-based) fails.
#[derive(Default)]
pub struct FailingPeople {
    inner: OrmPeopleRepository,
    fail_on_update: usize,
    updates: AtomicUsize,
}

#[async_trait]
impl PeopleRepository for FailingPeople {
    async fn find<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        account_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Person>, DomainError> {
        self.inner.find(conn, account_id, id).await
    }

    async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        account_id: Uuid,
        person: Person,
    ) -> Result<Person, DomainError> {
        self.inner.create(conn, account_id, person).await
    }

    async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        account_id: Uuid,
        person: Person,
    ) -> Result<Person, DomainError> {
        let n = self.updates.fetch_add(1, Ordering::SeqCst) + 1;
        if n == self.fail_on_update {
            return Err(DomainError::database("injected update failure"));
        }
        self.inner.update(conn, account_id, person).await
    }
}

/// `OrmRepositories` with a people repository that fails on demand.
#[derive(Default)]
pub struct FailingRepos {
    accounts: OrmAccountsRepository,
    people: FailingPeople,
    doors: OrmDoorsRepository,
    bridge_users: OrmBridgeUsersRepository,
}

impl FailingRepos {
    pub fn failing_update(n: usize) -> Self {
        Self {
            people: FailingPeople {
                fail_on_update: n,
                ..FailingPeople::default()
            },
            ..Self::default()
        }
    }
}

impl Repositories for FailingRepos {
    type Accounts = OrmAccountsRepository;
    type People = FailingPeople;
    type Doors = OrmDoorsRepository;
    type BridgeUsers = OrmBridgeUsersRepository;

    fn accounts(&self) -> &Self::Accounts {
        &self.accounts
    }

    fn people(&self) -> &Self::People {
        &self.people
    }

    fn doors(&self) -> &Self::Doors {
        &self.doors
    }

    fn bridge_users(&self) -> &Self::BridgeUsers {
        &self.bridge_users
    }
}

// --- services ---

pub fn test_config() -> DoorbotConfig {
    DoorbotConfig {
        delivery_attempt_timeout_ms: 200,
        fetch_timeout_ms: 1_000,
        ..DoorbotConfig::default()
    }
}

pub fn build_service<R: Repositories>(
    repos: R,
    db: DatabaseConnection,
    notifiers: FakeNotifierFactory,
    bridges: FakeBridges,
    cfg: &DoorbotConfig,
) -> Arc<Service<R>> {
    Arc::new(Service::new(
        repos,
        db,
        Arc::new(notifiers),
        Arc::new(bridges),
        cfg,
    ))
}

pub fn orm_service(
    db: DatabaseConnection,
    notifiers: FakeNotifierFactory,
    bridges: FakeBridges,
) -> Arc<Service<OrmRepositories>> {
    build_service(
        OrmRepositories::default(),
        db,
        notifiers,
        bridges,
        &test_config(),
    )
}
