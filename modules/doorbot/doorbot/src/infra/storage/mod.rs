//! Infrastructure storage layer.
//!
//! - `entity/` - SeaORM entity definitions (accounts, people, doors, bridge users)
//! - `mapper.rs` - Conversions between SeaORM models and SDK contract types
//! - `migrations/` - Database schema migrations
//! - `*_sea_repo.rs` - repository implementations, generic over the connection
//!   so they run on the pool and inside transactions alike

pub mod entity;
pub mod mapper;
pub mod migrations;

mod accounts_sea_repo;
mod bridge_users_sea_repo;
mod doors_sea_repo;
mod people_sea_repo;

pub use accounts_sea_repo::OrmAccountsRepository;
pub use bridge_users_sea_repo::OrmBridgeUsersRepository;
pub use doors_sea_repo::OrmDoorsRepository;
pub use people_sea_repo::OrmPeopleRepository;

use crate::domain::repos::Repositories;

/// SeaORM-backed repository set.
#[derive(Clone, Default)]
pub struct OrmRepositories {
    accounts: OrmAccountsRepository,
    people: OrmPeopleRepository,
    doors: OrmDoorsRepository,
    bridge_users: OrmBridgeUsersRepository,
}

impl Repositories for OrmRepositories {
    type Accounts = OrmAccountsRepository;
    type People = OrmPeopleRepository;
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
