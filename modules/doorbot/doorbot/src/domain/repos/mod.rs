//! Repository traits. Every tenant-owned call takes the account id explicitly;
//! implementations never carry a current tenant.

mod accounts_repo;
mod bridge_users_repo;
mod doors_repo;
mod people_repo;

pub use accounts_repo::AccountsRepository;
pub use bridge_users_repo::BridgeUsersRepository;
pub use doors_repo::DoorsRepository;
pub use people_repo::PeopleRepository;

/// Data access facade handed to the domain services.
pub trait Repositories: Send + Sync + 'static {
    type Accounts: AccountsRepository;
    type People: PeopleRepository;
    type Doors: DoorsRepository;
    type BridgeUsers: BridgeUsersRepository;

    fn accounts(&self) -> &Self::Accounts;
    fn people(&self) -> &Self::People;
    fn doors(&self) -> &Self::Doors;
    fn bridge_users(&self) -> &Self::BridgeUsers;
}
