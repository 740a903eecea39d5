pub mod account;
pub mod bridge_user;
pub mod door;
pub mod person;
