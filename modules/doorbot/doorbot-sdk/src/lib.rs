//! Doorbot SDK
//!
//! Public contract of the `doorbot` module:
//! - `DoorbotClientV1` trait (knock notifications, directory sync, account-created mail)
//! - Model types for accounts, people, doors and bridge users
//! - Error type (`DoorbotError`)
//!
//! ## Usage
//!
//! ```ignore
//! use doorbot_sdk::DoorbotClientV1;
//!
//! let outcome = client.knock_knock(account_id, door_id, person_id).await?;
//! let report = client.sync_people(account_id).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::DoorbotClientV1;
pub use errors::DoorbotError;
pub use models::{
    Account, BridgeKind, BridgeLink, BridgeSettings, BridgeUser, ChannelKind,
    ChannelSwitch, Door, HubBridge, KnockOutcome, NotificationPreferences, NotificationSettings,
    Person, SyncReport,
};
