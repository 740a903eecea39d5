//! Doorbot Module
//!
//! Knock notification routing and directory synchronization for a
//! multi-tenant intercom backend.
//!
//! ## Public API
//!
//! The public API is defined in the `doorbot-sdk` crate and re-exported here:
//! - `DoorbotClientV1` - trait for in-process callers
//! - `Account`, `Person`, `Door`, `BridgeUser`, ... - data models
//! - `DoorbotError` - error type
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// === PUBLIC API (from SDK) ===
pub use doorbot_sdk::{
    Account, BridgeKind, BridgeUser, ChannelKind, Door, DoorbotClientV1, DoorbotError,
    KnockOutcome, Person, SyncReport,
};

// === MODULE DEFINITION ===
pub mod module;
pub use module::DoorbotModule;

// === LOCAL CLIENT ===
pub mod local_client;

// === INTERNAL MODULES ===
// Exposed for integration tests; only the SDK types are a stable API.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
