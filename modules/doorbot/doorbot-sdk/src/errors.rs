//! Public error types for the `doorbot` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can be returned by the `DoorbotClientV1`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DoorbotError {
    /// The referenced resource does not exist in the account.
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: Uuid },

    /// The operation is not allowed for the referenced resource.
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// Validation error with the provided data.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// An internal error occurred.
    #[error("Internal error")]
    Internal,
}

impl DoorbotError {
    #[must_use]
    pub fn not_found(resource: &'static str, id: Uuid) -> Self {
        Self::NotFound { resource, id }
    }

    #[must_use]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
