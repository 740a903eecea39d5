use doorbot_sdk::DoorbotError;
use thiserror::Error;
use uuid::Uuid;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Account not found: {id}")]
    AccountNotFound { id: Uuid },

    #[error("No account is served on host '{host}'")]
    UnknownHost { host: String },

    #[error("Person not found: {id}")]
    PersonNotFound { id: Uuid },

    #[error("Door not found: {id}")]
    DoorNotFound { id: Uuid },

    #[error("Forbidden: {reason}")]
    Forbidden { reason: String },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    #[must_use]
    pub fn account_not_found(id: Uuid) -> Self {
        Self::AccountNotFound { id }
    }

    #[must_use]
    pub fn unknown_host(host: impl Into<String>) -> Self {
        Self::UnknownHost { host: host.into() }
    }

    #[must_use]
    pub fn person_not_found(id: Uuid) -> Self {
        Self::PersonNotFound { id }
    }

    #[must_use]
    pub fn door_not_found(id: Uuid) -> Self {
        Self::DoorNotFound { id }
    }

    #[must_use]
    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::Forbidden {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::database(e.to_string())
    }
}

/// Failure reported by an outbound provider adapter.
///
/// These never reach API callers: delivery failures are logged and the next
/// channel is tried, fetch failures drop the bridge from the sync run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("{provider} credentials are not configured")]
    MissingCredentials { provider: &'static str },

    #[error("{provider} is disabled for this account")]
    Disabled { provider: &'static str },

    #[error("{provider} does not support this operation")]
    Unsupported { provider: &'static str },

    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("rejected by provider: {0}")]
    Rejected(String),

    #[error("request failed: {0}")]
    Request(String),
}

impl ProviderError {
    #[must_use]
    pub fn missing_credentials(provider: &'static str) -> Self {
        Self::MissingCredentials { provider }
    }

    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for DoorbotError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::AccountNotFound { id } => DoorbotError::not_found("Account", id),
            DomainError::PersonNotFound { id } => DoorbotError::not_found("Person", id),
            DomainError::DoorNotFound { id } => DoorbotError::not_found("Door", id),
            DomainError::UnknownHost { host } => {
                DoorbotError::validation(format!("unknown host: {host}"))
            }
            DomainError::Forbidden { reason } => DoorbotError::forbidden(reason),
            DomainError::Validation { field, message } => {
                DoorbotError::validation(format!("{field}: {message}"))
            }
            DomainError::Database { .. } => DoorbotError::internal(),
        }
    }
}
