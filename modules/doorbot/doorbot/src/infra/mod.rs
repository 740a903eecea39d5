pub mod bridges;
pub mod http;
pub mod notifiers;
pub mod storage;

use secrecy::{ExposeSecret, SecretString};

/// The account's own credential when it has a non-empty one, otherwise the
/// platform-level secret.
pub(crate) fn resolve_secret(
    account: Option<&str>,
    platform: Option<&SecretString>,
) -> Option<String> {
    account
        .filter(|t| !t.trim().is_empty())
        .map(ToOwned::to_owned)
        .or_else(|| {
            platform
                .map(|s| s.expose_secret().to_owned())
                .filter(|t| !t.trim().is_empty())
        })
}
