//! Shared outbound HTTP plumbing for provider adapters.

use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;

use crate::domain::error::ProviderError;

/// Build the client shared by every adapter.
///
/// # Errors
/// Fails only when the TLS backend cannot be initialised.
pub fn build_client(timeout: Duration) -> anyhow::Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(10)
        .user_agent(concat!("doorbot/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// `{base}{path}` with exactly one slash between them.
#[must_use]
pub fn endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[must_use]
pub fn map_send_error(e: &reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else if e.is_connect() {
        ProviderError::Connection(e.to_string())
    } else if e.is_decode() {
        ProviderError::decode(e.to_string())
    } else {
        ProviderError::Request(e.to_string())
    }
}

/// Send `request`, failing on transport errors and non-2xx statuses.
///
/// # Errors
/// `ProviderError::Http` carries the status and body of a rejected call.
pub async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, ProviderError> {
    let start = Instant::now();
    let response = request.send().await.map_err(|e| map_send_error(&e))?;

    let status_code = response.status().as_u16();
    let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    tracing::debug!(status_code, duration_ms, "HTTP request completed");

    if response.status().is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ProviderError::Http {
        status: status_code,
        body,
    })
}

/// Send `request` and decode a JSON body.
///
/// # Errors
/// See [`send`]; also `ProviderError::Decode` on a malformed body.
pub async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ProviderError> {
    let response = send(request).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ProviderError::decode(e.to_string()))
}
