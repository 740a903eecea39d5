//! Per-request account resolution from the `Host` header.
//!
//! `acme.doorbot.co` is served as the account whose host is `acme`. Hosts
//! with fewer than three labels are not tenant hosts at all.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::Response;

use super::problem::Problem;
use crate::domain::repos::Repositories;
use crate::domain::service::Service;

const MIN_HOST_LABELS: usize = 3;

/// Account host label from a `Host` header value, or `None` when the value
/// does not name a tenant.
#[must_use]
pub fn account_host(header_value: &str) -> Option<&str> {
    let host = header_value
        .rsplit_once(':')
        .filter(|(_, port)| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()))
        .map_or(header_value, |(name, _)| name);

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < MIN_HOST_LABELS || labels[0].is_empty() {
        return None;
    }
    Some(labels[0])
}

/// Resolves the account and stores it as a request extension.
pub async fn resolve_account<R: Repositories>(
    State(svc): State<Arc<Service<R>>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Problem> {
    let raw = req
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| req.uri().host())
        .unwrap_or_default()
        .to_owned();

    let Some(host) = account_host(&raw) else {
        tracing::debug!(host = %raw, "request host is not an account host");
        return Err(Problem::new(
            StatusCode::FORBIDDEN,
            "Forbidden",
            "Unknown host",
        ));
    };

    let account = svc.account_by_host(host).await?;
    req.extensions_mut().insert(account);
    Ok(next.run(req).await)
}
