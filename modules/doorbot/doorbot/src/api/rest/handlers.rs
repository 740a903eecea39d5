use std::sync::Arc;

use axum::extract::{Extension, Json};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use doorbot_sdk::{Account, KnockOutcome};

use super::dto::{HealthDto, NotificationRequest};
use super::problem::Problem;
use crate::domain::repos::Repositories;
use crate::domain::service::Service;

#[allow(clippy::unused_async)]
pub async fn health() -> Json<HealthDto> {
    Json(HealthDto { status: "ok" })
}

/// Reconcile the account's people with its directories.
#[tracing::instrument(skip_all, fields(account_id = %account.id))]
pub async fn sync_people<R: Repositories>(
    Extension(svc): Extension<Arc<Service<R>>>,
    Extension(account): Extension<Account>,
) -> Result<StatusCode, Problem> {
    let report = svc.sync_people(&account).await?;
    tracing::debug!(
        created = report.created,
        updated = report.updated,
        skipped = report.skipped_bridges.len(),
        "people sync finished"
    );
    Ok(StatusCode::NO_CONTENT)
}

/// Dispatch a knock. Accepted even when no channel is eligible; delivery
/// happens after the response.
#[tracing::instrument(skip_all, fields(account_id = %account.id))]
pub async fn create_notification<R: Repositories>(
    Extension(svc): Extension<Arc<Service<R>>>,
    Extension(account): Extension<Account>,
    Json(req): Json<NotificationRequest>,
) -> Result<impl IntoResponse, Problem> {
    let knock = &req.notification;
    let outcome = svc.knock(&account, knock.door_id, knock.person_id).await?;

    if let KnockOutcome::Accepted { channels } = &outcome {
        tracing::debug!(candidates = channels.len(), "knock dispatched");
    }
    Ok((StatusCode::ACCEPTED, Json(req)))
}
