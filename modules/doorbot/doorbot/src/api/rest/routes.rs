use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router, middleware};

use super::{handlers, tenant};
use crate::domain::repos::Repositories;
use crate::domain::service::Service;

/// Module routes. Everything under `/api` is scoped to the account named by
/// the request host.
#[must_use]
pub fn router<R: Repositories>(svc: Arc<Service<R>>) -> Router {
    let tenant_routes = Router::new()
        .route("/api/people/sync", post(handlers::sync_people::<R>))
        .route("/api/notifications", post(handlers::create_notification::<R>))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&svc),
            tenant::resolve_account::<R>,
        ))
        .layer(Extension(svc));

    Router::new()
        .route("/health", get(handlers::health))
        .merge(tenant_routes)
}
