use std::sync::Arc;

use doorbot_sdk::DoorbotClientV1;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};
use url::Url;

use crate::api::rest::routes;
use crate::config::{DoorbotConfig, ProvidersConfig};
use crate::domain::ports::{Bridges, NotifierFactory};
use crate::domain::service::Service;
use crate::infra::bridges::HttpBridges;
use crate::infra::http::build_client;
use crate::infra::notifiers::HttpNotifierFactory;
use crate::infra::storage::OrmRepositories;
use crate::local_client::DoorbotLocalClient;

/// Service type wired with the SeaORM repositories.
pub type ConcreteService = Service<OrmRepositories>;

/// Composition root: storage, provider adapters and the domain service.
#[derive(Clone)]
pub struct DoorbotModule {
    service: Arc<ConcreteService>,
}

impl DoorbotModule {
    /// Wire the module over an already connected database.
    ///
    /// # Errors
    /// Fails on an unparsable provider base URL or when the outbound HTTP
    /// client cannot be built.
    pub fn init(db: DatabaseConnection, cfg: &DoorbotConfig) -> anyhow::Result<Self> {
        info!("Initializing doorbot module");
        debug!(
            delivery_attempt_timeout_ms = cfg.delivery_attempt_timeout_ms,
            fetch_timeout_ms = cfg.fetch_timeout_ms,
            sync_bridges = ?cfg.sync_bridges,
            match_key = ?cfg.match_key,
            "Loaded doorbot config"
        );

        validate_base_urls(&cfg.providers)?;

        // one pool for every provider; per-call deadlines are enforced by the services
        let client = build_client(cfg.fetch_timeout().max(cfg.delivery_attempt_timeout()))?;

        let notifiers: Arc<dyn NotifierFactory> = Arc::new(HttpNotifierFactory::new(
            client.clone(),
            cfg.providers.clone(),
        ));
        let bridges: Arc<dyn Bridges> =
            Arc::new(HttpBridges::new(client, cfg.providers.clone()));

        let service = Service::new(OrmRepositories::default(), db, notifiers, bridges, cfg);
        Ok(Self::from_service(Arc::new(service)))
    }

    #[must_use]
    pub fn from_service(service: Arc<ConcreteService>) -> Self {
        Self { service }
    }

    /// # Errors
    /// Propagates migration failures.
    pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running doorbot database migrations");
        crate::infra::storage::migrations::Migrator::up(db, None).await?;
        info!("Doorbot database migrations completed successfully");
        Ok(())
    }

    #[must_use]
    pub fn service(&self) -> &Arc<ConcreteService> {
        &self.service
    }

    #[must_use]
    pub fn router(&self) -> axum::Router {
        info!("Registering doorbot REST routes");
        routes::router(Arc::clone(&self.service))
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn DoorbotClientV1> {
        Arc::new(DoorbotLocalClient::new(Arc::clone(&self.service)))
    }

    /// Wait for in-flight deliveries before the process exits.
    pub async fn shutdown(&self) {
        self.service.shutdown().await;
        info!("Doorbot module stopped");
    }
}

fn validate_base_urls(p: &ProvidersConfig) -> anyhow::Result<()> {
    let bases = [
        ("hipchat", &p.hipchat.base_url),
        ("slack", &p.slack.base_url),
        ("nexmo", &p.nexmo.base_url),
        ("twilio", &p.twilio.base_url),
        ("mailgun", &p.mailgun.base_url),
        ("postmark", &p.postmark.base_url),
        ("google_directory", &p.google_directory.base_url),
    ];
    for (name, base) in bases {
        Url::parse(base).map_err(|e| anyhow::anyhow!("invalid {name} base_url '{base}': {e}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn default_base_urls_are_valid() {
        assert!(validate_base_urls(&ProvidersConfig::default()).is_ok());
    }

    #[test]
    fn broken_base_url_is_reported() {
        let mut providers = ProvidersConfig::default();
        "not a url".clone_into(&mut providers.postmark.base_url);
        let err = validate_base_urls(&providers).unwrap_err();
        assert!(err.to_string().contains("postmark"));
    }
}
