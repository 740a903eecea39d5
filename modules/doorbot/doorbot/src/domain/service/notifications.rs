use std::sync::Arc;
use std::time::Duration;

use doorbot_sdk::{Account, ChannelKind, Door, KnockOutcome, Person};
use tokio_util::task::TaskTracker;
use tracing::Instrument;

use crate::domain::policy::eligible_channels;
use crate::domain::ports::{ChannelNotifier, NotifierFactory};

/// Email providers tried, in order, for the account-created message.
const WELCOME_PROVIDERS: [ChannelKind; 2] = [ChannelKind::Postmark, ChannelKind::Mailgun];

/// Decides which channels to try for a knock and runs delivery in the
/// background, stopping at the first channel that succeeds.
pub struct NotificationService {
    factory: Arc<dyn NotifierFactory>,
    attempt_timeout: Duration,
    tracker: TaskTracker,
}

impl NotificationService {
    #[must_use]
    pub fn new(factory: Arc<dyn NotifierFactory>, attempt_timeout: Duration) -> Self {
        Self {
            factory,
            attempt_timeout,
            tracker: TaskTracker::new(),
        }
    }

    /// Build the ordered candidate list for `person`. Channels whose
    /// credentials cannot be resolved are dropped.
    #[must_use]
    pub fn candidates(&self, account: &Account, person: &Person) -> Vec<Arc<dyn ChannelNotifier>> {
        eligible_channels(&account.notifications, person)
            .into_iter()
            .filter_map(|kind| {
                let notifier = self.factory.notifier(kind, account);
                if notifier.is_none() {
                    tracing::debug!(
                        account_id = %account.id,
                        channel = %kind,
                        "channel enabled but credentials are missing"
                    );
                }
                notifier
            })
            .collect()
    }

    /// Dispatch a knock. Returns once the candidate list is known; delivery
    /// runs on a tracked background task.
    #[tracing::instrument(
        skip(self, account, door, person),
        fields(account_id = %account.id, door_id = %door.id, person_id = %person.id)
    )]
    #[must_use]
    pub fn knock_knock(&self, account: &Account, door: &Door, person: &Person) -> KnockOutcome {
        let candidates = self.candidates(account, person);

        if candidates.is_empty() {
            tracing::info!("no channels");
            return KnockOutcome::NoChannel;
        }

        let channels: Vec<ChannelKind> = candidates.iter().map(|c| c.kind()).collect();
        let span = tracing::info_span!(
            "knock_delivery",
            account_id = %account.id,
            door_id = %door.id,
            person_id = %person.id,
        );

        self.tracker.spawn(
            deliver_first_success(candidates, door.clone(), person.clone(), self.attempt_timeout)
                .instrument(span),
        );

        KnockOutcome::Accepted { channels }
    }

    /// Send the welcome email on a background task. Returns `false` when no
    /// email provider is configured.
    #[tracing::instrument(
        skip(self, account, person, password),
        fields(account_id = %account.id, person_id = %person.id)
    )]
    #[must_use]
    pub fn account_created(&self, account: &Account, person: &Person, password: &str) -> bool {
        let Some(notifier) = WELCOME_PROVIDERS
            .into_iter()
            .find_map(|kind| self.factory.notifier(kind, account))
        else {
            tracing::warn!("no email provider configured for account created message");
            return false;
        };

        let person = person.clone();
        let password = password.to_owned();
        let span = tracing::info_span!("account_created_delivery", person_id = %person.id);

        self.tracker.spawn(
            async move {
                let channel = notifier.kind();
                match notifier.account_created(&person, &password).await {
                    Ok(()) => tracing::info!(%channel, "account created message delivered"),
                    Err(e) => {
                        tracing::error!(%channel, error = %e, "account created message failed");
                    }
                }
            }
            .instrument(span),
        );

        true
    }

    /// Wait for every in-flight delivery task to finish.
    pub async fn drain(&self) {
        self.tracker.close();
        self.tracker.wait().await;
        self.tracker.reopen();
    }

    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }
}

/// Try each candidate in order and stop at the first success.
///
/// Returns the channel that delivered, if any.
pub async fn deliver_first_success(
    candidates: Vec<Arc<dyn ChannelNotifier>>,
    door: Door,
    person: Person,
    attempt_timeout: Duration,
) -> Option<ChannelKind> {
    for candidate in &candidates {
        let channel = candidate.kind();
        match tokio::time::timeout(attempt_timeout, candidate.knock_knock(&door, &person)).await {
            Ok(Ok(())) => {
                tracing::info!(%channel, "knock delivered");
                return Some(channel);
            }
            Ok(Err(e)) => {
                tracing::warn!(%channel, error = %e, "delivery attempt failed");
            }
            Err(_) => {
                tracing::warn!(
                    %channel,
                    timeout_ms = u64::try_from(attempt_timeout.as_millis()).unwrap_or(u64::MAX),
                    "delivery attempt timed out"
                );
            }
        }
    }

    tracing::error!(attempts = candidates.len(), "knock was not delivered on any channel");
    None
}
