//! Process signals that stop the server.

use std::future::Future;

use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Cancel `cancel` on Ctrl+C or SIGTERM. The listener runs on its own task.
pub fn cancel_on_shutdown_signal(cancel: CancellationToken) {
    tokio::spawn(cancel_when(next_signal(), cancel));
}

/// Cancel once `signal` resolves, also when the listener could not be
/// installed.
async fn cancel_when<F>(signal: F, cancel: CancellationToken)
where
    F: Future<Output = std::io::Result<&'static str>>,
{
    match signal.await {
        Ok(name) => tracing::info!(signal = name, "shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "signal listener failed, shutting down"),
    }
    cancel.cancel();
}

async fn next_signal() -> std::io::Result<&'static str> {
    #[cfg(unix)]
    {
        let mut term = signal::unix::signal(signal::unix::SignalKind::terminate())?;
        tokio::select! {
            res = signal::ctrl_c() => res.map(|()| "ctrl_c"),
            _ = term.recv() => Ok("sigterm"),
        }
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c().await.map(|()| "ctrl_c")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn received_signal_cancels() {
        let cancel = CancellationToken::new();
        cancel_when(async { Ok("sigterm") }, cancel.clone()).await;
        assert!(cancel.is_cancelled());
    }

    #[tokio::test]
    async fn listener_failure_cancels() {
        let cancel = CancellationToken::new();
        cancel_when(
            async { Err(std::io::Error::other("no signal driver")) },
            cancel.clone(),
        )
        .await;
        assert!(cancel.is_cancelled());
    }
}
