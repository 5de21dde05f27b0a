//! Periodic connectivity probe, the CLI version of the page's 30s interval.

use std::time::Duration;

use authprobe_client::ApiClient;

/// Probe `/health` every `interval` seconds until Ctrl-C.
///
/// Fire-and-forget: each tick logs the connectivity verdict and nothing else
/// depends on it. Missed ticks are skipped rather than bunched.
pub async fn run(client: &ApiClient, interval: u64) {
    tracing::info!(interval, url = client.base_url(), "watching connectivity");

    let mut ticker = tokio::time::interval(Duration::from_secs(interval.max(1)));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("watch interrupted; exiting");
                break;
            }
            _ = ticker.tick() => {
                let outcome = client.health().await;
                if outcome.success {
                    tracing::info!("connected: {}", outcome.message().unwrap_or("<none>"));
                } else if let Some(status) = outcome.status {
                    tracing::warn!(status, "server responded abnormally");
                } else {
                    tracing::warn!("connection failed: {}", outcome.error.as_deref().unwrap_or("<unknown>"));
                }
            }
        }
    }
}
