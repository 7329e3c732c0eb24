use tokio::time::{interval, Duration};

use crate::limiter::rate_limiter::RateLimiterStore;

/// Periodic garbage collection of expired rate-limit windows. Spawned once at
/// startup and aborted on shutdown; correctness never depends on it running.
pub async fn start_sweep_task(limiter: RateLimiterStore, every_secs: u64) {
    let mut interval = interval(Duration::from_secs(every_secs));

    loop {
        interval.tick().await;

        let removed = limiter.sweep();
        if removed > 0 {
            tracing::debug!("Swept {} expired rate-limit entries", removed);
        }
    }
}
