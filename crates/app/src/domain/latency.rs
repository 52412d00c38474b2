//! Simulated network latency for the in-memory repositories.

use std::time::Duration;

use tokio::time::sleep;

pub(crate) async fn simulate(latency: Duration) {
    if !latency.is_zero() {
        sleep(latency).await;
    }
}
