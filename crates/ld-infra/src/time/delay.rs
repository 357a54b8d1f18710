use ld_core::ports::DelayPort;
use tokio::time::{sleep, Duration};

/// Tokio-backed delay scheduler. Under `tokio::time::pause` tests drive it
/// with virtual time instead of sleeping.
pub struct TokioDelay;

#[async_trait::async_trait]
impl DelayPort for TokioDelay {
    async fn delay_ms(&self, ms: u64) {
        sleep(Duration::from_millis(ms)).await;
    }
}
