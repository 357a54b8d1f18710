/// Artificial timers (reload delay, survey prompt debounce).
///
/// Injectable so tests drive elapsed time deterministically instead of
/// sleeping.
#[async_trait::async_trait]
pub trait DelayPort: Send + Sync {
    async fn delay_ms(&self, ms: u64);
}
