use std::time::{SystemTime, UNIX_EPOCH};

use ld_core::ports::ClockPort;

/// Wall clock for the account-age eligibility rule. Tests substitute a
/// fixed clock instead of this.
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("System time before UNIX EPOCH")
            .as_millis() as i64
    }
}
