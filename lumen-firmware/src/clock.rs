//! Monotonic time from the Embassy time driver

use lumen_core::time::Instant;
use lumen_core::traits::Clock;

/// Millisecond clock; wraps every ~49.7 days like [`Instant`]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::from_millis(embassy_time::Instant::now().as_millis() as u32)
    }
}
