//! Monotonic time base
//!
//! All timing in the core is sampled: every poll reads the façade clock
//! and compares against remembered timestamps. The counter is 32-bit
//! milliseconds and wraps after ~49.7 days, so differences must always
//! be taken with [`Instant::millis_since`].

/// Monotonic timestamp in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant(u32);

impl Instant {
    /// Create a timestamp from a raw millisecond counter
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    /// Raw millisecond counter value
    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to `self`
    ///
    /// Correct across counter wraparound as long as the real interval is
    /// shorter than the counter period.
    pub const fn millis_since(self, earlier: Instant) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// Timestamp `ms` milliseconds later (wrapping)
    pub const fn add_millis(self, ms: u32) -> Self {
        Self(self.0.wrapping_add(ms))
    }
}
