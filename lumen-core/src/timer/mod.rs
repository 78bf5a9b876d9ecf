//! Shared cycle timer
//!
//! One countdown/count-up clock is reused by every timed phase. The
//! [`SharedTimer`] wrapper records which phase currently holds it and
//! only hands out mutable access to that holder.

pub mod counter;
pub mod shared;

pub use counter::{CountDirection, CycleTimer, TimerStatus};
pub use shared::{SharedTimer, TimerError, TimerLease};
