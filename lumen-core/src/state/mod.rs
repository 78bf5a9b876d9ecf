//! Phase state machine
//!
//! The operating cycle is a fixed graph of phases. Each phase is one of
//! a closed set of variants ([`PhaseKind`]) sharing the lifecycle
//! `start` / `tick` / `process_events` / `stop`. Only the active phase
//! is ever called, and it receives the hardware, the configuration and
//! a lease on the shared timer through a [`PhaseContext`].

pub mod confirm;
pub mod context;
pub mod events;
pub mod phase;
pub mod timed;

pub use confirm::{BeepSchedule, ConfirmPhase, BEEP_INTERVAL_MS};
pub use context::{PhaseContext, PhaseView};
pub use events::EventBatch;
pub use phase::{Phase, PhaseKind, PAUSED_LABEL};
pub use timed::{
    CuringPhase, HeatedPhase, TimeAdjust, TimerPhase, WarmupPhase, LED_DELAY_MS,
    MAX_ADJUSTED_TIME_S, TIME_STEP_S,
};

/// Index of a phase in the phase graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseId(u8);

impl PhaseId {
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}
