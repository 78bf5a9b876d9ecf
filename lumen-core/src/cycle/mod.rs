//! Cycle driver and phase graph

pub mod driver;
pub mod graph;

pub use driver::{CycleDriver, PressAction};
pub use graph::{PhaseGraph, MAX_PHASES};

use crate::config::Program;
use crate::state::PhaseId;
use crate::timer::TimerError;

/// Errors raised while wiring or driving the phase graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleError {
    /// Phase id not present in the graph
    UnknownPhase(PhaseId),
    /// Continuation target set on a phase without one
    NotTimed(PhaseId),
    /// Program has no entry phase
    NoEntry(Program),
    /// Graph capacity exhausted
    GraphFull,
    /// Shared timer ownership violated
    Timer(TimerError),
}

impl From<TimerError> for CycleError {
    fn from(e: TimerError) -> Self {
        CycleError::Timer(e)
    }
}
