//! Dependencies handed to the active phase

use crate::config::CycleConfig;
use crate::state::PhaseId;
use crate::timer::{CycleTimer, TimerLease};
use crate::traits::Hardware;

/// Mutable access for lifecycle hooks and mutators
pub struct PhaseContext<'a, H: Hardware> {
    pub hw: &'a mut H,
    /// Shared timer, leased to the active phase
    pub timer: TimerLease<'a>,
    pub config: &'a CycleConfig,
    /// Phase entered on a heater fault
    pub error_phase: PhaseId,
}

/// Read-only access for accessors
pub struct PhaseView<'a, H: Hardware> {
    pub hw: &'a H,
    pub timer: &'a CycleTimer,
    pub config: &'a CycleConfig,
}

impl<H: Hardware> PhaseContext<'_, H> {
    /// Reborrow as a read-only view
    pub fn view(&self) -> PhaseView<'_, H> {
        PhaseView {
            hw: &*self.hw,
            timer: &self.timer,
            config: self.config,
        }
    }
}
