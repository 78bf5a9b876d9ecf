//! Single-holder access to the cycle timer
//!
//! Exactly one phase drives the timer at a time. A phase acquires the
//! timer when it is activated and releases it when it is deactivated;
//! in between, only that phase can obtain a [`TimerLease`].

use core::ops::{Deref, DerefMut};

use super::counter::CycleTimer;
use crate::state::PhaseId;

/// Errors raised by the holder check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// Another phase still holds the timer
    Busy {
        /// Current holder
        holder: PhaseId,
    },
    /// The requesting phase does not hold the timer
    NotHolder {
        /// Phase that asked for the lease
        requested: PhaseId,
    },
}

/// The cycle timer together with its current holder
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SharedTimer {
    timer: CycleTimer,
    holder: Option<PhaseId>,
}

impl SharedTimer {
    /// Create an unheld, stopped timer
    pub const fn new() -> Self {
        Self {
            timer: CycleTimer::new(),
            holder: None,
        }
    }

    /// Take the timer for `phase`
    ///
    /// Succeeds if the timer is free or already held by `phase`.
    pub fn acquire(&mut self, phase: PhaseId) -> Result<TimerLease<'_>, TimerError> {
        match self.holder {
            Some(holder) if holder != phase => Err(TimerError::Busy { holder }),
            _ => {
                self.holder = Some(phase);
                Ok(TimerLease {
                    timer: &mut self.timer,
                    holder: phase,
                })
            }
        }
    }

    /// Mutable access for the current holder
    pub fn lease(&mut self, phase: PhaseId) -> Result<TimerLease<'_>, TimerError> {
        if self.holder == Some(phase) {
            Ok(TimerLease {
                timer: &mut self.timer,
                holder: phase,
            })
        } else {
            Err(TimerError::NotHolder { requested: phase })
        }
    }

    /// Give the timer back
    pub fn release(&mut self, phase: PhaseId) -> Result<(), TimerError> {
        if self.holder == Some(phase) {
            self.holder = None;
            Ok(())
        } else {
            Err(TimerError::NotHolder { requested: phase })
        }
    }

    /// Phase currently holding the timer
    pub fn holder(&self) -> Option<PhaseId> {
        self.holder
    }

    /// Read-only view, available to anyone
    pub fn view(&self) -> &CycleTimer {
        &self.timer
    }
}

/// Exclusive mutable access to the timer, proven to belong to the holder
#[derive(Debug)]
pub struct TimerLease<'a> {
    timer: &'a mut CycleTimer,
    holder: PhaseId,
}

impl TimerLease<'_> {
    /// Phase this lease was issued to
    pub fn holder(&self) -> PhaseId {
        self.holder
    }
}

impl Deref for TimerLease<'_> {
    type Target = CycleTimer;

    fn deref(&self) -> &CycleTimer {
        self.timer
    }
}

impl DerefMut for TimerLease<'_> {
    fn deref_mut(&mut self) -> &mut CycleTimer {
        self.timer
    }
}
