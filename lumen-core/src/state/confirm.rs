//! Confirmation phase
//!
//! Shows a message and sounds the alert until the user acknowledges it
//! with a short press. The phase never requests a transition itself;
//! the cycle driver watches [`ConfirmPhase::is_finished`].

use crate::config::BeepMode;
use crate::time::Instant;
use crate::traits::Hardware;

/// Minimum spacing between two alerts (ms)
pub const BEEP_INTERVAL_MS: u32 = 1000;

/// When the next alert is due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BeepSchedule {
    #[default]
    Disarmed,
    /// On the next tick
    Immediate,
    /// More than [`BEEP_INTERVAL_MS`] after the given alert
    After(Instant),
}

/// Message shown until acknowledged
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfirmPhase {
    message: &'static str,
    /// Fixed alert mode, the configured finish beep when `None`
    beep: Option<BeepMode>,
    /// Mode resolved at start
    mode: BeepMode,
    schedule: BeepSchedule,
    finished: bool,
}

impl ConfirmPhase {
    /// Confirmation using the configured finish beep
    pub const fn new(message: &'static str) -> Self {
        Self {
            message,
            beep: None,
            mode: BeepMode::Off,
            schedule: BeepSchedule::Disarmed,
            finished: false,
        }
    }

    /// Confirmation that always alerts with `mode`
    pub const fn with_beep(message: &'static str, mode: BeepMode) -> Self {
        Self {
            beep: Some(mode),
            ..Self::new(message)
        }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn schedule(&self) -> BeepSchedule {
        self.schedule
    }

    /// Whether the user acknowledged the message
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub(crate) fn start(&mut self, configured: BeepMode) {
        self.mode = self.beep.unwrap_or(configured);
        self.schedule = match self.mode {
            BeepMode::Off => BeepSchedule::Disarmed,
            BeepMode::Once | BeepMode::Repeat => BeepSchedule::Immediate,
        };
        self.finished = false;
    }

    pub(crate) fn stop(&mut self) {
        self.schedule = BeepSchedule::Disarmed;
    }

    pub(crate) fn tick<H: Hardware>(&mut self, hw: &mut H) {
        let now = hw.now();
        let due = match self.schedule {
            BeepSchedule::Disarmed => false,
            BeepSchedule::Immediate => true,
            BeepSchedule::After(last) => now.millis_since(last) > BEEP_INTERVAL_MS,
        };
        if due {
            hw.sound_alert();
            self.schedule = if self.mode == BeepMode::Repeat {
                BeepSchedule::After(now)
            } else {
                BeepSchedule::Disarmed
            };
        }
    }

    pub(crate) fn acknowledge(&mut self) {
        debug!("Confirmed: {}", self.message);
        self.finished = true;
        self.schedule = BeepSchedule::Disarmed;
    }
}
