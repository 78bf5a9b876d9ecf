//! Piezo buzzer
//!
//! Alerts are fixed-length pulses. [`Buzzer::beep`] switches the output
//! on and returns immediately; [`Buzzer::update`] ends the pulse.

use lumen_core::time::Instant;

use crate::error::DriverError;
use crate::traits::Output;

/// Default alert length (ms)
pub const BEEP_PULSE_MS: u32 = 150;

/// Non-blocking buzzer on a switched output
pub struct Buzzer<O> {
    output: O,
    pulse_ms: u32,
    /// Set while a pulse is sounding
    started: Option<Instant>,
}

impl<O: Output> Buzzer<O> {
    pub fn new(output: O) -> Self {
        Self::with_pulse(output, BEEP_PULSE_MS)
    }

    pub fn with_pulse(output: O, pulse_ms: u32) -> Self {
        Self {
            output,
            pulse_ms,
            started: None,
        }
    }

    /// Start a pulse; restarts one already sounding
    pub fn beep(&mut self, now: Instant) -> Result<(), DriverError> {
        self.output.set_on(true)?;
        self.started = Some(now);
        Ok(())
    }

    /// End the pulse once it has sounded long enough
    pub fn update(&mut self, now: Instant) -> Result<(), DriverError> {
        match self.started {
            Some(started) if now.millis_since(started) >= self.pulse_ms => {
                self.started = None;
                self.output.set_on(false)
            }
            _ => Ok(()),
        }
    }

    pub fn is_sounding(&self) -> bool {
        self.started.is_some()
    }
}
