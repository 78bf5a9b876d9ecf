//! Component traits
//!
//! The seams between [`crate::board::Board`] and the individual drivers,
//! so a board can mix the drivers in this crate with its own.

use lumen_core::config::FanDuties;
use lumen_core::time::Instant;

use crate::error::DriverError;
use crate::heater::HeaterFault;

/// On/off output (LED bank, heater element, buzzer)
pub trait Output {
    /// Switch the output
    fn set_on(&mut self, on: bool) -> Result<(), DriverError>;

    /// Logical output state
    fn is_on(&self) -> bool;
}

/// Rotating platform
pub trait Turntable {
    /// Select the slow curing speed or the washing speed
    fn select_speed(&mut self, curing_mode: bool) -> Result<(), DriverError>;

    fn run(&mut self) -> Result<(), DriverError>;

    fn stop(&mut self) -> Result<(), DriverError>;

    fn is_running(&self) -> bool;
}

/// Set of chamber fans
pub trait FanBank {
    fn set_duties(&mut self, duties: &FanDuties) -> Result<(), DriverError>;
}

/// Closed-loop chamber heater
pub trait Regulator {
    /// Regulation target (°C)
    fn set_target(&mut self, celsius: u8);

    /// Enable or disable regulation; disabling forces the element off
    fn enable(&mut self, enabled: bool);

    /// Sample the sensor and drive the element
    fn update(&mut self, now: Instant);

    /// Latched fault, if any
    fn fault(&self) -> Option<HeaterFault>;

    /// Last valid reading (°C × 10)
    fn temperature_x10(&self) -> Option<i16>;
}
