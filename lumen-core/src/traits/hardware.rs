//! Hardware façade
//!
//! The single capability set the phases use to actuate and sense the
//! machine. Sensing methods take `&self`: implementations sample their
//! inputs once per poll and answer from that snapshot, so every phase
//! hook within one poll sees consistent readings.

use crate::config::FanDuties;
use crate::time::Instant;

/// Actuation and sensing capabilities of the appliance
pub trait Hardware {
    /// Apply a duty to every chamber fan
    fn set_fan_duties(&mut self, duties: &FanDuties);

    /// Start rotating the platform
    fn run_motor(&mut self);

    /// Stop rotating the platform
    fn stop_motor(&mut self);

    /// Select the motor speed profile
    ///
    /// `curing_mode` selects the slow turntable speed used while curing
    /// or drying; otherwise the washing speed is used.
    fn apply_speed_configuration(&mut self, curing_mode: bool);

    /// Switch the UV LEDs on
    fn run_led(&mut self);

    /// Switch the UV LEDs off
    fn stop_led(&mut self);

    /// Enable heater regulation
    fn run_heater(&mut self);

    /// Disable heater regulation (heater output forced off)
    fn stop_heater(&mut self);

    /// Set the heater regulation target (°C)
    fn set_target_temperature(&mut self, celsius: u8);

    /// Heater fault latched (sensor failure, over-temperature, ...)
    fn heater_error(&self) -> bool;

    /// Resin tank is mounted
    fn tank_inserted(&self) -> bool;

    /// Enclosure cover is closed
    fn cover_closed(&self) -> bool;

    /// Sound one audible alert
    fn sound_alert(&mut self);

    /// Chamber temperature (°C)
    fn chamber_temperature(&self) -> f32;

    /// Current monotonic time
    fn now(&self) -> Instant;
}

/// Monotonic clock source
///
/// Implemented by the board support code, typically on top of the
/// executor's time driver.
pub trait Clock {
    /// Current monotonic time
    fn now(&self) -> Instant;
}
