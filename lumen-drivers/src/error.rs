//! Driver errors

/// Failure reported by a pin or PWM channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// Digital output could not be driven
    Pin,
    /// PWM duty could not be applied
    Pwm,
}
