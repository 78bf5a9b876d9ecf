//! Switched GPIO output
//!
//! Drives a load through a GPIO pin (directly or via SSR/MOSFET), with
//! configurable polarity.

use embedded_hal::digital::OutputPin;

use crate::error::DriverError;
use crate::traits::Output;

/// GPIO-switched load
pub struct Switch<P> {
    pin: P,
    /// If true, load ON = pin LOW
    inverted: bool,
    on: bool,
}

impl<P: OutputPin> Switch<P> {
    /// Create a switch and drive it off
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the load is ON when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Result<Self, DriverError> {
        let mut switch = Self {
            pin,
            inverted,
            on: false,
        };
        switch.set_on(false)?;
        Ok(switch)
    }

    pub fn new_active_high(pin: P) -> Result<Self, DriverError> {
        Self::new(pin, false)
    }

    pub fn new_active_low(pin: P) -> Result<Self, DriverError> {
        Self::new(pin, true)
    }

    /// Release the pin
    pub fn free(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> Output for Switch<P> {
    fn set_on(&mut self, on: bool) -> Result<(), DriverError> {
        let result = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| DriverError::Pin)?;
        self.on = on;
        Ok(())
    }

    fn is_on(&self) -> bool {
        self.on
    }
}


#[cfg(test)]
mod tests {
    use super::mock::{BrokenPin, MockPin};
    use super::*;

    #[test]
    fn test_active_high() {
        let mut led = Switch::new_active_high(MockPin::default()).unwrap();
        assert!(!led.is_on());
        assert!(!led.pin.high);

        led.set_on(true).unwrap();
        assert!(led.is_on());
        assert!(led.pin.high);
    }

    #[test]
    fn test_active_low() {
        let mut heater = Switch::new_active_low(MockPin::default()).unwrap();
        // Off means pin high for active-low
        assert!(heater.pin.high);

        heater.set_on(true).unwrap();
        assert!(heater.is_on());
        assert!(!heater.pin.high);
    }

    #[test]
    fn test_failed_write_reported() {
        assert_eq!(
            Switch::new_active_high(BrokenPin).err(),
            Some(DriverError::Pin)
        );
    }
}
