//! Turntable motor
//!
//! A DC gear motor behind a driver with an enable line and a PWM speed
//! input. Washing spins the basket fast; curing and drying turn the
//! platform slowly.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::error::DriverError;
use crate::traits::Turntable;

/// Speed profiles (percent duty)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorSpeeds {
    pub washing: u8,
    pub curing: u8,
}

impl Default for MotorSpeeds {
    fn default() -> Self {
        Self {
            washing: 80,
            curing: 25,
        }
    }
}

/// Turntable motor driver
pub struct SpinMotor<EN, P> {
    enable: EN,
    pwm: P,
    speeds: MotorSpeeds,
    /// Duty selected by the last speed configuration
    duty_percent: u8,
    running: bool,
}

impl<EN: OutputPin, P: SetDutyCycle> SpinMotor<EN, P> {
    /// Create a stopped motor using the washing speed
    pub fn new(enable: EN, pwm: P, speeds: MotorSpeeds) -> Result<Self, DriverError> {
        let mut motor = Self {
            enable,
            pwm,
            speeds,
            duty_percent: speeds.washing,
            running: false,
        };
        motor.stop()?;
        Ok(motor)
    }

    pub fn speeds(&self) -> MotorSpeeds {
        self.speeds
    }

    pub fn duty_percent(&self) -> u8 {
        self.duty_percent
    }

    fn apply_duty(&mut self) -> Result<(), DriverError> {
        self.pwm
            .set_duty_cycle_percent(self.duty_percent.min(100))
            .map_err(|_| DriverError::Pwm)
    }
}

impl<EN: OutputPin, P: SetDutyCycle> Turntable for SpinMotor<EN, P> {
    fn select_speed(&mut self, curing_mode: bool) -> Result<(), DriverError> {
        self.duty_percent = if curing_mode {
            self.speeds.curing
        } else {
            self.speeds.washing
        };
        if self.running {
            self.apply_duty()?;
        }
        Ok(())
    }

    fn run(&mut self) -> Result<(), DriverError> {
        self.apply_duty()?;
        self.enable.set_high().map_err(|_| DriverError::Pin)?;
        self.running = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), DriverError> {
        self.running = false;
        self.enable.set_low().map_err(|_| DriverError::Pin)?;
        self.pwm.set_duty_cycle_fully_off().map_err(|_| DriverError::Pwm)
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
