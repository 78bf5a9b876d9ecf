//! Chamber fans

use embedded_hal::pwm::SetDutyCycle;
use lumen_core::config::{FanDuties, FAN_COUNT};

use crate::error::DriverError;
use crate::traits::FanBank;

/// PWM-driven fan
pub struct Fan<P> {
    pwm: P,
    duty_percent: u8,
}

impl<P: SetDutyCycle> Fan<P> {
    /// Create a fan, initially stopped
    pub fn new(pwm: P) -> Result<Self, DriverError> {
        let mut fan = Self {
            pwm,
            duty_percent: 0,
        };
        fan.set_percent(0)?;
        Ok(fan)
    }

    /// Set the duty in percent (clamped to 100)
    pub fn set_percent(&mut self, percent: u8) -> Result<(), DriverError> {
        let percent = percent.min(100);
        self.pwm
            .set_duty_cycle_percent(percent)
            .map_err(|_| DriverError::Pwm)?;
        self.duty_percent = percent;
        Ok(())
    }

    pub fn percent(&self) -> u8 {
        self.duty_percent
    }
}

/// All chamber fans, indexed like [`FanDuties`]
pub struct FanArray<P> {
    fans: [Fan<P>; FAN_COUNT],
}

impl<P: SetDutyCycle> FanArray<P> {
    pub fn new(fans: [Fan<P>; FAN_COUNT]) -> Self {
        Self { fans }
    }

    pub fn fan(&self, index: usize) -> Option<&Fan<P>> {
        self.fans.get(index)
    }
}

impl<P: SetDutyCycle> FanBank for FanArray<P> {
    fn set_duties(&mut self, duties: &FanDuties) -> Result<(), DriverError> {
        for (index, fan) in self.fans.iter_mut().enumerate() {
            fan.set_percent(duties.duty(index).unwrap_or(0))?;
        }
        Ok(())
    }
}
