//! Appliance board
//!
//! Assembles the individual drivers into the [`Hardware`] façade used by
//! the cycle driver. The façade is infallible, so a failed output write
//! is logged and latched here and then reported through
//! [`Hardware::heater_error`], which sends the running cycle to its
//! error phase.

use lumen_core::config::FanDuties;
use lumen_core::input::RawInputs;
use lumen_core::time::Instant;
use lumen_core::traits::{Clock, Hardware};

use crate::buzzer::Buzzer;
use crate::error::DriverError;
use crate::heater::HeaterFault;
use crate::traits::{FanBank, Output, Regulator, Turntable};

/// Any latched board fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardFault {
    Heater(HeaterFault),
    Output(DriverError),
}

/// Wash & cure station hardware
pub struct Board<C, M, F, L, R, Z> {
    clock: C,
    motor: M,
    fans: F,
    led: L,
    heater: R,
    buzzer: Buzzer<Z>,
    cover_closed: bool,
    tank_inserted: bool,
    output_fault: Option<DriverError>,
}

impl<C, M, F, L, R, Z> Board<C, M, F, L, R, Z>
where
    C: Clock,
    M: Turntable,
    F: FanBank,
    L: Output,
    R: Regulator,
    Z: Output,
{
    pub fn new(clock: C, motor: M, fans: F, led: L, heater: R, buzzer: Buzzer<Z>) -> Self {
        Self {
            clock,
            motor,
            fans,
            led,
            heater,
            buzzer,
            cover_closed: false,
            tank_inserted: false,
            output_fault: None,
        }
    }

    /// Latch sensor levels and run the heater and buzzer
    ///
    /// Call once per poll, before the cycle driver.
    pub fn update(&mut self, raw: &RawInputs) {
        let now = self.clock.now();
        self.cover_closed = raw.cover_closed;
        self.tank_inserted = raw.tank_inserted;
        self.heater.update(now);
        let result = self.buzzer.update(now);
        self.check(result);
    }

    /// First latched fault
    pub fn fault(&self) -> Option<BoardFault> {
        self.heater
            .fault()
            .map(BoardFault::Heater)
            .or(self.output_fault.map(BoardFault::Output))
    }

    pub fn motor(&self) -> &M {
        &self.motor
    }

    pub fn fans(&self) -> &F {
        &self.fans
    }

    pub fn led(&self) -> &L {
        &self.led
    }

    pub fn heater(&self) -> &R {
        &self.heater
    }

    pub fn heater_mut(&mut self) -> &mut R {
        &mut self.heater
    }

    pub fn buzzer(&self) -> &Buzzer<Z> {
        &self.buzzer
    }

    fn check(&mut self, result: Result<(), DriverError>) {
        if let Err(e) = result {
            if self.output_fault.is_none() {
                warn!("Output fault: {}", e);
            }
            self.output_fault = Some(e);
        }
    }
}

impl<C, M, F, L, R, Z> Hardware for Board<C, M, F, L, R, Z>
where
    C: Clock,
    M: Turntable,
    F: FanBank,
    L: Output,
    R: Regulator,
    Z: Output,
{
    fn set_fan_duties(&mut self, duties: &FanDuties) {
        let result = self.fans.set_duties(duties);
        self.check(result);
    }

    fn run_motor(&mut self) {
        let result = self.motor.run();
        self.check(result);
    }

    fn stop_motor(&mut self) {
        let result = self.motor.stop();
        self.check(result);
    }

    fn apply_speed_configuration(&mut self, curing_mode: bool) {
        let result = self.motor.select_speed(curing_mode);
        self.check(result);
    }

    fn run_led(&mut self) {
        let result = self.led.set_on(true);
        self.check(result);
    }

    fn stop_led(&mut self) {
        let result = self.led.set_on(false);
        self.check(result);
    }

    fn run_heater(&mut self) {
        self.heater.enable(true);
    }

    fn stop_heater(&mut self) {
        self.heater.enable(false);
    }

    fn set_target_temperature(&mut self, celsius: u8) {
        self.heater.set_target(celsius);
    }

    fn heater_error(&self) -> bool {
        self.fault().is_some()
    }

    fn tank_inserted(&self) -> bool {
        self.tank_inserted
    }

    fn cover_closed(&self) -> bool {
        self.cover_closed
    }

    fn sound_alert(&mut self) {
        let now = self.clock.now();
        let result = self.buzzer.beep(now);
        self.check(result);
    }

    fn chamber_temperature(&self) -> f32 {
        self.heater
            .temperature_x10()
            .map_or(f32::NAN, |t| f32::from(t) / 10.0)
    }

    fn now(&self) -> Instant {
        self.clock.now()
    }
}
