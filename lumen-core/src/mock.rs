//! Recording hardware for unit tests

use std::vec::Vec;

use crate::config::FanDuties;
use crate::time::Instant;
use crate::traits::Hardware;

/// Actuator call record
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum HwCall {
    Fans(FanDuties),
    MotorOn,
    MotorOff,
    Speed { curing_mode: bool },
    LedOn,
    LedOff,
    HeaterOn,
    HeaterOff,
    Target(u8),
    Alert,
}

/// Mock appliance with directly settable sensor readings
#[derive(Debug)]
pub(crate) struct MockHardware {
    pub calls: Vec<HwCall>,
    pub motor_on: bool,
    pub led_on: bool,
    pub heater_on: bool,
    pub heater_fault: bool,
    pub tank: bool,
    pub cover: bool,
    pub temp_c: f32,
    pub now_ms: u32,
}

impl MockHardware {
    /// Closed cover, tank mounted, room temperature
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            motor_on: false,
            led_on: false,
            heater_on: false,
            heater_fault: false,
            tank: true,
            cover: true,
            temp_c: 22.0,
            now_ms: 0,
        }
    }

    /// Closed cover, no tank (ready to cure)
    pub fn curing_ready() -> Self {
        Self {
            tank: false,
            ..Self::new()
        }
    }

    pub fn advance(&mut self, ms: u32) {
        self.now_ms = self.now_ms.wrapping_add(ms);
    }

    pub fn alerts(&self) -> usize {
        self.calls.iter().filter(|c| **c == HwCall::Alert).count()
    }

    pub fn count(&self, call: HwCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }
}

impl Hardware for MockHardware {
    fn set_fan_duties(&mut self, duties: &FanDuties) {
        self.calls.push(HwCall::Fans(*duties));
    }

    fn run_motor(&mut self) {
        self.motor_on = true;
        self.calls.push(HwCall::MotorOn);
    }

    fn stop_motor(&mut self) {
        self.motor_on = false;
        self.calls.push(HwCall::MotorOff);
    }

    fn apply_speed_configuration(&mut self, curing_mode: bool) {
        self.calls.push(HwCall::Speed { curing_mode });
    }

    fn run_led(&mut self) {
        self.led_on = true;
        self.calls.push(HwCall::LedOn);
    }

    fn stop_led(&mut self) {
        self.led_on = false;
        self.calls.push(HwCall::LedOff);
    }

    fn run_heater(&mut self) {
        self.heater_on = true;
        self.calls.push(HwCall::HeaterOn);
    }

    fn stop_heater(&mut self) {
        self.heater_on = false;
        self.calls.push(HwCall::HeaterOff);
    }

    fn set_target_temperature(&mut self, celsius: u8) {
        self.calls.push(HwCall::Target(celsius));
    }

    fn heater_error(&self) -> bool {
        self.heater_fault
    }

    fn tank_inserted(&self) -> bool {
        self.tank
    }

    fn cover_closed(&self) -> bool {
        self.cover
    }

    fn sound_alert(&mut self) {
        self.calls.push(HwCall::Alert);
    }

    fn chamber_temperature(&self) -> f32 {
        self.temp_c
    }

    fn now(&self) -> Instant {
        Instant::from_millis(self.now_ms)
    }
}
