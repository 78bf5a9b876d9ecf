//! Bang-bang chamber heater
//!
//! On/off regulation with hysteresis. Any fault latches: the element is
//! forced off and stays off until [`BangBangHeater::clear_fault`].

use lumen_core::time::Instant;

use crate::error::DriverError;
use crate::sensor::{SensorError, TemperatureSensor};
use crate::traits::{Output, Regulator};

/// Latched heater fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeaterFault {
    /// Sensor kept failing
    Sensor(SensorError),
    /// Chamber above the absolute limit
    OverTemperature,
    /// Element output could not be driven
    Output(DriverError),
}

/// Regulation limits
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeaterConfig {
    /// Absolute limit (°C × 10); reaching it latches a fault
    pub max_temp_x10: i16,
    /// Band around the target (°C × 10)
    pub hysteresis_x10: i16,
    /// Minimum spacing between sensor reads (ms)
    pub sample_interval_ms: u32,
    /// Consecutive failed reads before a sensor fault latches
    pub sensor_fault_reads: u8,
}

impl Default for HeaterConfig {
    fn default() -> Self {
        Self {
            max_temp_x10: 700,
            hysteresis_x10: 10,
            sample_interval_ms: 250,
            sensor_fault_reads: 3,
        }
    }
}

/// Thermostat driving a switched element
pub struct BangBangHeater<S, O> {
    sensor: S,
    element: O,
    config: HeaterConfig,
    target_x10: i16,
    enabled: bool,
    last_temp_x10: Option<i16>,
    last_sample: Option<Instant>,
    failed_reads: u8,
    fault: Option<HeaterFault>,
}

impl<S: TemperatureSensor, O: Output> BangBangHeater<S, O> {
    pub fn new(sensor: S, element: O, config: HeaterConfig) -> Self {
        Self {
            sensor,
            element,
            config,
            target_x10: 0,
            enabled: false,
            last_temp_x10: None,
            last_sample: None,
            failed_reads: 0,
            fault: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }

    pub fn element(&self) -> &O {
        &self.element
    }

    /// Regulation target (°C × 10) after clamping
    pub fn target_x10(&self) -> i16 {
        self.target_x10
    }

    /// Clear a latched fault; the element stays off until the next update
    pub fn clear_fault(&mut self) {
        if self.fault.take().is_some() {
            info!("Heater fault cleared");
        }
        self.failed_reads = 0;
    }

    fn latch(&mut self, fault: HeaterFault) {
        if self.fault.is_none() {
            warn!("Heater fault: {}", fault);
        }
        self.fault = Some(fault);
        // Best effort; the fault is already latched
        let _ = self.element.set_on(false);
    }

    fn drive(&mut self, on: bool) {
        if self.element.is_on() == on {
            return;
        }
        if let Err(e) = self.element.set_on(on) {
            self.latch(HeaterFault::Output(e));
        }
    }

    fn sample(&mut self) -> Option<i16> {
        match self.sensor.read_celsius_x10() {
            Ok(t) => {
                self.failed_reads = 0;
                self.last_temp_x10 = Some(t);
                Some(t)
            }
            Err(e) => {
                self.failed_reads = self.failed_reads.saturating_add(1);
                debug!("Sensor read failed ({}): {}", self.failed_reads, e);
                if self.failed_reads >= self.config.sensor_fault_reads {
                    self.latch(HeaterFault::Sensor(e));
                }
                None
            }
        }
    }
}

impl<S: TemperatureSensor, O: Output> Regulator for BangBangHeater<S, O> {
    fn set_target(&mut self, celsius: u8) {
        let limit = self.config.max_temp_x10 - self.config.hysteresis_x10;
        self.target_x10 = (i16::from(celsius) * 10).min(limit);
        debug!("Heater target {} (x10)", self.target_x10);
    }

    fn enable(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.drive(false);
        }
    }

    fn update(&mut self, now: Instant) {
        if let Some(last) = self.last_sample {
            if now.millis_since(last) < self.config.sample_interval_ms {
                return;
            }
        }
        self.last_sample = Some(now);

        let Some(temp_x10) = self.sample() else {
            if self.enabled {
                self.drive(false);
            }
            return;
        };

        if temp_x10 >= self.config.max_temp_x10 {
            self.latch(HeaterFault::OverTemperature);
            return;
        }
        if self.fault.is_some() || !self.enabled {
            return;
        }

        let low = self.target_x10 - self.config.hysteresis_x10;
        let high = self.target_x10 + self.config.hysteresis_x10;
        if temp_x10 < low {
            self.drive(true);
        } else if temp_x10 > high {
            self.drive(false);
        }
    }

    fn fault(&self) -> Option<HeaterFault> {
        self.fault
    }

    fn temperature_x10(&self) -> Option<i16> {
        self.last_temp_x10
    }
}
