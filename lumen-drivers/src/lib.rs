//! Hardware driver implementations
//!
//! Concrete building blocks for the [`lumen_core::traits::Hardware`]
//! façade, written against `embedded-hal` 1.0:
//!
//! - Switched outputs (UV LEDs, heater element, buzzer)
//! - Chamber fans (PWM duty)
//! - Turntable motor with washing/curing speed profiles
//! - NTC thermistor and bang-bang heater with fault latch
//! - [`board::Board`], the façade built from the above

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod board;
pub mod buzzer;
pub mod error;
pub mod fan;
pub mod heater;
pub mod motor;
pub mod output;
pub mod sensor;
pub mod traits;

pub use error::DriverError;
