//! Board-agnostic core logic for the wash & cure station firmware
//!
//! This crate contains all cycle logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware façade trait consumed by every phase
//! - Shared cycle timer with single-holder leasing
//! - Phase state machine (washing, curing, drying, warm-up, confirmation)
//! - Cycle driver that swaps the active phase
//! - Cover/tank interlock rules
//! - Input edge detection for sensors and the control button
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

// Must come first so the logging macros are visible to every module
#[macro_use]
mod fmt;

#[cfg(test)]
mod mock;

pub mod config;
pub mod cycle;
pub mod input;
pub mod safety;
pub mod state;
pub mod time;
pub mod timer;
pub mod traits;
