//! Configuration loading
//!
//! The factory default comes from machine.toml, compiled in by build.rs.
//! A record in the last flash sector overrides it when present and valid.

use defmt::*;
use embassy_rp::flash::{Blocking, Flash, ERASE_SIZE};
use embassy_rp::peripherals::FLASH;

use lumen_core::config::{BeepMode, CycleConfig, FanDuties, Program, MAX_STORED_SIZE};

include!(concat!(env!("OUT_DIR"), "/machine_config.rs"));

/// 2MB flash on the reference board
pub const FLASH_SIZE: usize = 2 * 1024 * 1024;

/// Configuration record lives in the last erase sector
pub const CONFIG_OFFSET: u32 = (FLASH_SIZE - ERASE_SIZE) as u32;

pub type BoardFlash = Flash<'static, FLASH, Blocking, FLASH_SIZE>;

/// Load the stored configuration, falling back to machine.toml
pub fn load(flash: &mut BoardFlash) -> CycleConfig {
    let mut buf = [0u8; MAX_STORED_SIZE];
    if let Err(e) = flash.blocking_read(CONFIG_OFFSET, &mut buf) {
        warn!("Config flash read failed: {}", Debug2Format(&e));
        return machine_config();
    }
    match CycleConfig::load(&buf) {
        Ok(config) => {
            info!("Using stored configuration");
            config
        }
        Err(e) => {
            info!("No stored configuration ({}), using machine.toml", e);
            machine_config()
        }
    }
}
