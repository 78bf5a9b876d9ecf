//! Configuration type definitions
//!
//! These types represent the user-editable cycle configuration. Phases
//! never copy values out of it at construction; they hold keys
//! ([`RunTime`], [`FanProfile`], [`TargetTemp`]) that are resolved each
//! time the phase starts, so edits made from the menu apply on the next
//! activation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of chamber fans
pub const FAN_COUNT: usize = 2;

/// Fan duty set, fan index → duty in percent (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FanDuties(pub [u8; FAN_COUNT]);

impl FanDuties {
    /// Same duty on every fan
    pub const fn uniform(percent: u8) -> Self {
        Self([percent; FAN_COUNT])
    }

    /// Duty for a single fan, clamped to 100
    pub fn duty(&self, fan: usize) -> Option<u8> {
        self.0.get(fan).map(|d| (*d).min(100))
    }
}

/// Alert behaviour of confirmation phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BeepMode {
    /// Silent
    Off,
    /// Single beep
    Once,
    /// Beep every second until acknowledged
    #[default]
    Repeat,
}

/// Machine program (entry point into the phase graph)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Program {
    /// Rotate the print in the solvent tank
    Washing,
    /// Heated drying without UV
    Drying,
    /// UV curing
    #[default]
    Curing,
    /// Heated drying followed by UV curing
    DryingCuring,
    /// Warm the resin bottle before printing
    ResinPreheat,
}

impl Program {
    /// Number of programs
    pub const COUNT: usize = 5;

    /// Every program, in menu order
    pub const ALL: [Program; Program::COUNT] = [
        Program::Washing,
        Program::Drying,
        Program::Curing,
        Program::DryingCuring,
        Program::ResinPreheat,
    ];

    /// Dense index (for lookup tables)
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Key selecting a run time from [`CycleConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunTime {
    Washing,
    Drying,
    Curing,
    ResinPreheat,
    /// Upper bound for a warm-up before it gives up waiting
    Warmup,
}

/// Key selecting a fan duty set from [`CycleConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FanProfile {
    Menu,
    Washing,
    Drying,
    Curing,
}

/// Key selecting a target temperature from [`CycleConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TargetTemp {
    /// Chamber temperature for drying and curing
    Chamber,
    /// Resin bottle preheat temperature
    Resin,
}

/// Cycle configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CycleConfig {
    /// Washing duration (minutes)
    pub washing_run_time_min: u8,
    /// Drying duration (minutes)
    pub drying_run_time_min: u8,
    /// Curing duration (minutes)
    pub curing_run_time_min: u8,
    /// Resin preheat duration (minutes)
    pub resin_preheat_run_time_min: u8,
    /// Longest warm-up before continuing anyway (minutes)
    pub warmup_run_time_min: u8,
    /// Chamber target for drying and curing (°C)
    pub target_temp_c: u8,
    /// Resin preheat target (°C)
    pub resin_target_temp_c: u8,
    /// Wait for the chamber to reach target before drying/curing
    pub heat_to_target: bool,
    /// Alert when a program finishes
    pub finish_beep: BeepMode,
    /// Fans while idle and warming up
    pub fans_menu: FanDuties,
    /// Fans while washing
    pub fans_washing: FanDuties,
    /// Fans while drying
    pub fans_drying: FanDuties,
    /// Fans while curing
    pub fans_curing: FanDuties,
    /// Program started from the home screen
    pub program: Program,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            washing_run_time_min: 4,
            drying_run_time_min: 3,
            curing_run_time_min: 3,
            resin_preheat_run_time_min: 3,
            warmup_run_time_min: 10,
            target_temp_c: 35,
            resin_target_temp_c: 30,
            heat_to_target: true,
            finish_beep: BeepMode::Repeat,
            fans_menu: FanDuties::uniform(30),
            fans_washing: FanDuties::uniform(70),
            fans_drying: FanDuties([60, 70]),
            fans_curing: FanDuties::uniform(40),
            program: Program::Curing,
        }
    }
}

impl CycleConfig {
    /// Create the factory default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a run time key to seconds
    pub fn run_time_s(&self, key: RunTime) -> u32 {
        let minutes = match key {
            RunTime::Washing => self.washing_run_time_min,
            RunTime::Drying => self.drying_run_time_min,
            RunTime::Curing => self.curing_run_time_min,
            RunTime::ResinPreheat => self.resin_preheat_run_time_min,
            RunTime::Warmup => self.warmup_run_time_min,
        };
        u32::from(minutes) * 60
    }

    /// Resolve a fan profile key
    pub fn fan_duties(&self, key: FanProfile) -> &FanDuties {
        match key {
            FanProfile::Menu => &self.fans_menu,
            FanProfile::Washing => &self.fans_washing,
            FanProfile::Drying => &self.fans_drying,
            FanProfile::Curing => &self.fans_curing,
        }
    }

    /// Resolve a target temperature key (°C)
    pub fn target_temp_c(&self, key: TargetTemp) -> u8 {
        match key {
            TargetTemp::Chamber => self.target_temp_c,
            TargetTemp::Resin => self.resin_target_temp_c,
        }
    }
}
