//! Cover and tank interlock rules
//!
//! Washing needs the tank mounted. Curing and heated drying need the
//! tank removed and the cover closed. A violated rule never forces a
//! transition: the active phase pauses itself and reports a
//! [`PauseReason`], and resuming is refused while any reason holds.

use crate::traits::Hardware;

/// Sensor-derived cause preventing a phase from running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PauseReason {
    /// Washing without a tank
    InsertTank,
    /// Curing or drying with the tank still mounted
    RemoveTank,
    /// Curing or drying with the cover open
    CloseCover,
}

impl PauseReason {
    /// Short human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            PauseReason::InsertTank => "Insert tank",
            PauseReason::RemoveTank => "Remove tank",
            PauseReason::CloseCover => "Close cover",
        }
    }
}

/// Interlock policy of a timed phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Interlock {
    /// Tank must be inserted, cover state ignored
    TankRequired,
    /// Tank must be absent and the cover closed
    ChamberSealed,
}

/// Sensor edge observed during a poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorEdge {
    CoverOpened,
    CoverClosed,
    TankInserted,
    TankRemoved,
}

impl Interlock {
    /// Evaluate the rule against live sensor state
    ///
    /// When several conditions hold the tank reason is reported first.
    pub fn pause_reason<H: Hardware + ?Sized>(self, hw: &H) -> Option<PauseReason> {
        match self {
            Interlock::TankRequired => {
                if !hw.tank_inserted() {
                    Some(PauseReason::InsertTank)
                } else {
                    None
                }
            }
            Interlock::ChamberSealed => {
                if hw.tank_inserted() {
                    Some(PauseReason::RemoveTank)
                } else if !hw.cover_closed() {
                    Some(PauseReason::CloseCover)
                } else {
                    None
                }
            }
        }
    }

    /// Whether an edge must pause a running phase
    pub fn trips_on(self, edge: SensorEdge) -> bool {
        match self {
            Interlock::TankRequired => edge == SensorEdge::TankRemoved,
            Interlock::ChamberSealed => {
                matches!(edge, SensorEdge::TankInserted | SensorEdge::CoverOpened)
            }
        }
    }
}
