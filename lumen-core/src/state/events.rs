//! Edge events collected during one poll

use crate::safety::SensorEdge;

/// Edge flags observed since the previous poll
///
/// Any combination of flags may be set. Every flag is dispatched at most
/// once per poll, sensor edges first and button presses last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EventBatch {
    pub cover_opened: bool,
    pub cover_closed: bool,
    pub tank_inserted: bool,
    pub tank_removed: bool,
    pub button_short_press: bool,
    pub button_long_press: bool,
    /// Encoder step, consumed by the menu layer only
    pub control_up: bool,
    /// Encoder step, consumed by the menu layer only
    pub control_down: bool,
}

impl EventBatch {
    /// Batch with no flags set
    pub const fn none() -> Self {
        Self {
            cover_opened: false,
            cover_closed: false,
            tank_inserted: false,
            tank_removed: false,
            button_short_press: false,
            button_long_press: false,
            control_up: false,
            control_down: false,
        }
    }

    /// Batch holding only a short press
    pub const fn short_press() -> Self {
        Self {
            button_short_press: true,
            ..Self::none()
        }
    }

    /// Batch holding only a long press
    pub const fn long_press() -> Self {
        Self {
            button_long_press: true,
            ..Self::none()
        }
    }

    /// Batch holding a single sensor edge
    pub fn edge(edge: SensorEdge) -> Self {
        let mut batch = Self::none();
        match edge {
            SensorEdge::CoverOpened => batch.cover_opened = true,
            SensorEdge::CoverClosed => batch.cover_closed = true,
            SensorEdge::TankInserted => batch.tank_inserted = true,
            SensorEdge::TankRemoved => batch.tank_removed = true,
        }
        batch
    }

    /// Sensor edges in dispatch order
    pub fn sensor_edges(&self) -> impl Iterator<Item = SensorEdge> {
        [
            (self.cover_opened, SensorEdge::CoverOpened),
            (self.cover_closed, SensorEdge::CoverClosed),
            (self.tank_inserted, SensorEdge::TankInserted),
            (self.tank_removed, SensorEdge::TankRemoved),
        ]
        .into_iter()
        .filter_map(|(set, edge)| set.then_some(edge))
    }

    /// Whether any flag relevant to the phases is set
    pub fn is_empty(&self) -> bool {
        !(self.cover_opened
            || self.cover_closed
            || self.tank_inserted
            || self.tank_removed
            || self.button_short_press
            || self.button_long_press)
    }

    /// Merge another batch into this one
    pub fn merge(&mut self, other: &EventBatch) {
        self.cover_opened |= other.cover_opened;
        self.cover_closed |= other.cover_closed;
        self.tank_inserted |= other.tank_inserted;
        self.tank_removed |= other.tank_removed;
        self.button_short_press |= other.button_short_press;
        self.button_long_press |= other.button_long_press;
        self.control_up |= other.control_up;
        self.control_down |= other.control_down;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[test]
    fn test_sensor_edge_order() {
        let batch = EventBatch {
            tank_removed: true,
            cover_opened: true,
            tank_inserted: true,
            cover_closed: true,
            ..EventBatch::none()
        };
        let edges: Vec<_> = batch.sensor_edges().collect();
        assert_eq!(
            edges,
            [
                SensorEdge::CoverOpened,
                SensorEdge::CoverClosed,
                SensorEdge::TankInserted,
                SensorEdge::TankRemoved,
            ]
        );
    }

    #[test]
    fn test_control_steps_do_not_count() {
        let batch = EventBatch {
            control_up: true,
            ..EventBatch::none()
        };
        assert!(batch.is_empty());
        assert!(!EventBatch::short_press().is_empty());
    }

    #[test]
    fn test_merge() {
        let mut batch = EventBatch::edge(SensorEdge::CoverOpened);
        batch.merge(&EventBatch::long_press());
        assert!(batch.cover_opened);
        assert!(batch.button_long_press);
        assert!(!batch.button_short_press);
    }
}
