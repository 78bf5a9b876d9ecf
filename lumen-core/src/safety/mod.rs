//! Safety interlocks

pub mod interlock;

pub use interlock::{Interlock, PauseReason, SensorEdge};
