//! Hardware abstraction traits
//!
//! These traits define the interface between the cycle logic and the
//! board-specific implementations.

pub mod hardware;

pub use hardware::{Clock, Hardware};
