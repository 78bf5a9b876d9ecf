//! Configuration types
//!
//! Board-agnostic cycle configuration, stored as postcard binary data.

#[cfg(feature = "serde")]
pub mod storage;
pub mod types;

#[cfg(feature = "serde")]
pub use storage::{ConfigError, CONFIG_MAGIC, CONFIG_VERSION, MAX_STORED_SIZE};
pub use types::*;
