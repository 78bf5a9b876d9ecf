//! Persisted configuration record
//!
//! The configuration is stored as a postcard-encoded record behind a
//! magic number and format version, so blank or stale flash is rejected
//! instead of being misread.

use serde::{Deserialize, Serialize};

use super::types::CycleConfig;

/// Magic number to identify a stored configuration ("LUMN")
pub const CONFIG_MAGIC: u32 = 0x4C55_4D4E;

/// Current stored format version
pub const CONFIG_VERSION: u8 = 1;

/// Upper bound on the encoded record size (bytes)
pub const MAX_STORED_SIZE: usize = 48;

/// Errors that can occur loading or storing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Output buffer cannot hold the record
    BufferTooSmall,
    /// Bytes do not decode as a configuration record
    Corrupt,
    /// Record decoded but carries the wrong magic number
    BadMagic,
    /// Record was written by an incompatible firmware
    UnsupportedVersion(u8),
}

#[derive(Serialize)]
struct StoredRef<'a> {
    magic: u32,
    version: u8,
    config: &'a CycleConfig,
}

#[derive(Deserialize)]
struct Stored {
    magic: u32,
    version: u8,
    config: CycleConfig,
}

impl CycleConfig {
    /// Encode into `buf`, returning the number of bytes written
    pub fn store(&self, buf: &mut [u8]) -> Result<usize, ConfigError> {
        let record = StoredRef {
            magic: CONFIG_MAGIC,
            version: CONFIG_VERSION,
            config: self,
        };
        let used = postcard::to_slice(&record, buf).map_err(|_| ConfigError::BufferTooSmall)?;
        Ok(used.len())
    }

    /// Decode a stored record
    pub fn load(bytes: &[u8]) -> Result<Self, ConfigError> {
        let record: Stored = postcard::from_bytes(bytes).map_err(|_| ConfigError::Corrupt)?;

        if record.magic != CONFIG_MAGIC {
            return Err(ConfigError::BadMagic);
        }
        if record.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion(record.version));
        }

        Ok(record.config)
    }

    /// Decode a stored record, falling back to factory defaults
    pub fn load_or_default(bytes: &[u8]) -> Self {
        match Self::load(bytes) {
            Ok(config) => {
                info!("Loaded stored configuration");
                config
            }
            Err(e) => {
                warn!("Stored configuration rejected: {:?}, using defaults", e);
                Self::default()
            }
        }
    }
}
