//! Chamber temperature sensing

pub mod ntc;

pub use ntc::{NtcThermistor, NTC_TABLE};

/// Sensor read failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor disconnected
    OpenCircuit,
    /// Sensor leads shorted
    ShortCircuit,
    /// Reading outside the calibrated range
    OutOfRange,
    /// ADC conversion failed
    ConversionError,
}

/// Temperature sensor
pub trait TemperatureSensor {
    /// Read temperature in 0.1 °C units
    fn read_celsius_x10(&mut self) -> Result<i16, SensorError>;
}

/// Single ADC channel
pub trait AdcReader {
    type Error;

    /// Raw conversion result, right-aligned
    fn read(&mut self) -> Result<u16, Self::Error>;
}
