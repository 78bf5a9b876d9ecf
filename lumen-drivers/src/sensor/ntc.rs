//! NTC thermistor on a resistor divider
//!
//! ```text
//! VREF -- pull-up -- ADC -- NTC -- GND
//! ```
//!
//! Resistance is converted with a lookup table and linear
//! interpolation, so no floating point is needed on the hot path.

use super::{AdcReader, SensorError, TemperatureSensor};

/// 100 kΩ / B3950 curve as `(ohms, °C × 10)`, decreasing resistance
pub const NTC_TABLE: &[(u32, i16)] = &[
    (1_053_847, -200),
    (582_457, -100),
    (336_206, 0),
    (201_746, 100),
    (125_353, 200),
    (100_000, 250),
    (80_371, 300),
    (53_015, 400),
    (35_882, 500),
    (24_862, 600),
    (17_598, 700),
    (12_703, 800),
    (9_336, 900),
    (6_975, 1000),
    (5_291, 1100),
    (4_071, 1200),
    (3_173, 1300),
];

/// Counts at either rail treated as a wiring fault
const RAIL_MARGIN: u16 = 8;

/// Thermistor read through an ADC channel
pub struct NtcThermistor<A> {
    adc: A,
    pullup_ohms: u32,
    /// Full-scale count (4096 for 12 bit)
    full_scale: u16,
}

impl<A> NtcThermistor<A> {
    /// Create a sensor behind a 12-bit ADC
    pub fn new(adc: A, pullup_ohms: u32) -> Self {
        Self::with_resolution(adc, pullup_ohms, 12)
    }

    pub fn with_resolution(adc: A, pullup_ohms: u32, bits: u8) -> Self {
        Self {
            adc,
            pullup_ohms,
            full_scale: 1u16 << bits.clamp(8, 15),
        }
    }

    /// Divider resistance for a raw conversion
    pub fn resistance(&self, raw: u16) -> Result<u32, SensorError> {
        if raw >= self.full_scale.saturating_sub(RAIL_MARGIN) {
            return Err(SensorError::OpenCircuit);
        }
        if raw < RAIL_MARGIN {
            return Err(SensorError::ShortCircuit);
        }
        let ohms =
            u64::from(self.pullup_ohms) * u64::from(raw) / u64::from(self.full_scale - raw);
        u32::try_from(ohms).map_err(|_| SensorError::OutOfRange)
    }
}

/// Look up a resistance in [`NTC_TABLE`]
pub fn resistance_to_celsius_x10(ohms: u32) -> Result<i16, SensorError> {
    NTC_TABLE
        .windows(2)
        .find(|pair| ohms <= pair[0].0 && ohms >= pair[1].0)
        .map(|pair| {
            let (r_hi, t_lo) = pair[0];
            let (r_lo, t_hi) = pair[1];
            let span = i64::from(t_hi - t_lo) * i64::from(r_hi - ohms) / i64::from(r_hi - r_lo);
            t_lo + span as i16
        })
        .ok_or(SensorError::OutOfRange)
}

impl<A: AdcReader> TemperatureSensor for NtcThermistor<A> {
    fn read_celsius_x10(&mut self) -> Result<i16, SensorError> {
        let raw = self.adc.read().map_err(|_| SensorError::ConversionError)?;
        resistance_to_celsius_x10(self.resistance(raw)?)
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::super::{SensorError, TemperatureSensor};

    /// Sensor returning a settable reading
    #[derive(Debug)]
    pub struct MockSensor {
        pub reading: Result<i16, SensorError>,
    }

    impl MockSensor {
        pub fn at(celsius_x10: i16) -> Self {
            Self {
                reading: Ok(celsius_x10),
            }
        }
    }

    impl TemperatureSensor for MockSensor {
        fn read_celsius_x10(&mut self) -> Result<i16, SensorError> {
            self.reading
        }
    }
}
