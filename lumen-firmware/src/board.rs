//! Reference board wiring
//!
//! | Function       | GPIO | Peripheral     |
//! |----------------|------|----------------|
//! | Turntable PWM  | 2    | PWM slice 1 A  |
//! | Fan 1 / Fan 2  | 4/5  | PWM slice 2 AB |
//! | Cover switch   | 14   | input, pull-up |
//! | Tank switch    | 15   | input, pull-up |
//! | Button         | 16   | input, pull-up |
//! | Motor enable   | 18   | output         |
//! | UV LEDs        | 20   | output         |
//! | Heater SSR     | 21   | output         |
//! | Buzzer         | 22   | output         |
//! | NTC thermistor | 26   | ADC 0          |

use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Input, Output};
use embassy_rp::pwm::PwmOutput;

use lumen_core::input::RawInputs;
use lumen_drivers::board::Board;
use lumen_drivers::fan::FanArray;
use lumen_drivers::heater::BangBangHeater;
use lumen_drivers::motor::SpinMotor;
use lumen_drivers::output::Switch;
use lumen_drivers::sensor::{AdcReader, NtcThermistor};

use crate::clock::EmbassyClock;

/// Thermistor divider pull-up (ohms)
pub const NTC_PULLUP_OHMS: u32 = 4_700;

pub type StationHeater =
    BangBangHeater<NtcThermistor<ThermistorAdc>, Switch<Output<'static>>>;

pub type StationBoard = Board<
    EmbassyClock,
    SpinMotor<Output<'static>, PwmOutput<'static>>,
    FanArray<PwmOutput<'static>>,
    Switch<Output<'static>>,
    StationHeater,
    Switch<Output<'static>>,
>;

/// Thermistor ADC channel
pub struct ThermistorAdc {
    adc: Adc<'static, adc::Blocking>,
    channel: Channel<'static>,
}

impl ThermistorAdc {
    pub fn new(adc: Adc<'static, adc::Blocking>, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AdcReader for ThermistorAdc {
    type Error = adc::Error;

    fn read(&mut self) -> Result<u16, adc::Error> {
        self.adc.blocking_read(&mut self.channel)
    }
}

/// Switch inputs, all active low
pub struct Inputs {
    pub cover: Input<'static>,
    pub tank: Input<'static>,
    pub button: Input<'static>,
}

impl Inputs {
    pub fn read(&self) -> RawInputs {
        RawInputs {
            cover_closed: self.cover.is_low(),
            tank_inserted: self.tank.is_low(),
            button_pressed: self.button.is_low(),
        }
    }
}
