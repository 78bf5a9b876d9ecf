//! Lumen - Resin Wash & Cure Station Firmware
//!
//! Main firmware binary for RP2040-based wash & cure stations. A single
//! polling loop samples the inputs, services the heater and buzzer and
//! drives the cycle.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::flash::Flash;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use lumen_core::cycle::{CycleDriver, PhaseGraph, PressAction};
use lumen_core::input::InputSampler;
use lumen_core::traits::Hardware;
use lumen_drivers::board::Board;
use lumen_drivers::buzzer::Buzzer;
use lumen_drivers::fan::{Fan, FanArray};
use lumen_drivers::heater::{BangBangHeater, HeaterConfig};
use lumen_drivers::motor::{MotorSpeeds, SpinMotor};
use lumen_drivers::output::Switch;
use lumen_drivers::sensor::NtcThermistor;

use crate::board::{Inputs, StationBoard, ThermistorAdc, NTC_PULLUP_OHMS};
use crate::clock::EmbassyClock;

mod board;
mod clock;
mod config;

/// Main loop period (ms)
const POLL_INTERVAL_MS: u64 = 10;

/// PWM wrap value: 125 MHz / 5000 = 25 kHz
const PWM_TOP: u16 = 4_999;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Lumen firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let mut flash = Flash::new_blocking(p.FLASH);
    let cycle_config = config::load(&mut flash);
    debug!("Cycle config: {}", cycle_config);

    // Outputs
    let mut pwm_config = PwmConfig::default();
    pwm_config.top = PWM_TOP;

    let (motor_pwm, _) = Pwm::new_output_a(p.PWM_SLICE1, p.PIN_2, pwm_config.clone()).split();
    let motor_pwm = unwrap!(motor_pwm);
    let motor = unwrap!(SpinMotor::new(
        Output::new(p.PIN_18, Level::Low),
        motor_pwm,
        MotorSpeeds {
            washing: config::MOTOR_WASHING_SPEED,
            curing: config::MOTOR_CURING_SPEED,
        },
    ));

    let (fan_a, fan_b) = Pwm::new_output_ab(p.PWM_SLICE2, p.PIN_4, p.PIN_5, pwm_config).split();
    let fans = FanArray::new([
        unwrap!(Fan::new(unwrap!(fan_a))),
        unwrap!(Fan::new(unwrap!(fan_b))),
    ]);

    let led = unwrap!(Switch::new_active_high(Output::new(p.PIN_20, Level::Low)));
    let element = unwrap!(Switch::new_active_high(Output::new(p.PIN_21, Level::Low)));
    let buzzer = unwrap!(Switch::new_active_high(Output::new(p.PIN_22, Level::Low)));
    info!("Outputs initialized");

    // Heater
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let channel = Channel::new_pin(p.PIN_26, Pull::None);
    let ntc = NtcThermistor::new(ThermistorAdc::new(adc, channel), NTC_PULLUP_OHMS);
    let heater_config = HeaterConfig {
        max_temp_x10: i16::from(config::HEATER_MAX_TEMP_C) * 10,
        hysteresis_x10: i16::from(config::HEATER_HYSTERESIS_C) * 10,
        ..HeaterConfig::default()
    };
    let heater = BangBangHeater::new(ntc, element, heater_config);
    info!("ADC and heater initialized");

    let inputs = Inputs {
        cover: Input::new(p.PIN_14, Pull::Up),
        tank: Input::new(p.PIN_15, Pull::Up),
        button: Input::new(p.PIN_16, Pull::Up),
    };

    let mut board: StationBoard =
        Board::new(EmbassyClock, motor, fans, led, heater, Buzzer::new(buzzer));
    // Latch real switch levels before the first phase starts
    board.update(&inputs.read());

    let graph = unwrap!(PhaseGraph::standard());
    let mut driver = unwrap!(CycleDriver::new(board, cycle_config, graph));
    let mut sampler = InputSampler::new();
    info!("Cycle driver ready, {} phases", driver.graph().len());

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
    loop {
        let raw = inputs.read();
        let now = driver.hardware().now();
        let events = sampler.sample(raw, now);
        driver.hardware_mut().update(&raw);

        let entered = match driver.poll(&events) {
            Ok(entered) => entered,
            Err(e) => {
                error!("Cycle poll failed: {}", e);
                None
            }
        };

        // Stands in for the menu: start at home, pause/resume elsewhere
        if events.button_short_press {
            match driver.short_press(entered) {
                Ok(PressAction::Began(id)) => {
                    info!("Program {} started at phase {}", driver.config().program, id)
                }
                Ok(PressAction::PauseContinue) => {
                    info!("Phase {} paused: {}", driver.active(), driver.is_paused())
                }
                Ok(PressAction::Ignored) => {}
                Err(e) => error!("Short press failed: {}", e),
            }
        }

        ticker.next().await;
    }
}
