//! Wingfold - Power-Folding Mirror Controller Firmware
//!
//! Main firmware binary for RP2040-based mirror controllers. The board is
//! powered up by a lock pulse or ACC, latches its own supply, folds or
//! unfolds the mirrors as the inputs dictate and finally cuts its own
//! power once the car has been quiet for the configured timeout.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use wingfold_core::config::ControllerConfig;
use wingfold_core::input::InputSnapshot;
use wingfold_core::sequence::SequenceCatalog;
use wingfold_core::Controller;

use crate::board::{Board, BoardPins};

mod board;
mod config;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // Latch power before the wake-up pulse ends
    let power_hold = Output::new(p.PIN_2, Level::High);

    info!("Wingfold firmware starting...");

    let config = config::load();
    info!(
        "Config: timeout={}ms run={}ms chime_on_acc={} output={:?} poll={}ms",
        config.power_timeout_ms,
        config.mirror_run_ms,
        config.chime_on_acc,
        config.chime_output,
        config.poll_interval_ms
    );

    let catalog = match SequenceCatalog::new(&config) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to build sequences ({:?}), using defaults", e);
            match SequenceCatalog::new(&ControllerConfig::default()) {
                Ok(catalog) => catalog,
                Err(e) => defmt::panic!("Default sequences do not fit: {:?}", e),
            }
        }
    };

    let pins = BoardPins {
        lock: p.PIN_3,
        unlock: p.PIN_4,
        acc: p.PIN_5,
        switch: p.PIN_6,
        motor_fold: p.PIN_7,
        motor_unfold: p.PIN_8,
        motor_enable: p.PIN_9,
        speaker: p.PIN_10,
        motor_pwm: p.PWM_SLICE4,
        speaker_pwm: p.PWM_SLICE5,
    };
    let mut board = Board::new(power_hold, pins, config.switch_settle_us);

    let mut controller = Controller::new(&config, &catalog);
    controller.boot(&mut board);
    info!("Board initialized, power latched");

    let mut ticker = Ticker::every(Duration::from_millis(config.poll_interval_ms as u64));
    let mut last_inputs = InputSnapshot::default();

    loop {
        if let Some(id) = controller.poll(&mut board) {
            info!("Starting sequence {:?}", id);
        }
        board.service_tones();

        let inputs = controller.last_inputs();
        if inputs != last_inputs {
            debug!(
                "Inputs: lock={:?} acc={} switch={:?}",
                inputs.lock, inputs.acc, inputs.switch
            );
            last_inputs = inputs;
        }

        ticker.next().await;
    }
}
