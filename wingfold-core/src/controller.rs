//! Polling-cycle controller
//!
//! Ties input sampling, the decision engine and the sequencer together.
//! The firmware calls [`Controller::boot`] once and [`Controller::poll`]
//! at the configured polling interval.

use crate::config::ControllerConfig;
use crate::decision::DecisionEngine;
use crate::input::{InputSampler, InputSnapshot};
use crate::sequence::{SequenceCatalog, SequenceId, Sequencer};
use crate::traits::{HardwareIo, MotorCommand};

/// Mirror controller
#[derive(Debug, Clone)]
pub struct Controller<'a> {
    sampler: InputSampler,
    engine: DecisionEngine,
    sequencer: Sequencer<'a>,
}

impl<'a> Controller<'a> {
    /// Create a controller playing sequences from `catalog`
    pub fn new(config: &ControllerConfig, catalog: &'a SequenceCatalog) -> Self {
        Self {
            sampler: InputSampler::new(config),
            engine: DecisionEngine::new(config),
            sequencer: Sequencer::new(catalog),
        }
    }

    /// Latch power on and park the motor
    ///
    /// Must run before anything else touches the hardware.
    pub fn boot<H: HardwareIo>(&mut self, hw: &mut H) {
        hw.set_power_hold(true);
        hw.set_motor(MotorCommand::Stopped);
    }

    /// Run one polling cycle
    ///
    /// Returns the sequence started this cycle, if any.
    pub fn poll<H: HardwareIo>(&mut self, hw: &mut H) -> Option<SequenceId> {
        let now = hw.now_ms();
        let inputs = self.sampler.sample(hw);

        let selected = self
            .engine
            .evaluate(now, inputs, self.sequencer.is_idle());
        if let Some(id) = selected {
            self.sequencer.start(id, now);
        }

        self.sequencer.tick(now, hw);
        selected
    }

    /// Inputs as the decision engine last saw them
    pub fn last_inputs(&self) -> InputSnapshot {
        let state = self.engine.state();
        InputSnapshot::new(state.previous_lock, state.previous_acc, state.previous_switch)
    }

    /// Decision engine
    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }

    /// Sequence interpreter
    pub fn sequencer(&self) -> &Sequencer<'a> {
        &self.sequencer
    }
}
