//! Non-blocking sequence interpreter
//!
//! Plays one catalog sequence at a time. `tick()` runs every step whose
//! deadline has passed and returns as soon as the next step lies in the
//! future, so the polling loop is never held up by a wait.

use crate::time::Timestamp;
use crate::tone::OutputId;
use crate::traits::{HardwareIo, MotorCommand};

use super::catalog::{SequenceCatalog, SequenceId};
use super::step::SequenceStep;

/// Sequence interpreter state
#[derive(Debug, Clone)]
pub struct Sequencer<'a> {
    catalog: &'a SequenceCatalog,
    /// Sequence being played, `None` when idle
    current: Option<SequenceId>,
    /// Index of the next step to execute
    cursor: usize,
    /// When the next step is due
    next_deadline: Timestamp,
    /// Output selected for `ToneNote` steps
    tone_output: OutputId,
}

impl<'a> Sequencer<'a> {
    /// Create an idle sequencer
    pub fn new(catalog: &'a SequenceCatalog) -> Self {
        Self {
            catalog,
            current: None,
            cursor: 0,
            next_deadline: Timestamp::ZERO,
            tone_output: OutputId::Speaker,
        }
    }

    /// Check if no sequence is playing
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Sequence being played
    pub fn current(&self) -> Option<SequenceId> {
        self.current
    }

    /// Deadline of the next step
    pub fn next_deadline(&self) -> Timestamp {
        self.next_deadline
    }

    /// Output selected for tones
    pub fn tone_output(&self) -> OutputId {
        self.tone_output
    }

    /// Start a sequence, preempting whatever is playing
    ///
    /// The first step becomes due immediately.
    pub fn start(&mut self, id: SequenceId, now: Timestamp) {
        self.current = Some(id);
        self.cursor = 0;
        self.next_deadline = now;
    }

    /// Execute all steps due at `now`
    ///
    /// Calling this again with the same `now` has no further effect.
    pub fn tick<H: HardwareIo>(&mut self, now: Timestamp, hw: &mut H) {
        while let Some(id) = self.current {
            if !now.has_reached(self.next_deadline) {
                break;
            }

            let sequence = self.catalog.get(id);
            // Running off the end is treated as End
            let step = sequence.step(self.cursor).unwrap_or(SequenceStep::End);
            self.cursor += 1;
            self.execute(step, hw);

            if self.current.is_none() {
                break;
            }

            // Fold directly following waits into the deadline
            while let Some(SequenceStep::Wait(ms)) = sequence.step(self.cursor) {
                self.next_deadline = self.next_deadline.wrapping_add_ms(ms);
                self.cursor += 1;
            }
        }
    }

    fn execute<H: HardwareIo>(&mut self, step: SequenceStep, hw: &mut H) {
        match step {
            SequenceStep::Wait(ms) => {
                self.next_deadline = self.next_deadline.wrapping_add_ms(ms);
            }
            SequenceStep::MotorFold => hw.set_motor(MotorCommand::Fold),
            SequenceStep::MotorUnfold => hw.set_motor(MotorCommand::Unfold),
            SequenceStep::MotorStop => hw.set_motor(MotorCommand::Stopped),
            SequenceStep::ToneNote(note, duration_ms) => {
                let frequency_hz = note.frequency_on(self.tone_output);
                hw.play_tone(self.tone_output, frequency_hz, duration_ms);
                self.next_deadline = self.next_deadline.wrapping_add_ms(duration_ms);
            }
            SequenceStep::SetToneOutput(output) => self.tone_output = output,
            SequenceStep::PowerOff => {
                hw.set_motor(MotorCommand::Stopped);
                hw.set_power_hold(false);
            }
            SequenceStep::End => self.current = None,
        }
    }
}
