//! Sequence instructions

use heapless::Vec;

use crate::tone::{NoteId, OutputId};

/// Maximum steps per sequence, including the terminating `End`
pub const MAX_SEQUENCE_STEPS: usize = 24;

/// One sequence instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceStep {
    /// Stop the motor and release the power hold
    PowerOff,
    /// Delay the next step
    Wait(u16),
    /// Run the motor in the fold direction
    MotorFold,
    /// Run the motor in the unfold direction
    MotorUnfold,
    /// Drop the motor enable line
    MotorStop,
    /// Play a note and delay the next step by its duration
    ToneNote(NoteId, u16),
    /// Route following notes to another output
    SetToneOutput(OutputId),
    /// Terminate the sequence
    End,
}

impl SequenceStep {
    /// Time this step delays the next one (ms)
    pub const fn duration_ms(&self) -> u16 {
        match self {
            SequenceStep::Wait(ms) | SequenceStep::ToneNote(_, ms) => *ms,
            _ => 0,
        }
    }
}

/// Sequence building errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceError {
    /// Fragments do not fit in [`MAX_SEQUENCE_STEPS`]
    TooManySteps,
}

/// Immutable, `End`-terminated list of steps
///
/// Built by concatenating fragments, then sealed with [`Sequence::terminated`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    steps: Vec<SequenceStep, MAX_SEQUENCE_STEPS>,
}

impl Sequence {
    /// Empty, unterminated sequence
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a fragment
    pub fn push_fragment(&mut self, fragment: &[SequenceStep]) -> Result<(), SequenceError> {
        self.steps
            .extend_from_slice(fragment)
            .map_err(|_| SequenceError::TooManySteps)
    }

    /// Append a single step
    pub fn push(&mut self, step: SequenceStep) -> Result<(), SequenceError> {
        self.steps
            .push(step)
            .map_err(|_| SequenceError::TooManySteps)
    }

    /// Seal the sequence with `End`
    pub fn terminated(mut self) -> Result<Self, SequenceError> {
        self.push(SequenceStep::End)?;
        Ok(self)
    }

    /// Step at `index`
    pub fn step(&self, index: usize) -> Option<SequenceStep> {
        self.steps.get(index).copied()
    }

    /// All steps, including `End`
    pub fn steps(&self) -> &[SequenceStep] {
        &self.steps
    }

    /// Number of steps, including `End`
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if no steps were added
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total scheduled time: the sum of all waits and note durations (ms)
    pub fn total_duration_ms(&self) -> u32 {
        self.steps.iter().map(|s| s.duration_ms() as u32).sum()
    }
}
