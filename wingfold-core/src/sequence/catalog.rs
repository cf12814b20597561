//! Predefined sequences
//!
//! Every sequence is assembled from the same small set of fragments:
//! a chime (output selection plus notes) and a motor run (direction,
//! run time, stop). Fragments may end and start with waits; the
//! sequencer folds consecutive waits together.

use crate::config::ControllerConfig;
use crate::tone::{NoteId, OutputId};

use super::step::{Sequence, SequenceError, SequenceStep};

use super::step::SequenceStep::{
    MotorFold, MotorStop, MotorUnfold, PowerOff, SetToneOutput, ToneNote, Wait,
};

/// Names of the catalog sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceId {
    /// Lock chime, then fold the mirrors
    FoldIn,
    /// Unlock chime, then unfold the mirrors
    FoldOut,
    /// Welcome chime only
    AccOn,
    /// Welcome chime, then unfold the mirrors
    AccOnFoldOut,
    /// Short acknowledgement
    Beep,
    /// Release the power hold
    Off,
}

impl SequenceId {
    /// All catalog sequences
    pub const ALL: [SequenceId; 6] = [
        SequenceId::FoldIn,
        SequenceId::FoldOut,
        SequenceId::AccOn,
        SequenceId::AccOnFoldOut,
        SequenceId::Beep,
        SequenceId::Off,
    ];
}

/// Descending three-note chime played before folding
const LOCK_CHIME: [SequenceStep; 6] = [
    ToneNote(NoteId::C6, 150),
    Wait(50),
    ToneNote(NoteId::G5, 150),
    Wait(50),
    ToneNote(NoteId::E5, 250),
    Wait(400),
];

/// Ascending three-note chime played before unfolding
const UNLOCK_CHIME: [SequenceStep; 6] = [
    ToneNote(NoteId::E5, 150),
    Wait(50),
    ToneNote(NoteId::G5, 150),
    Wait(50),
    ToneNote(NoteId::C6, 250),
    Wait(400),
];

/// Arpeggio played when ACC comes on (1000 ms)
const WELCOME_CHIME: [SequenceStep; 5] = [
    ToneNote(NoteId::C6, 100),
    ToneNote(NoteId::E6, 100),
    ToneNote(NoteId::G6, 100),
    ToneNote(NoteId::C7, 300),
    Wait(400),
];

const BEEP: [SequenceStep; 1] = [ToneNote(NoteId::A6, 100)];

/// Pause before the motor starts (ms)
const MOTOR_LEAD_MS: u16 = 600;

/// Longest time from the start of a sequence to its motor starting (ms)
///
/// 1650 ms for the lock and unlock sequences.
pub const MOTOR_START_DELAY_MS: u16 = max_ms(
    max_ms(fragment_ms(&LOCK_CHIME), fragment_ms(&UNLOCK_CHIME)),
    fragment_ms(&WELCOME_CHIME),
) + MOTOR_LEAD_MS;

/// Motor run fragment
const fn motor_run(direction: SequenceStep, run_ms: u16) -> [SequenceStep; 4] {
    [Wait(MOTOR_LEAD_MS), direction, Wait(run_ms), MotorStop]
}

const fn fragment_ms(steps: &[SequenceStep]) -> u16 {
    let mut total = 0;
    let mut i = 0;
    while i < steps.len() {
        total += steps[i].duration_ms();
        i += 1;
    }
    total
}

const fn max_ms(a: u16, b: u16) -> u16 {
    if a > b {
        a
    } else {
        b
    }
}

/// The fixed set of sequences, built once from the configuration
#[derive(Debug, Clone)]
pub struct SequenceCatalog {
    fold_in: Sequence,
    fold_out: Sequence,
    acc_on: Sequence,
    acc_on_fold_out: Sequence,
    beep: Sequence,
    off: Sequence,
}

impl SequenceCatalog {
    /// Build all sequences
    pub fn new(config: &ControllerConfig) -> Result<Self, SequenceError> {
        let output = config.chime_output;
        let run_ms = config.mirror_run_ms;

        let mut fold_in = chime(output, &LOCK_CHIME)?;
        fold_in.push_fragment(&motor_run(MotorFold, run_ms))?;

        let mut fold_out = chime(output, &UNLOCK_CHIME)?;
        fold_out.push_fragment(&motor_run(MotorUnfold, run_ms))?;

        let welcome: &[SequenceStep] = if config.chime_on_acc {
            &WELCOME_CHIME
        } else {
            &[]
        };
        let acc_on = chime(output, welcome)?;
        let mut acc_on_fold_out = acc_on.clone();
        acc_on_fold_out.push_fragment(&motor_run(MotorUnfold, run_ms))?;

        let beep = chime(output, &BEEP)?;

        let mut off = Sequence::new();
        off.push_fragment(&[MotorStop, PowerOff])?;

        Ok(Self {
            fold_in: fold_in.terminated()?,
            fold_out: fold_out.terminated()?,
            acc_on: acc_on.terminated()?,
            acc_on_fold_out: acc_on_fold_out.terminated()?,
            beep: beep.terminated()?,
            off: off.terminated()?,
        })
    }

    /// Look up a sequence
    pub fn get(&self, id: SequenceId) -> &Sequence {
        match id {
            SequenceId::FoldIn => &self.fold_in,
            SequenceId::FoldOut => &self.fold_out,
            SequenceId::AccOn => &self.acc_on,
            SequenceId::AccOnFoldOut => &self.acc_on_fold_out,
            SequenceId::Beep => &self.beep,
            SequenceId::Off => &self.off,
        }
    }
}

/// Chime fragment: output selection followed by notes
fn chime(output: OutputId, notes: &[SequenceStep]) -> Result<Sequence, SequenceError> {
    let mut seq = Sequence::new();
    seq.push(SetToneOutput(output))?;
    seq.push_fragment(notes)?;
    Ok(seq)
}
