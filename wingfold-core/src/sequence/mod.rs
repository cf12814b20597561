//! Action sequences
//!
//! A sequence is a short, fixed list of timed hardware actions (motor,
//! tones, waits, power-off). The catalog builds the six sequences the
//! controller uses from the configuration; the sequencer plays one at a
//! time without blocking the polling loop.

pub mod catalog;
pub mod interpreter;
pub mod step;

pub use catalog::{SequenceCatalog, SequenceId, MOTOR_START_DELAY_MS};
pub use interpreter::Sequencer;
pub use step::{Sequence, SequenceError, SequenceStep, MAX_SEQUENCE_STEPS};
