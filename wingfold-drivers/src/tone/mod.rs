//! Tone timing

pub mod timer;

pub use timer::ToneTimer;
