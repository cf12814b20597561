//! Board-agnostic core logic for the mirror controller firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (the controller's I/O boundary, motor)
//! - Input decoding (lock pulses, ACC, three-position switch)
//! - Action sequences and the non-blocking sequence interpreter
//! - Decision engine mapping input changes to sequences
//! - Configuration type definitions
//!
//! One polling cycle is [`Controller::poll`]: sample inputs, let the
//! [`decision::DecisionEngine`] pick a sequence, start it, then advance
//! the [`sequence::Sequencer`].

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod decision;
pub mod input;
pub mod sequence;
pub mod time;
pub mod tone;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::Controller;
pub use time::Timestamp;
