//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in wingfold-core, written against the pin traits of wingfold-hal:
//!
//! - Motor drivers (direction + enable H-bridge, motor buzzer)
//! - Input sensors (lock pulse lines, three-position switch)
//! - Tone timing (stopping a note once its duration is up)

#![no_std]
#![deny(unsafe_code)]

pub mod input;
pub mod motor;
pub mod tone;

#[cfg(test)]
pub(crate) mod mock;
