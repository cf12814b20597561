//! RP2040-specific HAL for the mirror controller firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `wingfold-hal` traits on top of embassy-rp:
//!
//! - GPIO wrappers for outputs, inputs and the bias-switched switch input
//! - PWM square-wave tone output

#![no_std]

pub mod gpio;
pub mod tone;

pub use gpio::{GpioFlex, GpioInput, GpioOutput};
pub use tone::PwmTone;

// Re-export shared traits from wingfold-hal for convenience
pub use wingfold_hal::{BiasedInputPin, InputPin, OutputPin, Pull, ToneChannel};
