//! Wingfold Hardware Abstraction Layer
//!
//! This crate defines the pin-level traits that the drivers are written
//! against. Chip-specific crates implement them for their GPIO and PWM
//! peripherals, so the same drivers run on the target and in host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  wingfold-drivers (H-bridge, switch...) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  wingfold-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ wingfold-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`gpio::BiasedInputPin`] - Input with switchable pull resistor
//! - [`tone::ToneChannel`] - Square-wave tone output

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod tone;

// Re-export key traits at crate root for convenience
pub use gpio::{BiasedInputPin, InputPin, OutputPin, Pull};
pub use tone::ToneChannel;
