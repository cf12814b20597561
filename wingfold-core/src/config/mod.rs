//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware bakes the values
//! in at build time; nothing is persisted on the device.

pub mod types;

pub use types::*;
