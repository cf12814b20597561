//! Input decoding
//!
//! Turns raw pin levels into tri-state logical values and samples the
//! three controller inputs once per polling cycle.

pub mod logical;
pub mod sampler;

pub use logical::{decode_lock, decode_switch, LogicalInput};
pub use sampler::{InputSampler, InputSnapshot};
