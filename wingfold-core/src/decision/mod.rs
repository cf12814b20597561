//! Input decision policy
//!
//! Decides, once per polling cycle, which sequence (if any) the input
//! changes call for.

pub mod engine;

pub use engine::{DecisionEngine, DecisionState};
