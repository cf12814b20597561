//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod hardware;
pub mod motor;

pub use hardware::HardwareIo;
pub use motor::{MotorCommand, MotorDriver};
