//! Controller I/O boundary
//!
//! Everything the sequencer and decision engine need from the board.
//! All calls are fire-and-forget and return immediately, except
//! [`HardwareIo::read_switch`], which waits out two short bias settling
//! delays.

use crate::input::LogicalInput;
use crate::time::Timestamp;
use crate::tone::OutputId;

use super::motor::MotorCommand;

/// Board capabilities used by the controller
pub trait HardwareIo {
    /// Drive the self-power-hold latch
    ///
    /// Must be called with `true` before any other setup at boot. Releasing
    /// it is expected to cut the controller's supply.
    fn set_power_hold(&mut self, hold: bool);

    /// Command the mirror motor H-bridge
    fn set_motor(&mut self, command: MotorCommand);

    /// Start a tone on `output`; the board stops it after `duration_ms`
    fn play_tone(&mut self, output: OutputId, frequency_hz: u16, duration_ms: u16);

    /// Sample the lock signal lines
    fn read_lock(&mut self) -> LogicalInput;

    /// Sample the ACC rail
    fn read_acc(&mut self) -> bool;

    /// Sample the three-position dashboard switch (raw polarity)
    fn read_switch(&mut self) -> LogicalInput;

    /// Current time in wrapping milliseconds
    fn now_ms(&self) -> Timestamp;
}
