//! Per-cycle input sampling

use crate::config::ControllerConfig;
use crate::traits::HardwareIo;

use super::logical::LogicalInput;

/// Logical input values for one polling cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputSnapshot {
    /// Lock signal (locking / none / unlocking)
    pub lock: LogicalInput,
    /// ACC rail on
    pub acc: bool,
    /// Dashboard switch (unfold / auto / fold)
    pub switch: LogicalInput,
}

impl InputSnapshot {
    pub const fn new(lock: LogicalInput, acc: bool, switch: LogicalInput) -> Self {
        Self { lock, acc, switch }
    }
}

/// Reads the three inputs from the board
///
/// No filtering is applied: a floating switch reads neutral immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSampler {
    invert_switch: bool,
}

impl InputSampler {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            invert_switch: config.invert_switch,
        }
    }

    /// Sample all inputs
    pub fn sample<H: HardwareIo>(&self, hw: &mut H) -> InputSnapshot {
        let lock = hw.read_lock();
        let acc = hw.read_acc();
        let switch = hw.read_switch();

        InputSnapshot {
            lock,
            acc,
            switch: if self.invert_switch {
                switch.inverted()
            } else {
                switch
            },
        }
    }
}
