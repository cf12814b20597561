//! Central-locking pulse sensor
//!
//! The car's locking system pulses one of two lines while it locks or
//! unlocks. Both lines are sampled and reduced to a tri-state value.

use wingfold_core::input::{decode_lock, LogicalInput};
use wingfold_hal::InputPin;

/// Lock/unlock line pair
pub struct LockSensor<L, U> {
    locking: L,
    unlocking: U,
}

impl<L: InputPin, U: InputPin> LockSensor<L, U> {
    pub fn new(locking: L, unlocking: U) -> Self {
        Self { locking, unlocking }
    }

    /// Current lock signal
    ///
    /// Positive while locking, negative while unlocking. Locking wins if
    /// both lines are high.
    pub fn read(&self) -> LogicalInput {
        decode_lock(self.locking.is_high(), self.unlocking.is_high())
    }
}
