//! Three-position dashboard switch
//!
//! The switch connects one input either to ground, to the supply, or to
//! nothing (auto). A single read samples the line once with the pull-down
//! and once with the pull-up enabled: a driven line ignores the bias, a
//! floating one follows it.
//!
//! | pulled down | pulled up | position            |
//! |-------------|-----------|---------------------|
//! | high        | high      | unfold (positive)   |
//! | low         | low       | fold (negative)     |
//! | low         | high      | auto (neutral)      |
//! | high        | low       | impossible, neutral |

use embedded_hal::delay::DelayNs;
use wingfold_core::input::{decode_switch, LogicalInput};
use wingfold_hal::{BiasedInputPin, Pull};

/// Tri-state switch on a single biased input
pub struct TriStateSwitch<P, D> {
    pin: P,
    delay: D,
    settle_us: u32,
}

impl<P: BiasedInputPin, D: DelayNs> TriStateSwitch<P, D> {
    /// Create a new reader
    ///
    /// `settle_us` is how long the line is given after each bias change.
    pub fn new(pin: P, delay: D, settle_us: u16) -> Self {
        Self {
            pin,
            delay,
            settle_us: settle_us as u32,
        }
    }

    /// Read the switch position
    ///
    /// Leaves the pull-up enabled.
    pub fn read(&mut self) -> LogicalInput {
        self.pin.set_pull(Pull::Down);
        self.delay.delay_us(self.settle_us);
        let high_when_pulled_down = self.pin.is_high();

        self.pin.set_pull(Pull::Up);
        self.delay.delay_us(self.settle_us);
        let high_when_pulled_up = self.pin.is_high();

        decode_switch(high_when_pulled_down, high_when_pulled_up)
    }
}
