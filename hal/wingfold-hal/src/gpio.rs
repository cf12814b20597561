//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific HALs.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Internal bias resistor selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// No bias, pin floats when undriven
    None,
    /// Weak pull towards VCC
    Up,
    /// Weak pull towards ground
    Down,
}

/// Input pin whose bias can be changed at runtime
///
/// Needed to tell a driven line apart from a floating one: a floating line
/// follows the bias, a driven line does not.
pub trait BiasedInputPin: InputPin {
    /// Select the internal bias resistor
    fn set_pull(&mut self, pull: Pull);
}
