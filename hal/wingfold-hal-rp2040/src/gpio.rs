//! GPIO wrappers
//!
//! Thin newtypes over the embassy-rp pin drivers implementing the
//! `wingfold-hal` pin traits.

use embassy_rp::gpio::{Flex, Input, Level, Output, Pull as RpPull};
use wingfold_hal::{BiasedInputPin, InputPin, OutputPin, Pull};

/// Push-pull output
pub struct GpioOutput<'d>(Output<'d>);

impl<'d> GpioOutput<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self(pin)
    }
}

impl OutputPin for GpioOutput<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn set_state(&mut self, high: bool) {
        self.0.set_level(Level::from(high));
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Plain input
pub struct GpioInput<'d>(Input<'d>);

impl<'d> GpioInput<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self(pin)
    }
}

impl InputPin for GpioInput<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// Input with runtime-selectable bias
pub struct GpioFlex<'d>(Flex<'d>);

impl<'d> GpioFlex<'d> {
    /// Wrap a flex pin and make it an input
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_as_input();
        Self(pin)
    }
}

impl InputPin for GpioFlex<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

impl BiasedInputPin for GpioFlex<'_> {
    fn set_pull(&mut self, pull: Pull) {
        self.0.set_pull(match pull {
            Pull::None => RpPull::None,
            Pull::Up => RpPull::Up,
            Pull::Down => RpPull::Down,
        });
    }
}
