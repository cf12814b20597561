//! H-bridge mirror motor driver
//!
//! The bridge has one direction line per way (fold, unfold) and a common
//! enable line. Direction lines are always settled before enable is
//! raised, and stopping only drops enable so the bridge never sees both
//! direction lines switching while energized.
//!
//! When the unfold line can also generate a square wave, the motor doubles
//! as a buzzer: the coil is pulsed at a low frequency with enable raised,
//! which is too fast for the mirror to move but audible. Such a line must
//! drop its waveform when set to a static level.
//!
//! # Usage
//!
//! ```ignore
//! let mut motor = HBridge::new(fold_pin, unfold_pin, enable_pin);
//! motor.drive(MotorCommand::Fold);
//! // ... mirror run time later
//! motor.drive(MotorCommand::Stopped);
//! ```

use wingfold_core::traits::{MotorCommand, MotorDriver};
use wingfold_hal::{OutputPin, ToneChannel};

/// Direction + enable H-bridge
pub struct HBridge<F, U, E> {
    fold: F,
    unfold: U,
    enable: E,
    command: MotorCommand,
    buzzing: bool,
}

impl<F: OutputPin, U: OutputPin, E: OutputPin> HBridge<F, U, E> {
    /// Create a new driver with the bridge disabled
    ///
    /// Direction lines are left as they are.
    pub fn new(fold: F, unfold: U, enable: E) -> Self {
        let mut bridge = Self {
            fold,
            unfold,
            enable,
            command: MotorCommand::Stopped,
            buzzing: false,
        };
        bridge.enable.set_low();
        bridge
    }

    /// Release the pins
    pub fn release(self) -> (F, U, E) {
        (self.fold, self.unfold, self.enable)
    }
}

impl<F: OutputPin, U: OutputPin, E: OutputPin> MotorDriver for HBridge<F, U, E> {
    fn drive(&mut self, command: MotorCommand) {
        match command {
            MotorCommand::Fold => {
                self.unfold.set_low();
                self.fold.set_high();
                self.enable.set_high();
            }
            MotorCommand::Unfold => {
                self.fold.set_low();
                self.unfold.set_high();
                self.enable.set_high();
            }
            MotorCommand::Stopped => {
                self.enable.set_low();
            }
        }
        self.command = command;
        self.buzzing = false;
    }

    fn command(&self) -> MotorCommand {
        self.command
    }
}

impl<F, U, E> ToneChannel for HBridge<F, U, E>
where
    F: OutputPin,
    U: OutputPin + ToneChannel,
    E: OutputPin,
{
    /// Buzz the motor coil
    ///
    /// Ignored while the motor is running a fold or unfold.
    fn start_tone(&mut self, frequency_hz: u16) {
        if self.command.is_running() {
            return;
        }
        if frequency_hz == 0 {
            self.stop_tone();
            return;
        }

        self.fold.set_low();
        self.unfold.start_tone(frequency_hz);
        self.enable.set_high();
        self.buzzing = true;
    }

    fn stop_tone(&mut self) {
        if !self.buzzing {
            return;
        }
        self.enable.set_low();
        self.unfold.stop_tone();
        self.buzzing = false;
    }

    fn is_playing(&self) -> bool {
        self.buzzing
    }
}
