//! Recording hardware double for unit tests

use heapless::Vec;

use crate::input::LogicalInput;
use crate::time::Timestamp;
use crate::tone::OutputId;
use crate::traits::{HardwareIo, MotorCommand};

/// Output calls seen by the mock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwCall {
    PowerHold(bool),
    Motor(MotorCommand),
    Tone {
        output: OutputId,
        frequency_hz: u16,
        duration_ms: u16,
    },
}

/// Mock board with settable inputs and a call log
pub struct MockHardware {
    pub now: Timestamp,
    pub lock: LogicalInput,
    pub acc: bool,
    pub switch: LogicalInput,
    pub calls: Vec<HwCall, 64>,
}

impl MockHardware {
    pub fn new() -> Self {
        Self {
            now: Timestamp::ZERO,
            lock: LogicalInput::Neutral,
            acc: false,
            switch: LogicalInput::Neutral,
            calls: Vec::new(),
        }
    }

    pub fn motor_calls(&self) -> impl Iterator<Item = MotorCommand> + '_ {
        self.calls.iter().filter_map(|c| match c {
            HwCall::Motor(cmd) => Some(*cmd),
            _ => None,
        })
    }

    pub fn tone_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HwCall::Tone { .. }))
            .count()
    }
}

impl HardwareIo for MockHardware {
    fn set_power_hold(&mut self, hold: bool) {
        let _ = self.calls.push(HwCall::PowerHold(hold));
    }

    fn set_motor(&mut self, command: MotorCommand) {
        let _ = self.calls.push(HwCall::Motor(command));
    }

    fn play_tone(&mut self, output: OutputId, frequency_hz: u16, duration_ms: u16) {
        let _ = self.calls.push(HwCall::Tone {
            output,
            frequency_hz,
            duration_ms,
        });
    }

    fn read_lock(&mut self) -> LogicalInput {
        self.lock
    }

    fn read_acc(&mut self) -> bool {
        self.acc
    }

    fn read_switch(&mut self) -> LogicalInput {
        self.switch
    }

    fn now_ms(&self) -> Timestamp {
        self.now
    }
}
