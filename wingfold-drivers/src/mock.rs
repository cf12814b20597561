//! Mock pins for driver tests

use core::cell::RefCell;

use embedded_hal::delay::DelayNs;
use heapless::Vec;
use wingfold_hal::{BiasedInputPin, InputPin, OutputPin, Pull, ToneChannel};

/// Pin activity, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinEvent {
    High(&'static str),
    Low(&'static str),
    Tone(&'static str, u16),
    Silent(&'static str),
    Pull(Pull),
    Settle(u32),
}

/// Shared event log
pub type PinLog = RefCell<Vec<PinEvent, 32>>;

pub fn new_log() -> PinLog {
    RefCell::new(Vec::new())
}

fn record(log: &PinLog, event: PinEvent) {
    let _ = log.borrow_mut().push(event);
}

/// Output pin that can also play tones
pub struct MockOutput<'a> {
    name: &'static str,
    log: &'a PinLog,
    high: bool,
    tone: Option<u16>,
}

impl<'a> MockOutput<'a> {
    pub fn new(name: &'static str, log: &'a PinLog) -> Self {
        Self {
            name,
            log,
            high: false,
            tone: None,
        }
    }
}

impl OutputPin for MockOutput<'_> {
    fn set_high(&mut self) {
        self.high = true;
        record(self.log, PinEvent::High(self.name));
    }

    fn set_low(&mut self) {
        self.high = false;
        record(self.log, PinEvent::Low(self.name));
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

impl ToneChannel for MockOutput<'_> {
    fn start_tone(&mut self, frequency_hz: u16) {
        self.tone = Some(frequency_hz);
        record(self.log, PinEvent::Tone(self.name, frequency_hz));
    }

    fn stop_tone(&mut self) {
        self.tone = None;
        self.high = false;
        record(self.log, PinEvent::Silent(self.name));
    }

    fn is_playing(&self) -> bool {
        self.tone.is_some()
    }
}

/// Plain input with a settable level
pub struct MockInput {
    pub high: bool,
}

impl InputPin for MockInput {
    fn is_high(&self) -> bool {
        self.high
    }
}

/// What is connected to a biased input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Driven(bool),
    Floating,
}

/// Input whose level follows the bias when floating
pub struct MockBiasedInput<'a> {
    pub line: Line,
    pull: Pull,
    log: &'a PinLog,
}

impl<'a> MockBiasedInput<'a> {
    pub fn new(line: Line, log: &'a PinLog) -> Self {
        Self {
            line,
            pull: Pull::None,
            log,
        }
    }
}

impl InputPin for MockBiasedInput<'_> {
    fn is_high(&self) -> bool {
        match self.line {
            Line::Driven(level) => level,
            Line::Floating => self.pull == Pull::Up,
        }
    }
}

impl BiasedInputPin for MockBiasedInput<'_> {
    fn set_pull(&mut self, pull: Pull) {
        self.pull = pull;
        record(self.log, PinEvent::Pull(pull));
    }
}

/// Delay that only logs the requested time
pub struct MockDelay<'a> {
    log: &'a PinLog,
}

impl<'a> MockDelay<'a> {
    pub fn new(log: &'a PinLog) -> Self {
        Self { log }
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        record(self.log, PinEvent::Settle(ns));
    }

    fn delay_us(&mut self, us: u32) {
        record(self.log, PinEvent::Settle(us.saturating_mul(1_000)));
    }
}
