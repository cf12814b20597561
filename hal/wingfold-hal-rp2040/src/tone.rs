//! PWM tone output
//!
//! Generates a 50% duty square wave on channel A of a PWM slice. The same
//! channel can be held at a static level, so a motor direction line can
//! be used both as a plain output and as a buzzer.
//!
//! The slice counts at SYS_CLK / 64; at 125 MHz that gives 1.95 MHz,
//! enough resolution for the full note range and a 16-bit `top` down to
//! about 30 Hz.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use wingfold_hal::{OutputPin, ToneChannel};

/// Fixed clock divider for tone generation
pub const TONE_CLOCK_DIVIDER: u8 = 64;

/// Compute `top` for a frequency
///
/// Clamped to the 16-bit counter range.
pub fn calc_top(sys_clk_hz: u32, frequency_hz: u16) -> u16 {
    let count_hz = sys_clk_hz / TONE_CLOCK_DIVIDER as u32;
    let period = count_hz / (frequency_hz.max(1) as u32);
    period.saturating_sub(1).clamp(1, u16::MAX as u32) as u16
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Mode {
    Low,
    High,
    Tone(u16),
}

/// Square-wave output on PWM channel A
pub struct PwmTone<'d> {
    pwm: Pwm<'d>,
    config: PwmConfig,
    mode: Mode,
}

impl<'d> PwmTone<'d> {
    /// Take over a PWM slice; the output starts low
    pub fn new(pwm: Pwm<'d>) -> Self {
        let mut config = PwmConfig::default();
        config.divider = TONE_CLOCK_DIVIDER.into();
        config.top = 1;
        config.compare_a = 0;

        let mut tone = Self {
            pwm,
            config,
            mode: Mode::Low,
        };
        tone.apply();
        tone
    }

    fn apply(&mut self) {
        self.pwm.set_config(&self.config);
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        match mode {
            Mode::Low => {
                self.config.top = 1;
                self.config.compare_a = 0;
            }
            Mode::High => {
                // compare above top keeps the output high
                self.config.top = 1;
                self.config.compare_a = 2;
            }
            Mode::Tone(frequency_hz) => {
                let top = calc_top(embassy_rp::clocks::clk_sys_freq(), frequency_hz);
                self.config.top = top;
                self.config.compare_a = top / 2 + 1;
            }
        }
        self.mode = mode;
        self.apply();
    }
}

impl ToneChannel for PwmTone<'_> {
    fn start_tone(&mut self, frequency_hz: u16) {
        if frequency_hz == 0 {
            self.set_mode(Mode::Low);
        } else {
            self.set_mode(Mode::Tone(frequency_hz));
        }
    }

    fn stop_tone(&mut self) {
        self.set_mode(Mode::Low);
    }

    fn is_playing(&self) -> bool {
        matches!(self.mode, Mode::Tone(_))
    }
}

impl OutputPin for PwmTone<'_> {
    fn set_high(&mut self) {
        self.set_mode(Mode::High);
    }

    fn set_low(&mut self) {
        self.set_mode(Mode::Low);
    }

    fn is_set_high(&self) -> bool {
        self.mode == Mode::High
    }
}
