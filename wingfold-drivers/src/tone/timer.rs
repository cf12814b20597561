//! Note duration timer
//!
//! Tone channels only start and stop a waveform. The timer remembers when
//! the current note is due to end and silences the channel once
//! [`ToneTimer::service`] is called at or after that time.

use wingfold_core::Timestamp;
use wingfold_hal::ToneChannel;

/// Stop time of the note playing on one channel
#[derive(Debug, Clone, Copy, Default)]
pub struct ToneTimer {
    stop_at: Option<Timestamp>,
}

impl ToneTimer {
    pub const fn new() -> Self {
        Self { stop_at: None }
    }

    /// Start a note, replacing any note still playing
    pub fn play<C: ToneChannel>(
        &mut self,
        channel: &mut C,
        frequency_hz: u16,
        duration_ms: u16,
        now: Timestamp,
    ) {
        if frequency_hz == 0 || duration_ms == 0 {
            self.silence(channel);
            return;
        }

        channel.start_tone(frequency_hz);
        self.stop_at = Some(now.wrapping_add_ms(duration_ms));
    }

    /// Stop the note if its time is up
    ///
    /// Returns true if the channel was silenced by this call.
    pub fn service<C: ToneChannel>(&mut self, channel: &mut C, now: Timestamp) -> bool {
        match self.stop_at {
            Some(stop_at) if now.has_reached(stop_at) => {
                self.silence(channel);
                true
            }
            _ => false,
        }
    }

    /// Stop immediately
    pub fn silence<C: ToneChannel>(&mut self, channel: &mut C) {
        if self.stop_at.take().is_some() || channel.is_playing() {
            channel.stop_tone();
        }
    }

    /// Check if a note is pending
    pub fn is_active(&self) -> bool {
        self.stop_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{new_log, MockOutput, PinEvent};

    fn t(ms: u16) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    #[test]
    fn test_expires_after_duration() {
        let log = new_log();
        let mut speaker = MockOutput::new("spk", &log);
        let mut timer = ToneTimer::new();

        timer.play(&mut speaker, 1047, 150, t(1000));
        assert!(speaker.is_playing());

        assert!(!timer.service(&mut speaker, t(1149)));
        assert!(speaker.is_playing());

        assert!(timer.service(&mut speaker, t(1150)));
        assert!(!speaker.is_playing());
        assert!(!timer.is_active());

        // Already stopped
        assert!(!timer.service(&mut speaker, t(1200)));
    }

    #[test]
    fn test_new_note_replaces_old() {
        let log = new_log();
        let mut speaker = MockOutput::new("spk", &log);
        let mut timer = ToneTimer::new();

        timer.play(&mut speaker, 1047, 150, t(0));
        timer.play(&mut speaker, 1319, 100, t(100));

        assert!(!timer.service(&mut speaker, t(150)));
        assert!(timer.service(&mut speaker, t(200)));
        assert_eq!(
            log.borrow().as_slice(),
            &[
                PinEvent::Tone("spk", 1047),
                PinEvent::Tone("spk", 1319),
                PinEvent::Silent("spk"),
            ]
        );
    }

    #[test]
    fn test_expiry_across_rollover() {
        let log = new_log();
        let mut speaker = MockOutput::new("spk", &log);
        let mut timer = ToneTimer::new();

        timer.play(&mut speaker, 880, 300, t(65_400));

        assert!(!timer.service(&mut speaker, t(65_535)));
        assert!(!timer.service(&mut speaker, t(100)));
        assert!(timer.service(&mut speaker, t(164)));
    }

    #[test]
    fn test_zero_duration_is_silent() {
        let log = new_log();
        let mut speaker = MockOutput::new("spk", &log);
        let mut timer = ToneTimer::new();

        timer.play(&mut speaker, 880, 0, t(0));

        assert!(!speaker.is_playing());
        assert!(!timer.is_active());
        assert!(log.borrow().is_empty());
    }
}
