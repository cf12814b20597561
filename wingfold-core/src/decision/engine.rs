//! Decision engine
//!
//! Compares each cycle's inputs with the previous cycle and picks the
//! sequence to start. Rules run in a fixed order and a later rule
//! overrides the choice of an earlier one:
//!
//! 1. Lock pulse: acknowledge, and fold/unfold if ACC is off, the switch
//!    is on auto and the pulse changes the remembered lock state.
//! 2. ACC change: welcome chime (plus unfold unless the switch says fold)
//!    on ACC on, acknowledge on ACC off.
//! 3. Switch change: acknowledge, then fold/unfold as the switch says.
//! 4. Nothing chosen, ACC off and the power timeout elapsed: power off.

use crate::config::{ControllerConfig, ACC_ON_DEBOUNCE_MS};
use crate::input::{InputSnapshot, LogicalInput};
use crate::sequence::SequenceId;
use crate::time::Timestamp;

/// History kept between cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecisionState {
    /// Lock input seen last cycle
    pub previous_lock: LogicalInput,
    /// ACC input seen last cycle
    pub previous_acc: bool,
    /// Switch input seen last cycle
    pub previous_switch: LogicalInput,
    /// Last non-neutral lock pulse, i.e. whether the car is believed locked
    pub locked: LogicalInput,
    /// Last time anything happened; the power timeout counts from here
    pub last_activity: Timestamp,
    /// Last ACC-off edge, zero if none seen yet
    pub last_acc_off: Timestamp,
}

/// Per-cycle input policy
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    state: DecisionState,
    power_timeout_ms: u16,
}

impl DecisionEngine {
    /// Create an engine with neutral history
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            state: DecisionState::default(),
            power_timeout_ms: config.power_timeout_ms,
        }
    }

    /// Current history
    pub fn state(&self) -> &DecisionState {
        &self.state
    }

    /// Evaluate one cycle
    ///
    /// `sequencer_idle` tells whether nothing is playing; acknowledgement
    /// beeps are only issued then. Returns the sequence to start.
    pub fn evaluate(
        &mut self,
        now: Timestamp,
        inputs: InputSnapshot,
        sequencer_idle: bool,
    ) -> Option<SequenceId> {
        let state = &mut self.state;
        let mut selected = None;

        // 1. Lock pulse
        if inputs.lock != state.previous_lock {
            if sequencer_idle {
                selected = Some(SequenceId::Beep);
            }
            if !inputs.lock.is_neutral() {
                if !inputs.acc && inputs.lock != state.locked && inputs.switch.is_neutral() {
                    selected = Some(if inputs.lock.is_positive() {
                        SequenceId::FoldIn
                    } else {
                        SequenceId::FoldOut
                    });
                }
                state.locked = inputs.lock;
            }
        }

        // 2. ACC edge
        if inputs.acc != state.previous_acc {
            if inputs.acc {
                let since_off = now.elapsed_since(state.last_acc_off);
                let cranking = !state.last_acc_off.is_zero() && since_off < ACC_ON_DEBOUNCE_MS;
                if !cranking {
                    selected = Some(if inputs.switch >= LogicalInput::Neutral {
                        SequenceId::AccOnFoldOut
                    } else {
                        SequenceId::AccOn
                    });
                }
            } else {
                state.last_activity = now;
                state.last_acc_off = now;
                if sequencer_idle {
                    selected = Some(SequenceId::Beep);
                }
            }
        }

        // 3. Switch position, always wins
        if inputs.switch != state.previous_switch {
            if sequencer_idle {
                selected = Some(SequenceId::Beep);
            }
            match inputs.switch {
                LogicalInput::Positive => selected = Some(SequenceId::FoldOut),
                LogicalInput::Negative => selected = Some(SequenceId::FoldIn),
                LogicalInput::Neutral => {}
            }
        }

        // 4. Idle power-down
        if selected.is_none()
            && !inputs.acc
            && now.elapsed_since(state.last_activity) >= self.power_timeout_ms
        {
            selected = Some(SequenceId::Off);
        }

        if selected.is_some() {
            state.last_activity = now;
        }

        state.previous_lock = inputs.lock;
        state.previous_acc = inputs.acc;
        state.previous_switch = inputs.switch;

        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use LogicalInput::{Negative, Neutral, Positive};

    fn engine() -> DecisionEngine {
        DecisionEngine::new(&ControllerConfig::default())
    }

    fn t(ms: u16) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    fn inputs(lock: LogicalInput, acc: bool, switch: LogicalInput) -> InputSnapshot {
        InputSnapshot::new(lock, acc, switch)
    }

    #[test]
    fn test_quiet_inputs_select_nothing() {
        let mut engine = engine();
        assert_eq!(engine.evaluate(t(10), inputs(Neutral, false, Neutral), true), None);
    }

    #[test]
    fn test_lock_pulse_folds_in() {
        let mut engine = engine();

        let selected = engine.evaluate(t(100), inputs(Positive, false, Neutral), true);

        assert_eq!(selected, Some(SequenceId::FoldIn));
        assert_eq!(engine.state().locked, Positive);
        assert_eq!(engine.state().last_activity, t(100));
    }

    #[test]
    fn test_unlock_pulse_folds_out() {
        let mut engine = engine();
        let selected = engine.evaluate(t(100), inputs(Negative, false, Neutral), false);
        assert_eq!(selected, Some(SequenceId::FoldOut));
    }

    #[test]
    fn test_pulse_end_only_beeps() {
        let mut engine = engine();
        engine.evaluate(t(100), inputs(Positive, false, Neutral), true);

        // Pulse released while the fold is still playing
        assert_eq!(engine.evaluate(t(300), inputs(Neutral, false, Neutral), false), None);
        // Released while idle
        let mut engine2 = engine.clone();
        engine2.state.previous_lock = Positive;
        assert_eq!(
            engine2.evaluate(t(300), inputs(Neutral, false, Neutral), true),
            Some(SequenceId::Beep)
        );
        assert_eq!(engine.state().locked, Positive);
    }

    #[test]
    fn test_repeated_lock_does_not_refold() {
        let mut engine = engine();
        engine.evaluate(t(100), inputs(Positive, false, Neutral), true);
        engine.evaluate(t(300), inputs(Neutral, false, Neutral), false);

        // Second lock press: already locked, just acknowledge
        let selected = engine.evaluate(t(12_000), inputs(Positive, false, Neutral), true);
        assert_eq!(selected, Some(SequenceId::Beep));
    }

    #[test]
    fn test_lock_ignored_with_acc_on() {
        let mut engine = engine();
        engine.evaluate(t(100), inputs(Neutral, true, Neutral), true);

        let selected = engine.evaluate(t(5_000), inputs(Positive, true, Neutral), false);
        assert_eq!(selected, None);
        // Belief still updated
        assert_eq!(engine.state().locked, Positive);
    }

    #[test]
    fn test_lock_ignored_with_manual_switch() {
        let mut engine = engine();
        engine.state.previous_switch = Positive;

        let selected = engine.evaluate(t(100), inputs(Positive, false, Positive), true);
        assert_eq!(selected, Some(SequenceId::Beep));
    }

    #[test]
    fn test_switch_overrides_lock() {
        // Same direction: fold either way
        let mut engine = engine();
        let selected = engine.evaluate(t(100), inputs(Positive, false, Negative), true);
        assert_eq!(selected, Some(SequenceId::FoldIn));

        // Opposite direction proves the switch won
        let mut engine = self::engine();
        let selected = engine.evaluate(t(100), inputs(Positive, false, Positive), true);
        assert_eq!(selected, Some(SequenceId::FoldOut));
    }

    #[test]
    fn test_switch_overrides_acc() {
        let mut engine = engine();
        let selected = engine.evaluate(t(100), inputs(Neutral, true, Negative), true);
        assert_eq!(selected, Some(SequenceId::FoldIn));
    }

    #[test]
    fn test_switch_to_auto_beeps_when_idle() {
        let mut engine = engine();
        engine.evaluate(t(100), inputs(Neutral, false, Positive), true);

        assert_eq!(
            engine.evaluate(t(20_000), inputs(Neutral, false, Neutral), true),
            Some(SequenceId::Beep)
        );
        engine.state.previous_switch = Positive;
        assert_eq!(engine.evaluate(t(20_010), inputs(Neutral, false, Neutral), false), None);
    }

    #[test]
    fn test_first_acc_on_unfolds() {
        let mut engine = engine();
        let selected = engine.evaluate(t(50), inputs(Neutral, true, Neutral), true);
        assert_eq!(selected, Some(SequenceId::AccOnFoldOut));
    }

    #[test]
    fn test_acc_on_with_switch_folded_only_chimes() {
        let mut engine = engine();
        engine.state.previous_switch = Negative;

        let selected = engine.evaluate(t(50), inputs(Neutral, true, Negative), true);
        assert_eq!(selected, Some(SequenceId::AccOn));
    }

    #[test]
    fn test_acc_on_debounced_after_cranking() {
        let mut engine = engine();
        engine.evaluate(t(3_000), inputs(Neutral, true, Neutral), true);

        assert_eq!(
            engine.evaluate(t(4_000), inputs(Neutral, false, Neutral), true),
            Some(SequenceId::Beep)
        );
        assert_eq!(engine.state().last_acc_off, t(4_000));

        // Back on 1 s later: starter transient, ignored
        assert_eq!(engine.evaluate(t(5_000), inputs(Neutral, true, Neutral), true), None);
    }

    #[test]
    fn test_acc_on_after_debounce_window() {
        let mut engine = engine();
        engine.evaluate(t(3_000), inputs(Neutral, true, Neutral), true);
        engine.evaluate(t(4_000), inputs(Neutral, false, Neutral), true);

        let selected = engine.evaluate(t(6_000), inputs(Neutral, true, Neutral), true);
        assert_eq!(selected, Some(SequenceId::AccOnFoldOut));
    }

    #[test]
    fn test_acc_off_at_zero_does_not_debounce() {
        let mut engine = engine();
        engine.evaluate(t(60_000), inputs(Neutral, true, Neutral), true);

        // Off edge lands exactly on the wrapped zero tick
        assert_eq!(
            engine.evaluate(t(0), inputs(Neutral, false, Neutral), true),
            Some(SequenceId::Beep)
        );
        assert!(engine.state().last_acc_off.is_zero());

        // Reads as "never off", so a quick return still welcomes
        let selected = engine.evaluate(t(500), inputs(Neutral, true, Neutral), true);
        assert_eq!(selected, Some(SequenceId::AccOnFoldOut));
    }

    #[test]
    fn test_acc_off_extends_keep_alive() {
        let mut engine = engine();
        engine.evaluate(t(100), inputs(Neutral, true, Neutral), true);
        engine.evaluate(t(10_000), inputs(Neutral, false, Neutral), false);

        assert_eq!(engine.state().last_activity, t(10_000));
        assert_eq!(engine.evaluate(t(24_999), inputs(Neutral, false, Neutral), true), None);
        assert_eq!(
            engine.evaluate(t(25_000), inputs(Neutral, false, Neutral), true),
            Some(SequenceId::Off)
        );
    }

    #[test]
    fn test_power_down_once_per_timeout() {
        let mut engine = engine();
        let idle = inputs(Neutral, false, Neutral);

        let mut offs = 0;
        let mut first_off = None;
        for ms in (0..=29_990u16).step_by(10) {
            if engine.evaluate(t(ms), idle, true) == Some(SequenceId::Off) {
                offs += 1;
                first_off.get_or_insert(ms);
            }
        }

        assert_eq!(offs, 1);
        assert_eq!(first_off, Some(15_000));
    }

    #[test]
    fn test_no_power_down_with_acc_on() {
        let mut engine = engine();
        engine.evaluate(t(0), inputs(Neutral, true, Neutral), true);
        assert_eq!(engine.evaluate(t(20_000), inputs(Neutral, true, Neutral), true), None);
    }
}
