//! Configuration type definitions

use crate::sequence::MOTOR_START_DELAY_MS;
use crate::time::MAX_INTERVAL_MS;
use crate::tone::OutputId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// ACC-on events closer than this to the last ACC-off are ignored
///
/// The ACC rail drops out while the starter motor cranks.
pub const ACC_ON_DEBOUNCE_MS: u16 = 2000;

/// Default self-power timeout (ms)
pub const DEFAULT_POWER_TIMEOUT_MS: u16 = 15_000;

/// Default mirror motor run time (ms)
pub const DEFAULT_MIRROR_RUN_MS: u16 = 8_000;

/// Longest allowed polling interval (ms)
///
/// Must stay well below the shortest wait used in the sequences.
pub const MAX_POLL_INTERVAL_MS: u16 = 20;

/// Longest allowed switch settling delay (µs)
pub const MAX_SWITCH_SETTLE_US: u16 = 1_000;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Power timeout is zero or exceeds the 16-bit timer range
    InvalidPowerTimeout,
    /// Mirror run time is zero or exceeds the 16-bit timer range
    InvalidMirrorRunTime,
    /// Chime plus mirror run would outlast the power timeout
    RunExceedsPowerTimeout,
    /// Poll interval is zero or too long
    InvalidPollInterval,
    /// Switch settling delay too long
    InvalidSettleTime,
}

/// Controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControllerConfig {
    /// Time with ACC off and no activity before the controller cuts its own power (ms)
    pub power_timeout_ms: u16,
    /// How long the mirror motor runs for a full fold or unfold (ms)
    pub mirror_run_ms: u16,
    /// Play the welcome chime when ACC turns on
    pub chime_on_acc: bool,
    /// Output used for the lock, unlock and welcome chimes
    pub chime_output: OutputId,
    /// Swap the fold and unfold positions of the dashboard switch
    pub invert_switch: bool,
    /// Main loop polling interval (ms)
    pub poll_interval_ms: u16,
    /// Settling delay after changing the switch pin bias (µs)
    pub switch_settle_us: u16,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            power_timeout_ms: DEFAULT_POWER_TIMEOUT_MS,
            mirror_run_ms: DEFAULT_MIRROR_RUN_MS,
            chime_on_acc: true,
            chime_output: OutputId::Speaker,
            invert_switch: false,
            poll_interval_ms: 5,
            switch_settle_us: 50,
        }
    }
}

impl ControllerConfig {
    /// Check that all values fit the timing model
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.power_timeout_ms == 0 || self.power_timeout_ms > MAX_INTERVAL_MS {
            return Err(ConfigError::InvalidPowerTimeout);
        }
        if self.mirror_run_ms == 0 || self.mirror_run_ms > MAX_INTERVAL_MS {
            return Err(ConfigError::InvalidMirrorRunTime);
        }
        // Motor stop must land at least one poll before the power-down
        let motor_stop_ms = MOTOR_START_DELAY_MS as u32 + self.mirror_run_ms as u32;
        if motor_stop_ms + MAX_POLL_INTERVAL_MS as u32 > self.power_timeout_ms as u32 {
            return Err(ConfigError::RunExceedsPowerTimeout);
        }
        if self.poll_interval_ms == 0 || self.poll_interval_ms > MAX_POLL_INTERVAL_MS {
            return Err(ConfigError::InvalidPollInterval);
        }
        if self.switch_settle_us > MAX_SWITCH_SETTLE_US {
            return Err(ConfigError::InvalidSettleTime);
        }
        Ok(())
    }
}
