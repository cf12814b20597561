//! Wrapping 16-bit millisecond timestamps
//!
//! The controller keeps time in a 16-bit millisecond counter that rolls
//! over every 65.536 s. Deadlines are compared through the signed
//! difference, which stays correct across a single rollover as long as
//! the interval is below 32768 ms.

/// Longest interval that can be scheduled against a [`Timestamp`]
pub const MAX_INTERVAL_MS: u16 = i16::MAX as u16;

/// Millisecond timestamp modulo 2^16
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timestamp(u16);

impl Timestamp {
    /// The zero timestamp, also used as "never happened"
    pub const ZERO: Self = Self(0);

    /// Create a timestamp from raw milliseconds
    pub const fn from_millis(ms: u16) -> Self {
        Self(ms)
    }

    /// Truncate a wide millisecond counter to a timestamp
    pub const fn from_ticks(ms: u64) -> Self {
        Self(ms as u16)
    }

    /// Raw millisecond value
    pub const fn as_millis(self) -> u16 {
        self.0
    }

    /// Check for the zero sentinel
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Timestamp `ms` milliseconds later, wrapping
    pub const fn wrapping_add_ms(self, ms: u16) -> Self {
        Self(self.0.wrapping_add(ms))
    }

    /// Milliseconds elapsed from `earlier` to `self`, wrapping
    ///
    /// Correct for gaps up to 65535 ms.
    pub const fn elapsed_since(self, earlier: Self) -> u16 {
        self.0.wrapping_sub(earlier.0)
    }

    /// Check whether `deadline` is due at this time
    ///
    /// Uses the signed difference so that a deadline scheduled just
    /// before a rollover is still seen as due just after it.
    pub const fn has_reached(self, deadline: Self) -> bool {
        (self.0.wrapping_sub(deadline.0) as i16) >= 0
    }
}

impl From<u16> for Timestamp {
    fn from(ms: u16) -> Self {
        Self(ms)
    }
}
