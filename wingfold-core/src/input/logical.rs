//! Tri-state logical values

/// Tri-state input value
///
/// Lock: `Positive` = locking pulse, `Negative` = unlocking pulse.
/// Switch: `Positive` = unfold (open), `Negative` = fold, `Neutral` = auto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(i8)]
pub enum LogicalInput {
    Negative = -1,
    #[default]
    Neutral = 0,
    Positive = 1,
}

impl LogicalInput {
    /// Signed value (-1, 0, 1)
    pub const fn as_i8(self) -> i8 {
        self as i8
    }

    /// Check for `Neutral`
    pub const fn is_neutral(self) -> bool {
        matches!(self, LogicalInput::Neutral)
    }

    /// Check for `Positive`
    pub const fn is_positive(self) -> bool {
        matches!(self, LogicalInput::Positive)
    }

    /// Check for `Negative`
    pub const fn is_negative(self) -> bool {
        matches!(self, LogicalInput::Negative)
    }

    /// Opposite value; neutral stays neutral
    pub const fn inverted(self) -> Self {
        match self {
            LogicalInput::Negative => LogicalInput::Positive,
            LogicalInput::Neutral => LogicalInput::Neutral,
            LogicalInput::Positive => LogicalInput::Negative,
        }
    }
}

/// Decode the two lock signal lines
///
/// Both lines high cannot happen on the vehicle harness; locking wins.
pub const fn decode_lock(locking_high: bool, unlocking_high: bool) -> LogicalInput {
    if locking_high {
        LogicalInput::Positive
    } else if unlocking_high {
        LogicalInput::Negative
    } else {
        LogicalInput::Neutral
    }
}

/// Decode the shared switch line from two reads under opposite bias
///
/// | pulled down | pulled up | line        | value      |
/// |-------------|-----------|-------------|------------|
/// | high        | high      | driven high | `Positive` |
/// | low         | low       | driven low  | `Negative` |
/// | low         | high      | floating    | `Neutral`  |
/// | high        | low       | (invalid)   | `Neutral`  |
pub const fn decode_switch(high_when_pulled_down: bool, high_when_pulled_up: bool) -> LogicalInput {
    match (high_when_pulled_down, high_when_pulled_up) {
        (true, true) => LogicalInput::Positive,
        (false, false) => LogicalInput::Negative,
        _ => LogicalInput::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_decoding() {
        assert_eq!(decode_lock(false, false), LogicalInput::Neutral);
        assert_eq!(decode_lock(true, false), LogicalInput::Positive);
        assert_eq!(decode_lock(false, true), LogicalInput::Negative);
        // Tie-break
        assert_eq!(decode_lock(true, true), LogicalInput::Positive);
    }

    #[test]
    fn test_switch_decoding() {
        assert_eq!(decode_switch(true, true), LogicalInput::Positive);
        assert_eq!(decode_switch(false, false), LogicalInput::Negative);
        assert_eq!(decode_switch(false, true), LogicalInput::Neutral);
        assert_eq!(decode_switch(true, false), LogicalInput::Neutral);
    }

    #[test]
    fn test_ordering_matches_sign() {
        assert!(LogicalInput::Negative < LogicalInput::Neutral);
        assert!(LogicalInput::Neutral < LogicalInput::Positive);
        assert_eq!(LogicalInput::Negative.as_i8(), -1);
        assert_eq!(LogicalInput::Positive.inverted(), LogicalInput::Negative);
        assert_eq!(LogicalInput::Neutral.inverted(), LogicalInput::Neutral);
    }
}
