//! Notes and tone outputs

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Right shift applied to note frequencies when buzzing the motor coil
///
/// Notes on the coil sound three octaves lower.
pub const MOTOR_TONE_SHIFT: u32 = 3;

/// Physical line a tone is played on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OutputId {
    /// Piezo speaker
    #[default]
    Speaker,
    /// Mirror motor coil, driven through the unfold direction line
    Motor,
}

/// Notes available to sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NoteId {
    C5,
    D5,
    E5,
    F5,
    G5,
    A5,
    B5,
    C6,
    D6,
    E6,
    F6,
    G6,
    A6,
    B6,
    C7,
}

impl NoteId {
    /// Equal-temperament frequency in Hz (A4 = 440 Hz), rounded
    pub const fn frequency_hz(self) -> u16 {
        match self {
            NoteId::C5 => 523,
            NoteId::D5 => 587,
            NoteId::E5 => 659,
            NoteId::F5 => 698,
            NoteId::G5 => 784,
            NoteId::A5 => 880,
            NoteId::B5 => 988,
            NoteId::C6 => 1047,
            NoteId::D6 => 1175,
            NoteId::E6 => 1319,
            NoteId::F6 => 1397,
            NoteId::G6 => 1568,
            NoteId::A6 => 1760,
            NoteId::B6 => 1976,
            NoteId::C7 => 2093,
        }
    }

    /// Frequency to emit for this note on `output`
    pub const fn frequency_on(self, output: OutputId) -> u16 {
        match output {
            OutputId::Speaker => self.frequency_hz(),
            OutputId::Motor => self.frequency_hz() >> MOTOR_TONE_SHIFT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_octave_doubles() {
        assert_eq!(NoteId::A5.frequency_hz() * 2, NoteId::A6.frequency_hz());
        assert_eq!(NoteId::G5.frequency_hz() * 2, NoteId::G6.frequency_hz());
    }

    #[test]
    fn test_motor_output_shifts_down() {
        assert_eq!(NoteId::A5.frequency_on(OutputId::Speaker), 880);
        assert_eq!(NoteId::A5.frequency_on(OutputId::Motor), 110);
        assert_eq!(NoteId::C7.frequency_on(OutputId::Motor), 261);
    }
}
