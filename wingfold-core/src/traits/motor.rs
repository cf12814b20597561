//! Mirror motor traits

/// H-bridge command for the mirror motor pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorCommand {
    /// Enable line low, direction lines untouched
    #[default]
    Stopped,
    /// Retract the mirrors
    Fold,
    /// Extend the mirrors
    Unfold,
}

impl MotorCommand {
    /// Check if this command energizes the motor
    pub fn is_running(&self) -> bool {
        !matches!(self, MotorCommand::Stopped)
    }
}

/// Driver for a direction + enable motor bridge
///
/// Implementations must settle the direction lines before raising the
/// enable line, and stopping must only drop the enable line.
pub trait MotorDriver {
    /// Apply a command
    fn drive(&mut self, command: MotorCommand);

    /// Last applied command
    fn command(&self) -> MotorCommand;

    /// Check if the motor is energized
    fn is_running(&self) -> bool {
        self.command().is_running()
    }
}
