//! Tone output abstraction

/// Square-wave output used to produce audible tones
///
/// Implementations start the waveform and return immediately; stopping it
/// after the note duration is the caller's job.
pub trait ToneChannel {
    /// Start a 50% duty square wave at `frequency_hz`
    ///
    /// A frequency of zero silences the channel.
    fn start_tone(&mut self, frequency_hz: u16);

    /// Stop the waveform and leave the line low
    fn stop_tone(&mut self);

    /// Check if a tone is currently playing
    fn is_playing(&self) -> bool;
}
