//! Frequency type for deriving the oscillator's phase increment.

/// A frequency in Hz.
///
/// Accepts Hz directly or a MIDI note number, and converts to the
/// per-sample phase increment the oscillator consumes.
///
/// # Examples
///
/// ```
/// use morphwave::Frequency;
///
/// let a4: Frequency = 69u8.into();
/// assert!((a4.as_f64() - 440.0).abs() < 1e-9);
/// assert!((a4.phase_increment(44100.0) - 440.0 / 44100.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frequency(f64);

impl Frequency {
    pub const fn from_hz(hz: f64) -> Self {
        Frequency(hz)
    }

    /// Equal-tempered frequency of a MIDI note (69 = A4 = 440 Hz).
    pub fn from_midi(midi_note: u8) -> Self {
        let hz = 440.0 * 2.0_f64.powf((f64::from(midi_note) - 69.0) / 12.0);
        Frequency(hz)
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }

    /// Phase advance per sample at `sample_rate`.
    pub fn phase_increment(&self, sample_rate: f64) -> f64 {
        self.0 / sample_rate
    }
}

impl From<f64> for Frequency {
    fn from(hz: f64) -> Self {
        Frequency::from_hz(hz)
    }
}

impl From<u8> for Frequency {
    fn from(midi_note: u8) -> Self {
        Frequency::from_midi(midi_note)
    }
}

impl From<Frequency> for f64 {
    fn from(frequency: Frequency) -> Self {
        frequency.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hz() {
        let freq: Frequency = 440.0.into();
        assert_eq!(freq.as_f64(), 440.0);
    }

    #[test]
    fn test_from_midi() {
        assert!((Frequency::from_midi(69).as_f64() - 440.0).abs() < 1e-9);
        assert!((Frequency::from_midi(57).as_f64() - 220.0).abs() < 1e-9);
        assert!((Frequency::from_midi(60).as_f64() - 261.63).abs() < 0.01);
    }

    #[test]
    fn test_phase_increment() {
        let freq = Frequency::from_hz(441.0);
        assert!((freq.phase_increment(44100.0) - 0.01).abs() < 1e-15);
    }

    #[test]
    fn test_into_f64() {
        let hz: f64 = Frequency::from_hz(123.0).into();
        assert_eq!(hz, 123.0);
    }
}
