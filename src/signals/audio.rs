//! Sample-rate-aware signals.

use crate::Signal;

/// A `Signal` that runs at a sample rate fixed in its type.
///
/// The sample rate is a const generic, so an oscillator built for 48 kHz
/// cannot be mixed into a 44.1 kHz chain by accident.
///
/// # Examples
///
/// ```
/// use morphwave::{AudioSignal, MorphingOscillator};
///
/// let osc: MorphingOscillator<48000> = MorphingOscillator::new(440.0, 0.5);
/// assert_eq!(osc.sample_rate(), 48000.0);
/// ```
pub trait AudioSignal<const SAMPLE_RATE: u32>: Signal {
    /// Sample rate in Hz.
    fn sample_rate(&self) -> f64 {
        SAMPLE_RATE as f64
    }

    /// Duration of one sample in seconds.
    fn sample_period(&self) -> f64 {
        1.0 / SAMPLE_RATE as f64
    }
}
