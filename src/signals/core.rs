//! Core signal trait and parameter types.
//!
//! `Signal` is the pull interface every generator in the crate implements.
//! `Param` lets the oscillator's control inputs be either fixed values or
//! driven sample-by-sample by another signal (an LFO sweeping the control
//! position, a smoother feeding the amplitude).

/// Common interface for everything that produces samples.
///
/// The trait provides two operations:
/// - Single sample generation via `next_sample()`
/// - Batch processing via `process()`
pub trait Signal {
    /// Generates the next sample.
    ///
    /// # Returns
    ///
    /// A sample value, nominally between -1.0 and 1.0 for audio signals.
    /// Nothing in the crate hard-clamps its output.
    fn next_sample(&mut self) -> f64;

    /// Fills `buffer` with consecutive samples.
    ///
    /// Default implementation calls `next_sample()` for each element.
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

/// Anything with a controllable pitch.
///
/// # Examples
///
/// ```
/// use morphwave::{MorphingOscillator, Pitched};
///
/// let mut osc = MorphingOscillator::<44100>::new(440.0, 0.0);
/// assert!((osc.frequency() - 440.0).abs() < 1e-9);
///
/// osc.set_frequency(880.0);
/// assert!((osc.frequency() - 880.0).abs() < 1e-9);
/// ```
pub trait Pitched {
    /// Sets the frequency in Hz.
    fn set_frequency(&mut self, freq: f64);

    /// Gets the current frequency in Hz.
    fn frequency(&self) -> f64;
}

/// A signal that always returns the same value.
///
/// # Examples
///
/// ```
/// use morphwave::{ConstantSignal, Signal};
///
/// let mut level = ConstantSignal::<44100>(0.5);
/// assert_eq!(level.next_sample(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSignal<const SAMPLE_RATE: u32>(pub f64);

impl<const SAMPLE_RATE: u32> Signal for ConstantSignal<SAMPLE_RATE> {
    fn next_sample(&mut self) -> f64 {
        self.0
    }

    fn process(&mut self, buffer: &mut [f64]) {
        buffer.fill(self.0);
    }
}

impl<const SAMPLE_RATE: u32> From<f64> for ConstantSignal<SAMPLE_RATE> {
    fn from(value: f64) -> Self {
        ConstantSignal::<SAMPLE_RATE>(value)
    }
}

impl<const SAMPLE_RATE: u32> crate::AudioSignal<SAMPLE_RATE> for ConstantSignal<SAMPLE_RATE> {}

/// A control input that is either a fixed value or read from a signal.
///
/// Reading a `Param` never allocates: the boxed signal is created once,
/// when the parameter is built, and only pulled afterwards.
///
/// # Examples
///
/// ```
/// use morphwave::{LinearSmoother, Param};
///
/// // Fixed control position
/// let mut position: Param = 0.6.into();
/// assert_eq!(position.value(), 0.6);
///
/// // Amplitude ramping from silence to unity over 4 samples
/// let mut ramp = LinearSmoother::new(0.0, 4);
/// ramp.set_target(1.0);
/// let mut amplitude = Param::modulated(ramp);
/// assert_eq!(amplitude.value(), 0.25);
/// ```
pub enum Param {
    /// A fixed value
    Fixed(f64),
    /// A value pulled from a signal once per read
    Signal(Box<dyn Signal + Send>),
}

impl Param {
    /// Gets the current value.
    ///
    /// Fixed parameters return their value; modulated parameters advance
    /// their signal by one sample.
    pub fn value(&mut self) -> f64 {
        match self {
            Param::Fixed(v) => *v,
            Param::Signal(s) => s.next_sample(),
        }
    }

    /// Creates a fixed parameter.
    pub fn fixed(value: f64) -> Self {
        Param::Fixed(value)
    }

    /// Creates a parameter driven by `signal`.
    pub fn modulated(signal: impl Signal + Send + 'static) -> Self {
        Param::Signal(Box::new(signal))
    }

    /// Returns true if this parameter is a fixed value.
    pub fn is_fixed(&self) -> bool {
        matches!(self, Param::Fixed(_))
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Param::Fixed(value)
    }
}

impl<S: Signal + Send + 'static> From<S> for Param {
    fn from(signal: S) -> Self {
        Param::Signal(Box::new(signal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter(f64);

    impl Signal for Counter {
        fn next_sample(&mut self) -> f64 {
            self.0 += 1.0;
            self.0
        }
    }

    #[test]
    fn test_default_process_fills_buffer() {
        let mut counter = Counter(0.0);
        let mut buffer = [0.0; 4];
        counter.process(&mut buffer);
        assert_eq!(buffer, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_constant_signal_process() {
        let mut constant = ConstantSignal::<48000>(0.25);
        let mut buffer = vec![0.0; 8];
        constant.process(&mut buffer);
        assert!(buffer.iter().all(|&s| s == 0.25));
    }

    #[test]
    fn test_f64_to_param() {
        let mut param: Param = 0.5.into();
        assert!(param.is_fixed());
        assert_eq!(param.value(), 0.5);
        assert_eq!(param.value(), 0.5);
    }

    #[test]
    fn test_signal_param_advances() {
        let mut param: Param = Counter(0.0).into();
        assert!(!param.is_fixed());
        assert_eq!(param.value(), 1.0);
        assert_eq!(param.value(), 2.0);
    }

    #[test]
    fn test_constant_signal_to_param() {
        // ConstantSignal goes through the blanket impl, so it is boxed
        let param: Param = ConstantSignal::<44100>(0.75).into();
        match param {
            Param::Signal(_) => {}
            Param::Fixed(_) => panic!("Unexpected Fixed variant"),
        }
    }
}
