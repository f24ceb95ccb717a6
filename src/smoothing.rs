//! Linear parameter smoothing.

use crate::Signal;

/// A value that ramps linearly towards its target over a fixed number of samples.
///
/// Used on the caller side to de-zipper the output level before it reaches
/// the oscillator's amplitude input. Implements [`Signal`], so it can be
/// handed to a [`Param`](crate::Param) directly.
///
/// # Examples
///
/// ```
/// use morphwave::LinearSmoother;
///
/// let mut level = LinearSmoother::new(0.0, 2);
/// level.set_target(1.0);
/// assert_eq!(level.next_value(), 0.5);
/// assert_eq!(level.next_value(), 1.0);
/// assert_eq!(level.next_value(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSmoother {
    current: f64,
    target: f64,
    step: f64,
    /// Samples left in the current ramp
    remaining: u32,
    /// Samples a full ramp takes
    ramp_length: u32,
}

impl LinearSmoother {
    /// Creates a smoother resting at `initial`.
    ///
    /// A `ramp_length` of 0 makes every target change immediate.
    pub fn new(initial: f64, ramp_length: u32) -> Self {
        Self {
            current: initial,
            target: initial,
            step: 0.0,
            remaining: 0,
            ramp_length,
        }
    }

    /// Creates a smoother whose ramps last `seconds` at `sample_rate`.
    pub fn with_ramp_time(initial: f64, seconds: f64, sample_rate: f64) -> Self {
        Self::new(initial, ramp_samples(seconds, sample_rate))
    }

    /// Changes the ramp length. A ramp in progress is restarted from the current value.
    pub fn set_ramp_length(&mut self, ramp_length: u32) {
        self.ramp_length = ramp_length;
        let target = self.target;
        self.remaining = 0;
        self.set_target(target);
    }

    /// Starts a ramp from the current value to `target`.
    pub fn set_target(&mut self, target: f64) {
        if target == self.target && self.remaining > 0 {
            return;
        }

        self.target = target;
        if self.ramp_length == 0 || target == self.current {
            self.current = target;
            self.remaining = 0;
            return;
        }

        self.step = (target - self.current) / f64::from(self.ramp_length);
        self.remaining = self.ramp_length;
    }

    /// Jumps straight to `value`, cancelling any ramp.
    pub fn set_current_and_target(&mut self, value: f64) {
        self.current = value;
        self.target = value;
        self.remaining = 0;
    }

    /// Advances one sample and returns the new value.
    ///
    /// The last step of a ramp lands exactly on the target.
    #[inline]
    pub fn next_value(&mut self) -> f64 {
        if self.remaining > 0 {
            self.remaining -= 1;
            if self.remaining == 0 {
                self.current = self.target;
            } else {
                self.current += self.step;
            }
        }
        self.current
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// True while a ramp is in progress.
    pub fn is_smoothing(&self) -> bool {
        self.remaining > 0
    }
}

impl Signal for LinearSmoother {
    fn next_sample(&mut self) -> f64 {
        self.next_value()
    }
}

fn ramp_samples(seconds: f64, sample_rate: f64) -> u32 {
    let samples = (seconds * sample_rate).round();
    if samples.is_finite() && samples > 0.0 {
        samples.min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rests_at_initial_value() {
        let mut smoother = LinearSmoother::new(0.3, 16);
        assert!(!smoother.is_smoothing());
        assert_eq!(smoother.next_value(), 0.3);
        assert_eq!(smoother.target(), 0.3);
    }

    #[test]
    fn test_linear_ramp_reaches_target() {
        let mut smoother = LinearSmoother::new(0.0, 4);
        smoother.set_target(1.0);
        assert!(smoother.is_smoothing());

        let values: Vec<f64> = (0..6).map(|_| smoother.next_value()).collect();
        assert_eq!(values, vec![0.25, 0.5, 0.75, 1.0, 1.0, 1.0]);
        assert!(!smoother.is_smoothing());
    }

    #[test]
    fn test_zero_ramp_is_immediate() {
        let mut smoother = LinearSmoother::new(0.0, 0);
        smoother.set_target(0.8);
        assert_eq!(smoother.current(), 0.8);
        assert_eq!(smoother.next_value(), 0.8);
    }

    #[test]
    fn test_retarget_mid_ramp() {
        let mut smoother = LinearSmoother::new(0.0, 4);
        smoother.set_target(1.0);
        smoother.next_value(); // 0.25
        smoother.next_value(); // 0.5

        smoother.set_target(0.0);
        // New ramp of 4 samples from 0.5 down
        assert!((smoother.next_value() - 0.375).abs() < 1e-12);
        for _ in 0..3 {
            smoother.next_value();
        }
        assert_eq!(smoother.current(), 0.0);
    }

    #[test]
    fn test_same_target_does_not_restart() {
        let mut smoother = LinearSmoother::new(0.0, 4);
        smoother.set_target(1.0);
        smoother.next_value();
        smoother.set_target(1.0);
        assert_eq!(smoother.next_value(), 0.5);
    }

    #[test]
    fn test_set_current_and_target_snaps() {
        let mut smoother = LinearSmoother::new(0.0, 100);
        smoother.set_target(1.0);
        smoother.next_value();
        smoother.set_current_and_target(0.5);
        assert!(!smoother.is_smoothing());
        assert_eq!(smoother.next_value(), 0.5);
    }

    #[test]
    fn test_ramp_time() {
        let smoother = LinearSmoother::with_ramp_time(0.0, 0.05, 44100.0);
        assert_eq!(smoother.ramp_length, 2205);

        assert_eq!(ramp_samples(-1.0, 44100.0), 0);
        assert_eq!(ramp_samples(f64::NAN, 44100.0), 0);
    }

    #[test]
    fn test_set_ramp_length_restarts() {
        let mut smoother = LinearSmoother::new(0.0, 100);
        smoother.set_target(1.0);
        smoother.set_ramp_length(2);
        assert_eq!(smoother.next_value(), 0.5);
        assert_eq!(smoother.next_value(), 1.0);
    }
}
