//! Phase accumulator producing a naive sawtooth.

/// Normalized phase that advances by a fixed increment per sample.
///
/// The phase always stays in `[0, 1)`. Wrapping is a single subtraction,
/// so the increment must stay below 1.0 (any audible pitch at any sensible
/// sample rate does).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhaseAccumulator {
    /// Current phase (0.0 to 1.0)
    phase: f64,
    /// Phase increment per sample (frequency / sample_rate)
    increment: f64,
}

impl PhaseAccumulator {
    /// Creates an accumulator at phase 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use morphwave::PhaseAccumulator;
    ///
    /// let mut phase = PhaseAccumulator::new(0.25);
    /// assert_eq!(phase.advance(), -0.5);
    /// assert_eq!(phase.advance(), 0.0);
    /// ```
    pub fn new(increment: f64) -> Self {
        Self {
            phase: 0.0,
            increment,
        }
    }

    /// Advances by one sample and returns the sawtooth value `2 * phase - 1`.
    ///
    /// The phase is incremented first, so the first call after construction
    /// reports the phase `increment`, not 0.
    #[inline]
    pub fn advance(&mut self) -> f64 {
        self.phase += self.increment;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        2.0 * self.phase - 1.0
    }

    /// Current phase in `[0, 1)`.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Phase advance per sample.
    pub fn increment(&self) -> f64 {
        self.increment
    }

    /// Changes the phase advance per sample. The phase itself is kept.
    pub fn set_increment(&mut self, increment: f64) {
        self.increment = increment;
    }
}
