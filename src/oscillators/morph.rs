//! Morphing oscillator: sawtooth through a rectifier and a comparator.
//!
//! One control position sweeps the timbre through three regions:
//! a fold-over rectifier whose fold point rises, a crossfade from the
//! rectifier to a comparator, and a comparator whose threshold moves.
//! See [`map_parameters`] for the exact mapping.

use tracing::debug;

use super::{Oscillator, PhaseAccumulator};
use crate::shaping::{ShapeParams, SplitPoints, compare, map_parameters, rectify};
use crate::{AudioSignal, Param, Pitched, Signal};

/// The per-sample engine, driven directly by the caller.
///
/// The caller owns the phase increment and amplitude (set them before
/// calling [`next_sample`](MorphCore::next_sample)) and hands in the control
/// position with every sample. Generating a sample does no allocation,
/// locking or logging.
///
/// # Examples
///
/// ```
/// use morphwave::MorphCore;
///
/// let mut core = MorphCore::new();
/// core.set_increment(440.0 / 48000.0);
///
/// let mut block = [0.0; 64];
/// for sample in block.iter_mut() {
///     *sample = core.next_sample(0.6);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MorphCore {
    phase: PhaseAccumulator,
    splits: SplitPoints,
    amplitude: f64,
    /// Parameters applied to the most recent sample; never read back by the sample path
    last_params: ShapeParams,
}

impl MorphCore {
    /// Creates an engine with the default split points, phase 0, no
    /// increment and unity amplitude.
    pub fn new() -> Self {
        Self::from_splits(SplitPoints::default())
    }

    /// Creates an engine with custom split points.
    pub fn with_split_points(splits: SplitPoints) -> Self {
        debug!(a = splits.a(), b = splits.b(), "morph oscillator with custom split points");
        Self::from_splits(splits)
    }

    fn from_splits(splits: SplitPoints) -> Self {
        Self {
            phase: PhaseAccumulator::default(),
            splits,
            amplitude: 1.0,
            last_params: ShapeParams::default(),
        }
    }

    /// Generates one sample for the given control position.
    ///
    /// Maps the position to shaping parameters, advances the phase, runs the
    /// sawtooth through both stages and returns
    /// `amplitude * (rectified + compared) / 2`.
    ///
    /// The output is not clamped.
    #[inline]
    pub fn next_sample(&mut self, position: f64) -> f64 {
        let params = map_parameters(position, &self.splits);
        let saw = self.phase.advance();

        let rectified = rectify(saw, params.rect_threshold) * params.rect_gain;
        let compared =
            compare(saw, params.comp_threshold, position, &self.splits) * params.comp_gain;

        self.last_params = params;
        self.amplitude * (rectified + compared) / 2.0
    }

    /// Sets the phase advance per sample (frequency / sample rate).
    pub fn set_increment(&mut self, increment: f64) {
        self.phase.set_increment(increment);
    }

    /// Phase advance per sample.
    pub fn increment(&self) -> f64 {
        self.phase.increment()
    }

    /// Sets the output scale applied after shaping.
    pub fn set_amplitude(&mut self, amplitude: f64) {
        self.amplitude = amplitude;
    }

    /// Output scale applied after shaping.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Current phase in `[0, 1)`.
    pub fn phase(&self) -> f64 {
        self.phase.phase()
    }

    /// Shaping parameters used for the most recent sample.
    ///
    /// Holds `ShapeParams::default()` after construction and after
    /// [`reset`](Oscillator::reset).
    pub fn shape_params(&self) -> ShapeParams {
        self.last_params
    }

    pub fn split_points(&self) -> SplitPoints {
        self.splits
    }
}

impl Default for MorphCore {
    fn default() -> Self {
        Self::new()
    }
}

impl Oscillator for MorphCore {
    /// Restores the shaping parameters to their neutral defaults.
    ///
    /// Phase, increment and amplitude are left alone.
    fn reset(&mut self) {
        self.last_params = ShapeParams::default();
    }
}

/// A [`MorphCore`] wired into the `Signal` traits.
///
/// Control position and amplitude are [`Param`]s, so either can be a fixed
/// value or another signal (an LFO on the position, a [`LinearSmoother`]
/// on the level). Both are read once per sample, position first.
///
/// [`LinearSmoother`]: crate::LinearSmoother
///
/// # Examples
///
/// ```
/// use morphwave::{MorphingOscillator, Signal};
///
/// // 220 Hz, halfway through the rectifier/comparator crossfade
/// let mut osc = MorphingOscillator::<44100>::new(220.0, 0.6).with_amplitude(0.5);
/// let mut buffer = vec![0.0; 512];
/// osc.process(&mut buffer);
/// ```
pub struct MorphingOscillator<const SAMPLE_RATE: u32> {
    core: MorphCore,
    position: Param,
    amplitude: Param,
}

impl<const SAMPLE_RATE: u32> MorphingOscillator<SAMPLE_RATE> {
    /// Creates an oscillator with the default split points.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency in Hz
    /// * `position` - Control position, nominally 0.0 to 1.1 (fixed or modulated)
    pub fn new(frequency: f64, position: impl Into<Param>) -> Self {
        Self::from_core(frequency, position, MorphCore::new())
    }

    /// Creates an oscillator with custom split points.
    pub fn with_split_points(
        frequency: f64,
        position: impl Into<Param>,
        splits: SplitPoints,
    ) -> Self {
        Self::from_core(frequency, position, MorphCore::with_split_points(splits))
    }

    fn from_core(frequency: f64, position: impl Into<Param>, mut core: MorphCore) -> Self {
        core.set_increment(frequency / SAMPLE_RATE as f64);
        Self {
            core,
            position: position.into(),
            amplitude: Param::Fixed(1.0),
        }
    }

    /// Replaces the amplitude source (unity by default).
    pub fn with_amplitude(mut self, amplitude: impl Into<Param>) -> Self {
        self.amplitude = amplitude.into();
        self
    }

    pub fn set_position(&mut self, position: impl Into<Param>) {
        self.position = position.into();
    }

    pub fn set_amplitude(&mut self, amplitude: impl Into<Param>) {
        self.amplitude = amplitude.into();
    }

    /// The underlying engine.
    pub fn core(&self) -> &MorphCore {
        &self.core
    }

    /// Shaping parameters used for the most recent sample.
    pub fn shape_params(&self) -> ShapeParams {
        self.core.shape_params()
    }
}

impl<const SAMPLE_RATE: u32> Signal for MorphingOscillator<SAMPLE_RATE> {
    fn next_sample(&mut self) -> f64 {
        let position = self.position.value();
        let amplitude = self.amplitude.value();
        self.core.set_amplitude(amplitude);
        self.core.next_sample(position)
    }
}

impl<const SAMPLE_RATE: u32> AudioSignal<SAMPLE_RATE> for MorphingOscillator<SAMPLE_RATE> {}

impl<const SAMPLE_RATE: u32> Pitched for MorphingOscillator<SAMPLE_RATE> {
    fn set_frequency(&mut self, frequency: f64) {
        self.core.set_increment(frequency / SAMPLE_RATE as f64);
    }

    fn frequency(&self) -> f64 {
        self.core.increment() * SAMPLE_RATE as f64
    }
}

impl<const SAMPLE_RATE: u32> Oscillator for MorphingOscillator<SAMPLE_RATE> {
    fn reset(&mut self) {
        self.core.reset();
    }
}
