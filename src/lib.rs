//! Morphwave - a morphing waveform oscillator
//!
//! A naive sawtooth is shaped by a fold-over rectifier and a level
//! comparator. A single control position (nominally 0.0 to 1.1) moves the
//! sound from pure rectifier, through a crossfade, to pure comparator.
//!
//! ```
//! use morphwave::{MorphingOscillator, Signal};
//!
//! let mut osc = MorphingOscillator::<44100>::new(110.0, 0.5);
//! let mut buffer = vec![0.0; 256];
//! osc.process(&mut buffer);
//! ```

pub mod error;
#[cfg(feature = "wav-export")]
pub mod export;
pub mod frequency;
#[cfg(feature = "synth")]
pub mod oscillators;
pub mod params;
#[cfg(feature = "synth")]
pub mod shaping;
pub mod signals;
pub mod smoothing;

// Re-export commonly used types at the crate root
#[cfg(feature = "wav-export")]
pub use error::ExportError;
pub use error::ConfigError;
#[cfg(feature = "wav-export")]
pub use export::{render_samples, render_to_wav};
pub use frequency::Frequency;
#[cfg(feature = "synth")]
pub use oscillators::{MorphCore, MorphingOscillator, Oscillator, PhaseAccumulator};
pub use params::{
    OUTPUT_LEVEL, PARAMETERS, ParameterRange, ParameterSpec, WAVE_FORM, decibels_to_gain,
    gain_to_decibels,
};
#[cfg(feature = "synth")]
pub use shaping::{
    ComparatorMode, Region, ShapeParams, SplitPoints, compare, map_parameters, rectify,
};
pub use signals::{AudioSignal, ConstantSignal, Param, Pitched, Signal};
pub use smoothing::LinearSmoother;

#[cfg(feature = "notes")]
pub use morphwave_macros::hz;
