//! Oscillators.
//!
//! - `PhaseAccumulator`: wrapped phase and the naive sawtooth derived from it
//! - `MorphCore`: the morphing engine, driven per sample by the caller
//! - `MorphingOscillator`: the same engine as a `Signal` with `Param` inputs

mod morph;
mod phase;
mod traits;

pub use morph::{MorphCore, MorphingOscillator};
pub use phase::PhaseAccumulator;
pub use traits::Oscillator;
