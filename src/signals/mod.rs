//! Signal processing types and traits.
//!
//! - `Signal` for every sample source
//! - `Pitched` for sources with a frequency
//! - `AudioSignal` for sample-rate-aware signals
//! - `Param` for fixed or modulated control inputs
//! - `ConstantSignal` for fixed values

mod audio;
mod core;

pub use audio::AudioSignal;
pub use core::{ConstantSignal, Param, Pitched, Signal};
