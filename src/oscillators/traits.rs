//! Core trait definitions for oscillators.

/// State management shared by the oscillators.
///
/// Frequency control lives in [`Pitched`](crate::Pitched); this trait only
/// covers what happens on playback restart.
pub trait Oscillator {
    /// Restores the oscillator's restart state.
    ///
    /// Each implementation documents which parts of its state survive.
    fn reset(&mut self);
}
