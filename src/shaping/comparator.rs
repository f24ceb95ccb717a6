//! Level comparator with position-dependent polarity.

use super::SplitPoints;

/// Output levels of the comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparatorMode {
    /// -1 above the threshold, +1 at or below it
    Bipolar,
    /// 0 above the threshold, +1 at or below it
    Unipolar,
}

impl ComparatorMode {
    /// Picks the mode for a control position.
    ///
    /// Flips from bipolar to unipolar exactly at the second split point,
    /// while the comparator gain is already at 1.0 there.
    pub fn for_position(position: f64, splits: &SplitPoints) -> Self {
        if position < splits.b() {
            ComparatorMode::Bipolar
        } else {
            ComparatorMode::Unipolar
        }
    }

    /// Level emitted when the input is above the threshold.
    pub fn high_input_level(self) -> f64 {
        match self {
            ComparatorMode::Bipolar => -1.0,
            ComparatorMode::Unipolar => 0.0,
        }
    }
}

/// Scales a logical comparator threshold into the range the input is tested against.
#[inline]
pub fn effective_threshold(threshold: f64) -> f64 {
    (threshold + 0.2) * 0.4
}

/// Compares `input` against a rescaled `threshold`.
///
/// The threshold is first mapped through [`effective_threshold`]. The result
/// is +1 when the input is at or below it, otherwise -1 (bipolar, position
/// below the second split point) or 0 (unipolar).
///
/// # Examples
///
/// ```
/// use morphwave::{SplitPoints, compare};
///
/// let splits = SplitPoints::default();
/// // effective threshold is 0.08
/// assert_eq!(compare(0.5, 0.0, 0.6, &splits), -1.0);
/// assert_eq!(compare(0.5, 0.0, 0.9, &splits), 0.0);
/// assert_eq!(compare(-0.5, 0.0, 0.9, &splits), 1.0);
/// ```
#[inline]
pub fn compare(input: f64, threshold: f64, position: f64, splits: &SplitPoints) -> f64 {
    let mode = ComparatorMode::for_position(position, splits);

    if input > effective_threshold(threshold) {
        mode.high_input_level()
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_threshold() {
        assert!((effective_threshold(0.0) - 0.08).abs() < 1e-12);
        assert!((effective_threshold(1.0) - 0.48).abs() < 1e-12);
        assert!((effective_threshold(-1.25) + 0.42).abs() < 1e-12);
    }

    #[test]
    fn test_mode_flips_at_split_b() {
        let splits = SplitPoints::default();
        assert_eq!(ComparatorMode::for_position(0.79, &splits), ComparatorMode::Bipolar);
        assert_eq!(ComparatorMode::for_position(0.8, &splits), ComparatorMode::Unipolar);
        assert_eq!(ComparatorMode::for_position(1.1, &splits), ComparatorMode::Unipolar);
    }

    #[test]
    fn test_bipolar_levels() {
        let splits = SplitPoints::default();
        for i in -100..=100 {
            let x = f64::from(i) / 100.0;
            let out = compare(x, 0.0, 0.5, &splits);
            assert!(out == -1.0 || out == 1.0);
        }
    }

    #[test]
    fn test_unipolar_levels() {
        let splits = SplitPoints::default();
        for i in -100..=100 {
            let x = f64::from(i) / 100.0;
            let out = compare(x, -1.25, 0.8, &splits);
            assert!(out == 0.0 || out == 1.0);
        }
    }

    #[test]
    fn test_both_sides_of_split_b_differ() {
        let splits = SplitPoints::default();
        let x = 0.5;
        let below = compare(x, 0.0, 0.8 - 1e-9, &splits);
        let at = compare(x, 0.0, 0.8, &splits);
        assert_eq!(below, -1.0);
        assert_eq!(at, 0.0);
    }

    #[test]
    fn test_input_equal_to_threshold_is_low() {
        let splits = SplitPoints::default();
        let threshold = effective_threshold(0.0);
        assert_eq!(compare(threshold, 0.0, 0.5, &splits), 1.0);
    }
}
