//! Fold-over rectifier.

/// Folds `input` back down once it rises above `threshold`.
///
/// Below the threshold the input passes through. Above it the output is
/// `threshold - (threshold + 1) * input`, a reflection whose slope gets
/// steeper as the threshold rises. `(1 - threshold) / 2` is added to every
/// sample to keep the folded wave centred.
///
/// With `threshold = 1.0` nothing in `[-1, 1]` is folded and the offset is
/// zero, so the input comes out unchanged.
///
/// # Examples
///
/// ```
/// use morphwave::rectify;
///
/// assert_eq!(rectify(-0.5, 0.0), 0.0);
/// assert_eq!(rectify(0.5, 0.0), 0.0);
/// assert_eq!(rectify(0.3, 1.0), 0.3);
/// ```
#[inline]
pub fn rectify(input: f64, threshold: f64) -> f64 {
    let folded = if input <= threshold {
        input
    } else {
        threshold - (threshold + 1.0) * input
    };

    folded + (1.0 - threshold) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_full_threshold_is_identity() {
        for i in -100..=100 {
            let x = f64::from(i) / 100.0;
            assert_eq!(rectify(x, 1.0), x);
        }
    }

    #[test]
    fn test_zero_threshold_is_centred_abs() {
        // Fold at 0 gives -|x| + 0.5
        for i in -100..=100 {
            let x = f64::from(i) / 100.0;
            assert!((rectify(x, 0.0) - (0.5 - x.abs())).abs() < EPS);
        }
    }

    #[test]
    fn test_pass_through_below_threshold() {
        // Only the offset is added
        assert!((rectify(-0.8, 0.5) - (-0.8 + 0.25)).abs() < EPS);
        assert!((rectify(0.5, 0.5) - 0.75).abs() < EPS);
    }

    #[test]
    fn test_fold_above_threshold() {
        // 0.5 - 1.5 * 0.9 + 0.25
        assert!((rectify(0.9, 0.5) - (-0.6)).abs() < EPS);
        // 0.5 - 1.5 * 1.0 + 0.25
        assert!((rectify(1.0, 0.5) - (-0.75)).abs() < EPS);
    }

    #[test]
    fn test_fold_is_discontinuous_at_positive_threshold() {
        // Just past the fold point the output drops by threshold * (threshold + 1)
        let before = rectify(0.5, 0.5);
        let after = rectify(0.5 + 1e-9, 0.5);
        assert!((before - after - 0.75).abs() < 1e-6);
    }
}
