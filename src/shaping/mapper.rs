//! Control position to shaping parameters.
//!
//! The control axis is cut into three regions by two split points:
//!
//! ```plaintext
//!  0.0          a (0.4)          b (0.8)          1.1
//!   |  Region A   |    Region B    |    Region C    |
//!   | rectifier,  | rectifier fades| comparator at  |
//!   | fold point  | out, comparator| full gain,     |
//!   | sweeps 0->1 | fades in       | threshold moves|
//! ```
//!
//! `map_parameters` is a pure function of the position; the oscillator calls
//! it once per sample and consumes the result immediately.

use tracing::warn;

use crate::ConfigError;

/// Default boundary between Region A and Region B.
pub const DEFAULT_SPLIT_A: f64 = 0.4;
/// Default boundary between Region B and Region C.
pub const DEFAULT_SPLIT_B: f64 = 0.8;

/// Upper bound (exclusive) for the second split point.
///
/// Region C divides by `1.2 - b`.
pub const SPLIT_B_LIMIT: f64 = 1.2;

/// The two boundaries of the control axis.
///
/// Constructed through [`SplitPoints::new`], which rejects any pair that
/// would make one of the region formulas divide by zero or by a negative
/// span. The per-sample path relies on that and does no checking of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitPoints {
    a: f64,
    b: f64,
}

impl SplitPoints {
    /// Creates a validated pair of split points.
    ///
    /// Requires `0 < a < b < 1.2`, all finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use morphwave::SplitPoints;
    ///
    /// let splits = SplitPoints::new(0.3, 0.9).unwrap();
    /// assert_eq!(splits.a(), 0.3);
    ///
    /// // Region C would divide by zero
    /// assert!(SplitPoints::new(0.4, 1.2).is_err());
    /// ```
    pub fn new(a: f64, b: f64) -> Result<Self, ConfigError> {
        let result = Self::validate(a, b);
        if let Err(e) = &result {
            warn!(a, b, error = %e, "rejected split points");
        }
        result.map(|_| Self { a, b })
    }

    fn validate(a: f64, b: f64) -> Result<(), ConfigError> {
        if !a.is_finite() {
            return Err(ConfigError::NonFiniteSplitPoint(a));
        }
        if !b.is_finite() {
            return Err(ConfigError::NonFiniteSplitPoint(b));
        }
        if a <= 0.0 {
            return Err(ConfigError::SplitAOutOfRange(a));
        }
        if b <= a {
            return Err(ConfigError::SplitsOutOfOrder { a, b });
        }
        if b >= SPLIT_B_LIMIT {
            return Err(ConfigError::SplitBOutOfRange(b));
        }
        Ok(())
    }

    /// Boundary between Region A and Region B.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Boundary between Region B and Region C.
    pub fn b(&self) -> f64 {
        self.b
    }
}

impl Default for SplitPoints {
    fn default() -> Self {
        Self {
            a: DEFAULT_SPLIT_A,
            b: DEFAULT_SPLIT_B,
        }
    }
}

/// One of the three shaping regimes of the control axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// `position < a`: pure rectifier, fold point sweeping up
    A,
    /// `a <= position <= b`: rectifier to comparator crossfade
    B,
    /// `position > b`: pure comparator, threshold sweeping
    C,
}

impl Region {
    /// Classifies a control position.
    pub fn of(position: f64, splits: &SplitPoints) -> Self {
        if position < splits.a {
            Region::A
        } else if position <= splits.b {
            Region::B
        } else {
            Region::C
        }
    }
}

/// Thresholds and gains for both shaping stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParams {
    pub rect_threshold: f64,
    pub rect_gain: f64,
    pub comp_threshold: f64,
    pub comp_gain: f64,
}

impl ShapeParams {
    /// Total gain across both stages.
    ///
    /// Equals 1.0 everywhere on the nominal control range.
    pub fn total_gain(&self) -> f64 {
        self.rect_gain + self.comp_gain
    }
}

/// Neutral setting: half-way fold, rectifier only.
impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            rect_threshold: 0.5,
            rect_gain: 1.0,
            comp_threshold: 0.0,
            comp_gain: 0.0,
        }
    }
}

/// Maps a control position to the shaping parameters of its region.
///
/// No clamping is done: positions outside the nominal `[0, 1.1]` range
/// produce whatever the region formulas give.
///
/// # Examples
///
/// ```
/// use morphwave::{SplitPoints, map_parameters};
///
/// let params = map_parameters(0.6, &SplitPoints::default());
/// assert_eq!(params.rect_threshold, 1.0);
/// assert!((params.rect_gain - 0.5).abs() < 1e-12);
/// assert!((params.comp_gain - 0.5).abs() < 1e-12);
/// ```
#[inline]
pub fn map_parameters(position: f64, splits: &SplitPoints) -> ShapeParams {
    let SplitPoints { a, b } = *splits;

    match Region::of(position, splits) {
        Region::A => ShapeParams {
            rect_threshold: position / a,
            rect_gain: 1.0,
            comp_threshold: 0.0,
            comp_gain: 0.0,
        },
        Region::B => {
            let t = (position - a) / (b - a);
            ShapeParams {
                rect_threshold: 1.0,
                rect_gain: 1.0 - t,
                comp_threshold: 0.0,
                comp_gain: t,
            }
        }
        Region::C => {
            // Not monotonic in the position; -1.25 at the boundary with the
            // default splits.
            let t = (b - position - 0.5 - 0.6 * (position - b)) / (SPLIT_B_LIMIT - b);
            ShapeParams {
                rect_threshold: 1.0,
                rect_gain: 0.0,
                comp_threshold: t,
                comp_gain: 1.0,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn map(position: f64) -> ShapeParams {
        map_parameters(position, &SplitPoints::default())
    }

    #[test]
    fn test_zero_is_pure_rectifier() {
        let p = map(0.0);
        assert_eq!(p.rect_threshold, 0.0);
        assert_eq!(p.rect_gain, 1.0);
        assert_eq!(p.comp_threshold, 0.0);
        assert_eq!(p.comp_gain, 0.0);
    }

    #[test]
    fn test_region_a_sweeps_fold_point() {
        assert!((map(0.1).rect_threshold - 0.25).abs() < EPS);
        assert!((map(0.2).rect_threshold - 0.5).abs() < EPS);
        assert!((map(0.3).rect_threshold - 0.75).abs() < EPS);
    }

    #[test]
    fn test_continuous_at_split_a() {
        let below = map(DEFAULT_SPLIT_A - 1e-9);
        let at = map(DEFAULT_SPLIT_A);

        assert_eq!(Region::of(DEFAULT_SPLIT_A - 1e-9, &SplitPoints::default()), Region::A);
        assert_eq!(Region::of(DEFAULT_SPLIT_A, &SplitPoints::default()), Region::B);

        assert!((below.rect_gain - 1.0).abs() < EPS);
        assert!((at.rect_gain - 1.0).abs() < EPS);
        assert!((below.rect_threshold - at.rect_threshold).abs() < 1e-8);
        assert!((below.comp_gain - at.comp_gain).abs() < EPS);
    }

    #[test]
    fn test_region_b_crossfade() {
        let p = map(0.7);
        assert_eq!(p.rect_threshold, 1.0);
        assert!((p.rect_gain - 0.25).abs() < EPS);
        assert!((p.comp_gain - 0.75).abs() < EPS);
        assert_eq!(p.comp_threshold, 0.0);
    }

    #[test]
    fn test_comp_gain_continuous_at_split_b() {
        let end_of_b = map(DEFAULT_SPLIT_B);
        let start_of_c = map(DEFAULT_SPLIT_B + 1e-9);

        assert_eq!(Region::of(DEFAULT_SPLIT_B, &SplitPoints::default()), Region::B);
        assert_eq!(Region::of(DEFAULT_SPLIT_B + 1e-9, &SplitPoints::default()), Region::C);

        assert!((end_of_b.comp_gain - 1.0).abs() < EPS);
        assert_eq!(start_of_c.comp_gain, 1.0);
        assert!(end_of_b.rect_gain.abs() < EPS);
        assert_eq!(start_of_c.rect_gain, 0.0);
    }

    #[test]
    fn test_region_c_threshold_formula() {
        // (0.8 - 0.8 - 0.5 - 0) / 0.4
        let near_b = map(DEFAULT_SPLIT_B + 1e-12);
        assert!((near_b.comp_threshold + 1.25).abs() < 1e-9);

        // (0.8 - 1.1 - 0.5 - 0.6 * 0.3) / 0.4
        let top = map(1.1);
        assert!((top.comp_threshold + 2.45).abs() < 1e-9);
    }

    #[test]
    fn test_total_gain_is_unity() {
        for i in 0..=110 {
            let position = f64::from(i) / 100.0;
            assert!((map(position).total_gain() - 1.0).abs() < EPS, "at {}", position);
        }
    }

    #[test]
    fn test_custom_splits() {
        let splits = SplitPoints::new(0.2, 1.0).unwrap();
        let p = map_parameters(0.1, &splits);
        assert!((p.rect_threshold - 0.5).abs() < EPS);

        let p = map_parameters(0.6, &splits);
        assert!((p.comp_gain - 0.5).abs() < EPS);

        // (1.0 - 1.1 - 0.5 - 0.06) / 0.2
        let p = map_parameters(1.1, &splits);
        assert!((p.comp_threshold + 3.3).abs() < 1e-9);
    }

    #[test]
    fn test_split_validation() {
        assert!(SplitPoints::new(0.4, 0.8).is_ok());
        assert_eq!(
            SplitPoints::new(0.0, 0.8),
            Err(ConfigError::SplitAOutOfRange(0.0))
        );
        assert_eq!(
            SplitPoints::new(0.5, 0.5),
            Err(ConfigError::SplitsOutOfOrder { a: 0.5, b: 0.5 })
        );
        assert_eq!(
            SplitPoints::new(0.4, 1.2),
            Err(ConfigError::SplitBOutOfRange(1.2))
        );
        assert!(matches!(
            SplitPoints::new(f64::NAN, 0.8),
            Err(ConfigError::NonFiniteSplitPoint(_))
        ));
        assert!(matches!(
            SplitPoints::new(0.4, f64::INFINITY),
            Err(ConfigError::NonFiniteSplitPoint(_))
        ));
    }

    #[test]
    fn test_default_shape_params() {
        let p = ShapeParams::default();
        assert_eq!(p.rect_threshold, 0.5);
        assert_eq!(p.rect_gain, 1.0);
        assert_eq!(p.comp_threshold, 0.0);
        assert_eq!(p.comp_gain, 0.0);
    }
}
