//! Host-facing parameters and level conversion.
//!
//! The oscillator itself only sees a control position and an amplitude.
//! These descriptors describe how a host exposes them: the "Wave Form"
//! control becomes the position, the "Output Level" control in dB becomes
//! the amplitude through [`decibels_to_gain`].

use tracing::warn;

use crate::ConfigError;

/// Levels at or below this are treated as silence.
pub const MINUS_INFINITY_DB: f64 = -100.0;

/// A bounded, stepped parameter range with a default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    min: f64,
    max: f64,
    step: f64,
    default: f64,
}

impl ParameterRange {
    /// Creates a range, rejecting `min >= max` and non-positive steps.
    ///
    /// The default is snapped into the range.
    ///
    /// # Examples
    ///
    /// ```
    /// use morphwave::ParameterRange;
    ///
    /// let range = ParameterRange::new(0.0, 1.0, 0.25, 0.4).unwrap();
    /// assert_eq!(range.default_value(), 0.5);
    /// assert!(ParameterRange::new(1.0, 0.0, 0.1, 0.5).is_err());
    /// ```
    pub fn new(min: f64, max: f64, step: f64, default: f64) -> Result<Self, ConfigError> {
        let valid = min.is_finite() && max.is_finite() && min < max && step > 0.0;
        if !valid {
            let error = ConfigError::InvalidRange { min, max, step };
            warn!(min, max, step, %error, "rejected parameter range");
            return Err(error);
        }

        let mut range = Self {
            min,
            max,
            step,
            default,
        };
        range.default = range.snap(default);
        Ok(range)
    }

    const fn known(min: f64, max: f64, step: f64, default: f64) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn default_value(&self) -> f64 {
        self.default
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamps `value` into the range and rounds it to the nearest step.
    ///
    /// NaN snaps to the default.
    pub fn snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    /// Position of `value` within the range, 0.0 at `min` and 1.0 at `max`.
    pub fn normalize(&self, value: f64) -> f64 {
        (value.clamp(self.min, self.max) - self.min) / (self.max - self.min)
    }

    /// Inverse of [`normalize`](Self::normalize), snapped to the step.
    pub fn denormalize(&self, normalized: f64) -> f64 {
        self.snap(self.min + normalized.clamp(0.0, 1.0) * (self.max - self.min))
    }
}

/// Description of one parameter as a host presents it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSpec {
    /// Stable identifier used by hosts and saved state
    pub id: &'static str,
    pub name: &'static str,
    /// Unit label shown next to the value
    pub label: &'static str,
    pub range: ParameterRange,
}

/// The control position: 0.0 to 1.1 in steps of 0.02.
pub const WAVE_FORM: ParameterSpec = ParameterSpec {
    id: "waveF",
    name: "Wave Form",
    label: "VCO",
    range: ParameterRange::known(0.0, 1.1, 0.02, 0.0),
};

/// The output level: -24 dB to +6 dB in steps of 0.1 dB.
pub const OUTPUT_LEVEL: ParameterSpec = ParameterSpec {
    id: "outputLevel",
    name: "Output Level",
    label: "dB",
    range: ParameterRange::known(-24.0, 6.0, 0.1, 0.0),
};

/// Every parameter the instrument exposes, in host order.
pub const PARAMETERS: [ParameterSpec; 2] = [OUTPUT_LEVEL, WAVE_FORM];

/// Converts a level in decibels to a linear gain.
///
/// # Examples
///
/// ```
/// use morphwave::decibels_to_gain;
///
/// assert_eq!(decibels_to_gain(0.0), 1.0);
/// assert!((decibels_to_gain(-6.0) - 0.501).abs() < 0.001);
/// assert_eq!(decibels_to_gain(-120.0), 0.0);
/// ```
pub fn decibels_to_gain(db: f64) -> f64 {
    if db > MINUS_INFINITY_DB {
        10.0_f64.powf(db / 20.0)
    } else {
        0.0
    }
}

/// Converts a linear gain to decibels, bottoming out at [`MINUS_INFINITY_DB`].
pub fn gain_to_decibels(gain: f64) -> f64 {
    if gain > 0.0 {
        (20.0 * gain.log10()).max(MINUS_INFINITY_DB)
    } else {
        MINUS_INFINITY_DB
    }
}
