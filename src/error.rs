//! Error types for configuration and offline rendering.
//!
//! The per-sample path never fails; errors only come out of the places
//! where a caller hands in configuration or asks for file output.

use std::fmt;

/// Error returned when oscillator or parameter configuration is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A split point is NaN or infinite
    NonFiniteSplitPoint(f64),
    /// The rectifier/crossfade boundary must be strictly positive
    SplitAOutOfRange(f64),
    /// The crossfade/comparator boundary must lie strictly above the first one
    SplitsOutOfOrder { a: f64, b: f64 },
    /// The crossfade/comparator boundary must stay below 1.2
    SplitBOutOfRange(f64),
    /// A parameter range with `min >= max` or a non-positive step
    InvalidRange { min: f64, max: f64, step: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonFiniteSplitPoint(v) => {
                write!(f, "split point must be finite, got {}", v)
            }
            ConfigError::SplitAOutOfRange(a) => {
                write!(f, "first split point must be greater than 0, got {}", a)
            }
            ConfigError::SplitsOutOfOrder { a, b } => write!(
                f,
                "second split point ({}) must be greater than the first ({})",
                b, a
            ),
            ConfigError::SplitBOutOfRange(b) => {
                write!(f, "second split point must be less than 1.2, got {}", b)
            }
            ConfigError::InvalidRange { min, max, step } => write!(
                f,
                "invalid parameter range [{}, {}] with step {}",
                min, max, step
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Error returned by the WAV renderer.
#[cfg(feature = "wav-export")]
#[derive(Debug)]
pub enum ExportError {
    /// Writing the file failed
    Wav(hound::Error),
    /// A render of zero samples was requested
    EmptyRender,
}

#[cfg(feature = "wav-export")]
impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Wav(e) => write!(f, "failed to write WAV file: {}", e),
            ExportError::EmptyRender => write!(f, "render length is zero samples"),
        }
    }
}

#[cfg(feature = "wav-export")]
impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Wav(e) => Some(e),
            ExportError::EmptyRender => None,
        }
    }
}

#[cfg(feature = "wav-export")]
impl From<hound::Error> for ExportError {
    fn from(e: hound::Error) -> Self {
        ExportError::Wav(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ConfigError::SplitBOutOfRange(1.2).to_string(),
            "second split point must be less than 1.2, got 1.2"
        );
        assert_eq!(
            ConfigError::SplitsOutOfOrder { a: 0.8, b: 0.4 }.to_string(),
            "second split point (0.4) must be greater than the first (0.8)"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&ConfigError::SplitAOutOfRange(0.0));
    }
}
