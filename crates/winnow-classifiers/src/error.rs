use std::error::Error;
use std::fmt;

/// Errors raised by the online classifiers and their configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum WinnowError {
    /// Feature vector length does not match the model dimensionality.
    DimensionMismatch { expected: usize, got: usize },
    /// A model cannot be built over zero features.
    ZeroDimension,
    /// The model has no weights yet.
    Uninitialized,
    /// Positive and negative weight vectors must have equal length.
    WeightLengthMismatch { positive: usize, negative: usize },
    InvalidPromotion(f64),
    InvalidDemotion(f64),
    InvalidThreshold(f64),
}

impl fmt::Display for WinnowError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WinnowError::DimensionMismatch { expected, got } => {
                write!(f, "dimension mismatch: expected {} features, got {}", expected, got)
            }
            WinnowError::ZeroDimension => write!(f, "feature vectors must have at least one feature"),
            WinnowError::Uninitialized => write!(f, "model weights are not initialized"),
            WinnowError::WeightLengthMismatch { positive, negative } => write!(
                f,
                "positive and negative weights must have equal length (got {} and {})",
                positive, negative
            ),
            WinnowError::InvalidPromotion(value) => {
                write!(f, "promotion must be finite and > 1.0, got {}", value)
            }
            WinnowError::InvalidDemotion(value) => {
                write!(f, "demotion must be in (0.0, 1.0), got {}", value)
            }
            WinnowError::InvalidThreshold(value) => {
                write!(f, "threshold must be finite, got {}", value)
            }
        }
    }
}

impl Error for WinnowError {}

/// Result type for classifier operations.
pub type Result<T> = std::result::Result<T, WinnowError>;
