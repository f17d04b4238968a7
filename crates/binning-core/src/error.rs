//! Error types for optimal binning
//!
//! Provides a unified error type for all binning crates.

use thiserror::Error;

/// Core error type for binning operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// No usable observations remain after removing missing values
    #[error("Empty sample: no usable observations ({missing} missing values removed)")]
    EmptySample { missing: usize },

    /// Every observation has the same value, so the range is zero
    #[error("Degenerate sample: all {n} observations equal {value}")]
    DegenerateSample { value: f64, n: usize },

    /// Candidate bounds are inverted
    #[error("Invalid range: minimum bin count {k_min} exceeds maximum bin count {k_max}")]
    InvalidRange { k_min: usize, k_max: usize },

    /// No candidate survived resolution and filtering
    #[error("No candidates: bin counts in [{k_min}, {k_max}] are not usable for a sample of {n} observations")]
    NoCandidates { k_min: usize, k_max: usize, n: usize },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Infinite observation in the input
    #[error("Non-finite observation {value} at index {index}")]
    NonFinite { index: usize, value: f64 },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an empty sample
    pub fn empty_sample(missing: usize) -> Self {
        Self::EmptySample { missing }
    }

    /// Create an error for a zero-range sample
    pub fn degenerate(value: f64, n: usize) -> Self {
        Self::DegenerateSample { value, n }
    }

    /// Create an error for a sample whose range does not fit in an `f64`
    pub fn range_overflow(min: f64, max: f64) -> Self {
        Self::InvalidParameter(format!("sample range [{min}, {max}] overflows f64"))
    }

    /// Create an error for a parameter that must be positive
    pub fn non_positive(name: &str) -> Self {
        Self::InvalidParameter(format!("{name} must be at least 1"))
    }
}
