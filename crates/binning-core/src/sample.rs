//! Sample preprocessing
//!
//! A [`Sample`] is the validated form of a raw univariate input: missing
//! markers removed, values sorted ascending, and the summary statistics the
//! binning search needs computed exactly once.

use crate::{Error, Result};
use std::fmt;
use tracing::warn;

/// A cleaned, non-empty, sorted univariate sample
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
    min: f64,
    max: f64,
    mean: f64,
    missing: usize,
}

impl Sample {
    /// Build a sample from raw values, treating `NaN` as a missing marker
    ///
    /// Infinite values are rejected rather than dropped, as are samples whose
    /// range `max - min` overflows.
    pub fn new(raw: &[f64]) -> Result<Self> {
        Self::from_observations(raw.iter().map(|&x| if x.is_nan() { None } else { Some(x) }))
    }

    /// Build a sample from optional values, treating `None` (and `NaN`) as missing
    pub fn from_options(raw: &[Option<f64>]) -> Result<Self> {
        Self::from_observations(raw.iter().map(|x| x.filter(|v| !v.is_nan())))
    }

    fn from_observations<I>(observations: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let mut values = Vec::new();
        let mut missing = 0;

        for (index, observation) in observations.into_iter().enumerate() {
            match observation {
                None => missing += 1,
                Some(value) if value.is_infinite() => {
                    return Err(Error::NonFinite { index, value });
                }
                Some(value) => values.push(value),
            }
        }

        if values.is_empty() {
            return Err(Error::empty_sample(missing));
        }
        if missing > 0 {
            warn!("Dropped {} missing values, {} observations remain", missing, values.len());
        }

        values.sort_by(|a, b| a.total_cmp(b));

        let min = values[0];
        let max = values[values.len() - 1];
        if !(max - min).is_finite() {
            return Err(Error::range_overflow(min, max));
        }
        let mean = mean_of(&values);

        Ok(Self {
            values,
            min,
            max,
            mean,
            missing,
        })
    }

    /// Sorted observations
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of usable observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; a sample holds at least one observation
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// `max - min`
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Number of missing markers removed during preprocessing
    pub fn missing(&self) -> usize {
        self.missing
    }

    /// True when every observation is identical
    pub fn is_degenerate(&self) -> bool {
        self.range() <= 0.0
    }

    /// Fail with [`Error::DegenerateSample`] when the range is zero
    pub fn require_spread(&self) -> Result<()> {
        if self.is_degenerate() {
            return Err(Error::degenerate(self.min, self.len()));
        }
        Ok(())
    }
}

/// Arithmetic mean, scaling before summing when the plain sum overflows
fn mean_of(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let total: f64 = values.iter().sum();
    if total.is_finite() {
        total / n
    } else {
        values.iter().map(|x| x / n).sum()
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sample(n={}, range=[{:.3}, {:.3}], mean={:.3})",
            self.len(),
            self.min,
            self.max,
            self.mean
        )
    }
}
