//! Core traits for histogram building

use crate::types::Histogram;
use binning_core::{Result, Sample};

/// Trait for building histograms from a validated sample
pub trait HistogramBuilder {
    /// Build a histogram from the given sample
    fn build(&self, sample: &Sample) -> Result<Histogram>;

    /// Build a histogram from raw values, treating `NaN` as missing
    fn build_raw(&self, raw: &[f64]) -> Result<Histogram> {
        self.build(&Sample::new(raw)?)
    }

    /// Get the target number of bins (if known)
    fn target_bins(&self) -> Option<usize> {
        None
    }
}
