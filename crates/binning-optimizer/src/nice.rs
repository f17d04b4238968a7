//! Search over "nice" bin widths
//!
//! Instead of enumerating bin counts, this search walks a ladder of widths
//! with mantissas 1, 2, 2.5 and 5 in each decade. Every width is laid out with
//! [`NiceLayout`], so edges land on multiples of the width, and scored with the
//! same criterion as the bin-count search.

use crate::optimizer::single_bin;
use crate::options::{DegeneratePolicy, NiceWidthOptions};
use crate::types::{select_best, BinningResult, Evaluation};
use binning_core::{Error, Result, Sample};
use binning_histogram::NiceLayout;
use num_traits::ToPrimitive;
use tracing::{debug, instrument, trace};

const MANTISSAS: [f64; 4] = [1.0, 2.0, 2.5, 5.0];

/// Widths `m * 10^p` from `10^floor(log10(lower))` up to `10^ceil(log10(upper))`
///
/// Empty when either bound is not a positive finite number.
pub fn width_ladder(lower: f64, upper: f64) -> Vec<f64> {
    let (Some(first), Some(last)) = (decade_floor(lower), decade_ceil(upper)) else {
        return Vec::new();
    };
    let limit = 10f64.powi(last);

    let mut widths = Vec::new();
    for exponent in first..=last {
        let decade = 10f64.powi(exponent);
        for mantissa in MANTISSAS {
            let width = mantissa * decade;
            if width > limit {
                return widths;
            }
            widths.push(width);
        }
    }
    widths
}

fn decade_floor(x: f64) -> Option<i32> {
    if !(x.is_finite() && x > 0.0) {
        return None;
    }
    x.log10().floor().to_i32()
}

fn decade_ceil(x: f64) -> Option<i32> {
    if !(x.is_finite() && x > 0.0) {
        return None;
    }
    x.log10().ceil().to_i32()
}

/// Selects the nice bin width with the lowest criterion cost
#[derive(Debug, Clone, Copy, Default)]
pub struct NiceWidthOptimizer {
    options: NiceWidthOptions,
}

impl NiceWidthOptimizer {
    pub fn new(options: NiceWidthOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NiceWidthOptions {
        &self.options
    }

    /// Resolved `(min_bins, max_bins)` for a sample of `n` observations
    pub fn bin_bounds(&self, n: usize) -> Result<(usize, usize)> {
        let min_bins = self.options.min_bins;
        if min_bins == 0 {
            return Err(Error::non_positive("min_bins"));
        }
        let max_bins = self.options.max_bins.unwrap_or(n / 2);
        if min_bins > max_bins {
            return Err(Error::InvalidRange {
                k_min: min_bins,
                k_max: max_bins,
            });
        }
        Ok((min_bins, max_bins))
    }

    /// Run the search
    #[instrument(skip(self, sample), fields(n = sample.len(), criterion = %self.options.criterion))]
    pub fn optimize(&self, sample: &Sample) -> Result<BinningResult> {
        let (min_bins, max_bins) = self.bin_bounds(sample.len())?;

        if sample.is_degenerate() {
            return match self.options.degenerate {
                DegeneratePolicy::Reject => Err(Error::degenerate(sample.min(), sample.len())),
                DegeneratePolicy::SingleBin => Ok(single_bin(sample, self.options.criterion)),
            };
        }

        let range = sample.range();
        let widths = width_ladder(range / max_bins as f64, range / min_bins as f64);
        debug!(
            "Searching {} widths for bin counts in [{}, {}]",
            widths.len(),
            min_bins,
            max_bins
        );

        let trace: Vec<Evaluation> = widths
            .iter()
            .filter_map(|&width| {
                let layout = NiceLayout::new(sample, width)?;
                if layout.bins < min_bins || layout.bins > max_bins {
                    trace!(width, bins = layout.bins, "Width outside bin bounds");
                    return None;
                }
                let score = self.options.criterion.cost(&layout.counts(sample), width);
                trace!(width, bins = layout.bins, score, "Evaluated width");
                Some(Evaluation {
                    k: layout.bins,
                    width,
                    score,
                })
            })
            .collect();

        let no_candidates = Error::NoCandidates {
            k_min: min_bins,
            k_max: max_bins,
            n: sample.len(),
        };
        let best = *select_best(&trace).ok_or_else(|| no_candidates.clone())?;
        let layout = NiceLayout::new(sample, best.width).ok_or(no_candidates)?;

        debug!(
            "Selected width={} (k={}, score={:.6}) from {} widths",
            best.width,
            best.k,
            best.score,
            trace.len()
        );

        Ok(BinningResult {
            k: layout.bins,
            width: best.width,
            edges: layout.edges(),
            counts: layout.counts(sample),
            score: best.score,
            criterion: self.options.criterion,
            trace,
        })
    }
}
