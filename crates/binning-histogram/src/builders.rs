//! Histogram building strategies and the bin assignment rule they share

use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use binning_core::{Error, Result, Sample};
use num_traits::ToPrimitive;

/// Index of the bin holding `value` on a grid starting at `origin`
///
/// Bins are left-closed and right-open; anything at or beyond the right end
/// of the grid is clamped into the last bin, anything left of `origin` into
/// the first.
pub fn bin_index(value: f64, origin: f64, width: f64, bins: usize) -> usize {
    let last = bins.saturating_sub(1);
    let position = ((value - origin) / width).floor();
    if position <= 0.0 {
        return 0;
    }
    position.to_usize().map_or(last, |index| index.min(last))
}

/// Index of the bin delimited by `edges` that holds `value`
///
/// Bins are `[edges[i], edges[i + 1])`, the last one also closed on the right.
/// The arithmetic guess from [`bin_index`] is corrected against the edges
/// themselves, since `origin + i * width` and `(value - origin) / width` round
/// differently at bin boundaries.
pub fn edge_index(value: f64, edges: &[f64]) -> usize {
    let bins = edges.len().saturating_sub(1);
    if bins <= 1 {
        return 0;
    }
    let origin = edges[0];
    let width = (edges[bins] - origin) / bins as f64;

    let mut index = bin_index(value, origin, width, bins);
    while index > 0 && value < edges[index] {
        index -= 1;
    }
    while index + 1 < bins && value >= edges[index + 1] {
        index += 1;
    }
    index
}

/// Count how many values fall in each bin delimited by `edges`
pub fn occupancy(values: &[f64], edges: &[f64]) -> Vec<usize> {
    let mut counts = vec![0; edges.len().saturating_sub(1)];
    if counts.is_empty() {
        return counts;
    }
    for &value in values {
        counts[edge_index(value, edges)] += 1;
    }
    counts
}

/// Edges of `bins` equal-width bins over `[min, max]`
///
/// The last edge is exactly `max` so the final bin closes on the maximum.
pub fn equal_width_edges(min: f64, max: f64, bins: usize) -> Vec<f64> {
    let width = (max - min) / bins as f64;
    let mut edges: Vec<f64> = (0..bins).map(|i| min + i as f64 * width).collect();
    edges.push(max);
    edges
}

/// Whether every edge is strictly greater than the one before it
pub fn strictly_increasing(edges: &[f64]) -> bool {
    edges.windows(2).all(|pair| pair[0] < pair[1])
}

/// Fixed-count, equal-width histogram builder
///
/// Creates `bins` equal-width bins spanning exactly `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EqualWidthBuilder {
    bins: usize,
}

impl EqualWidthBuilder {
    /// Create a new equal-width histogram builder
    pub fn new(bins: usize) -> Self {
        Self { bins: bins.max(1) }
    }

    pub fn bins(&self) -> usize {
        self.bins
    }
}

impl HistogramBuilder for EqualWidthBuilder {
    fn build(&self, sample: &Sample) -> Result<Histogram> {
        let (min, max, n) = (sample.min(), sample.max(), sample.len());

        if sample.is_degenerate() {
            // All values are the same
            let bin = HistogramBin::new(min, max, n, n);
            return Ok(Histogram::new(vec![bin], n, min, max));
        }

        let edges = equal_width_edges(min, max, self.bins);
        let counts = occupancy(sample.values(), &edges);

        Histogram::from_edges(&edges, &counts, min, max)
            .ok_or_else(|| Error::InvalidParameter("edge and count lengths disagree".to_string()))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.bins)
    }
}

/// Placement of equal-width bins whose edges are multiples of the width
///
/// The grid is anchored at the multiple of `width` nearest the sample mean and
/// extended left and right until it covers `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NiceLayout {
    /// Grid point nearest the sample mean
    pub centre: f64,
    /// Bins left of the centre
    pub left: usize,
    pub width: f64,
    pub bins: usize,
}

impl NiceLayout {
    /// Lay out bins of `width` over the sample
    ///
    /// Returns `None` for a non-positive or non-finite width, a degenerate
    /// sample, or a grid whose outer edges overflow.
    pub fn new(sample: &Sample, width: f64) -> Option<Self> {
        if !(width.is_finite() && width > 0.0) || sample.is_degenerate() {
            return None;
        }

        let centre = width * (sample.mean() / width).round();
        let mut left = ((centre - sample.min()) / width).ceil().max(0.0).to_usize()?;
        let mut right = ((sample.max() - centre) / width).ceil().max(0.0).to_usize()?;

        // Rounding in the divisions can leave an end a hair inside the data
        if centre - left as f64 * width > sample.min() {
            left += 1;
        }
        if centre + right as f64 * width < sample.max() {
            right += 1;
        }
        let (first, last) = (centre - left as f64 * width, centre + right as f64 * width);
        if !(first.is_finite() && last.is_finite()) {
            return None;
        }

        let bins = left + right;
        if bins == 0 {
            return None;
        }

        Some(Self {
            centre,
            left,
            width,
            bins,
        })
    }

    /// Left edge of the first bin
    pub fn origin(&self) -> f64 {
        self.edge(0)
    }

    fn edge(&self, i: usize) -> f64 {
        self.centre + (i as f64 - self.left as f64) * self.width
    }

    /// All `bins + 1` edges, each a multiple of the width
    pub fn edges(&self) -> Vec<f64> {
        (0..=self.bins).map(|i| self.edge(i)).collect()
    }

    /// Occupancy of each bin for the sample
    pub fn counts(&self, sample: &Sample) -> Vec<usize> {
        occupancy(sample.values(), &self.edges())
    }
}

/// Histogram builder with a fixed, "nice" bin width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NiceWidthBuilder {
    width: f64,
}

impl NiceWidthBuilder {
    pub fn new(width: f64) -> Self {
        Self { width }
    }
}

impl HistogramBuilder for NiceWidthBuilder {
    fn build(&self, sample: &Sample) -> Result<Histogram> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "bin width must be positive and finite, got {}",
                self.width
            )));
        }
        sample.require_spread()?;

        let layout = NiceLayout::new(sample, self.width).ok_or_else(|| {
            Error::InvalidParameter(format!("bin width {} cannot cover the sample", self.width))
        })?;
        let counts = layout.counts(sample);

        Histogram::from_edges(&layout.edges(), &counts, sample.min(), sample.max())
            .ok_or_else(|| Error::InvalidParameter("edge and count lengths disagree".to_string()))
    }
}
