//! Core types for histogram representation

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of values in this bin
    pub count: usize,
    /// Density (count / (total_count * bin_width))
    pub density: f64,
}

impl HistogramBin {
    /// Create a new histogram bin
    pub fn new(left: f64, right: f64, count: usize, total_count: usize) -> Self {
        let width = right - left;
        let density = if width > 0.0 && total_count > 0 {
            count as f64 / (total_count as f64 * width)
        } else {
            0.0
        };

        Self {
            left,
            right,
            count,
            density,
        }
    }

    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Check if a value falls within this bin (right edge excluded)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.left && value < self.right
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}, density={:.3}",
            self.left, self.right, self.count, self.density
        )
    }
}

/// A histogram representation of data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// The bins that make up the histogram
    bins: Vec<HistogramBin>,
    /// Total number of data points
    total_count: usize,
    /// Minimum value in the data
    min: f64,
    /// Maximum value in the data
    max: f64,
}

impl Histogram {
    /// Create a new histogram
    pub fn new(bins: Vec<HistogramBin>, total_count: usize, min: f64, max: f64) -> Self {
        Self {
            bins,
            total_count,
            min,
            max,
        }
    }

    /// Create a histogram from `k + 1` edges and `k` counts
    ///
    /// Returns `None` when the lengths do not line up.
    pub fn from_edges(edges: &[f64], counts: &[usize], min: f64, max: f64) -> Option<Self> {
        if edges.len() != counts.len() + 1 {
            return None;
        }
        let total: usize = counts.iter().sum();
        let bins = edges
            .windows(2)
            .zip(counts)
            .map(|(edge, &count)| HistogramBin::new(edge[0], edge[1], count, total))
            .collect();
        Some(Self::new(bins, total, min, max))
    }

    /// Get the bins
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram is empty
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Get the total count of data points
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Get the minimum value
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Get the maximum value
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Get the range of the data
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Find which bin contains a given value
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        // Last bin includes its right boundary
        if let Some(last) = self.bins.last() {
            if value == last.right {
                return Some(self.bins.len() - 1);
            }
        }

        self.bins.iter().position(|bin| bin.contains(value))
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Get densities as a vector
    pub fn densities(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.density).collect()
    }

    /// Get bin centers as a vector
    pub fn centers(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.center()).collect()
    }

    /// Get bin edges (including rightmost edge)
    pub fn edges(&self) -> Vec<f64> {
        let mut edges: Vec<f64> = self.bins.iter().map(|bin| bin.left).collect();
        if let Some(last) = self.bins.last() {
            edges.push(last.right);
        }
        edges
    }

    /// Integral of the density over all bins (one for a non-empty histogram)
    pub fn total_mass(&self) -> f64 {
        self.bins.iter().map(|bin| bin.density * bin.width()).sum()
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Histogram({} bins, n={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.total_count,
            self.min,
            self.max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_histogram_bin() {
        let bin = HistogramBin::new(0.0, 1.0, 5, 10);
        assert_eq!(bin.center(), 0.5);
        assert_eq!(bin.width(), 1.0);
        assert!(bin.contains(0.5));
        assert!(!bin.contains(1.0)); // Right edge is exclusive
        assert_eq!(bin.density, 0.5); // 5 / (10 * 1.0)
    }

    #[test]
    fn test_zero_width_bin_has_zero_density() {
        let bin = HistogramBin::new(2.0, 2.0, 3, 3);
        assert_eq!(bin.density, 0.0);
    }

    #[test]
    fn test_histogram() {
        let bins = vec![
            HistogramBin::new(0.0, 1.0, 2, 10),
            HistogramBin::new(1.0, 2.0, 5, 10),
            HistogramBin::new(2.0, 3.0, 3, 10),
        ];
        let hist = Histogram::new(bins, 10, 0.0, 3.0);

        assert_eq!(hist.len(), 3);
        assert_eq!(hist.total_count(), 10);
        assert_eq!(hist.range(), 3.0);
        assert_eq!(hist.find_bin(1.5), Some(1));
        assert_eq!(hist.find_bin(3.0), Some(2)); // Last bin includes right edge
        assert_eq!(hist.find_bin(3.5), None);
        assert_eq!(hist.counts(), vec![2, 5, 3]);
        assert_eq!(hist.edges(), vec![0.0, 1.0, 2.0, 3.0]);
        assert_relative_eq!(hist.total_mass(), 1.0);
    }

    #[test]
    fn test_from_edges() {
        let hist = Histogram::from_edges(&[1.0, 3.0, 5.0], &[3, 6], 1.0, 5.0).unwrap();
        assert_eq!(hist.total_count(), 9);
        assert_eq!(hist.edges(), vec![1.0, 3.0, 5.0]);
        assert_relative_eq!(hist.densities()[1], 6.0 / 18.0);
        assert_eq!(hist.centers(), vec![2.0, 4.0]);

        assert!(Histogram::from_edges(&[1.0, 2.0], &[1, 1], 1.0, 2.0).is_none());
    }
}
