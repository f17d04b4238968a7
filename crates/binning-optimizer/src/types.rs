//! Result types for the binning searches

use crate::criterion::Criterion;
use binning_histogram::Histogram;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One point of the search curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Number of bins
    pub k: usize,
    /// Bin width
    pub width: f64,
    /// Cost under the search criterion (lower is better)
    pub score: f64,
}

impl Evaluation {
    /// Whether this evaluation should replace `incumbent` as the best so far
    ///
    /// Lower scores win; exact ties go to the smaller bin count. `NaN` never
    /// improves on anything.
    pub fn improves_on(&self, incumbent: &Evaluation) -> bool {
        self.score < incumbent.score || (self.score == incumbent.score && self.k < incumbent.k)
    }
}

/// Pick the best evaluation of a search curve
pub fn select_best(trace: &[Evaluation]) -> Option<&Evaluation> {
    trace
        .iter()
        .filter(|evaluation| !evaluation.score.is_nan())
        .fold(None, |best, evaluation| match best {
            Some(incumbent) if !evaluation.improves_on(incumbent) => Some(incumbent),
            _ => Some(evaluation),
        })
}

/// A single candidate binning, fully materialized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateBinning {
    pub k: usize,
    pub width: f64,
    /// `k + 1` bin edges
    pub edges: Vec<f64>,
    /// Occupancy of each bin
    pub counts: Vec<usize>,
    pub score: f64,
}

/// Outcome of a binning search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinningResult {
    /// Selected number of bins
    pub k: usize,
    /// Selected bin width
    pub width: f64,
    /// `k + 1` bin edges
    pub edges: Vec<f64>,
    /// Occupancy of each bin, summing to the sample size
    pub counts: Vec<usize>,
    /// Cost of the selected binning; `NaN` for the single-bin fallback
    pub score: f64,
    /// Criterion the search minimized
    pub criterion: Criterion,
    /// Every evaluated candidate in search order
    pub trace: Vec<Evaluation>,
}

impl BinningResult {
    /// Number of observations binned
    pub fn n(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Density histogram of the selected binning
    pub fn histogram(&self) -> Histogram {
        let min = self.edges.first().copied().unwrap_or(0.0);
        let max = self.edges.last().copied().unwrap_or(0.0);
        Histogram::from_edges(&self.edges, &self.counts, min, max)
            .unwrap_or_else(|| Histogram::new(Vec::new(), self.n(), min, max))
    }

    /// The `(k, score)` search curve
    pub fn curve(&self) -> Vec<(usize, f64)> {
        self.trace.iter().map(|e| (e.k, e.score)).collect()
    }
}

impl From<BinningResult> for CandidateBinning {
    fn from(result: BinningResult) -> Self {
        Self {
            k: result.k,
            width: result.width,
            edges: result.edges,
            counts: result.counts,
            score: result.score,
        }
    }
}

impl fmt::Display for BinningResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BinningResult(k={}, width={:.4}, score={:.4}, criterion={}, candidates={})",
            self.k,
            self.width,
            self.score,
            self.criterion,
            self.trace.len()
        )
    }
}
