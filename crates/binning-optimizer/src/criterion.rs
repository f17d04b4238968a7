//! Bin-width cost functions
//!
//! Every criterion maps an occupancy vector and its bin width to a cost where
//! **lower is better**. Criteria that are naturally maximized (Knuth's
//! posterior) are negated so the selector can treat all of them alike.
//!
//! # Shimazaki–Shinomoto
//!
//! With `m` the mean and `v` the biased (`1/k`) variance of the `k` occupancy
//! counts and `Δ` the width,
//!
//! ```text
//! C(Δ) = (2m − v) / Δ²
//! ```
//!
//! Minimizing `C` minimizes the expected L2 distance between the histogram
//! and the unknown density (Shimazaki & Shinomoto, *Neural Computation*
//! 19(6), 2007). It is the default criterion.
//!
//! # Least-squares cross-validation
//!
//! ```text
//! J(Δ) = 2 / ((n − 1)Δ) − (n + 1) / ((n − 1)Δ) · Σ (cᵢ / n)²
//! ```
//!
//! # Knuth
//!
//! Negated log-posterior of the bin count for a piecewise-constant density
//! (Knuth, 2006):
//!
//! ```text
//! −[ n ln k + lnΓ(k/2) − k lnΓ(1/2) − lnΓ(n + k/2) + Σ lnΓ(cᵢ + 1/2) ]
//! ```

use serde::{Deserialize, Serialize};
use statrs::function::gamma::ln_gamma;
use std::fmt;

/// Scoring formula for a candidate binning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Criterion {
    /// L2 risk estimate of Shimazaki & Shinomoto
    #[default]
    ShimazakiShinomoto,
    /// Least-squares cross-validation risk
    CrossValidation,
    /// Negated Knuth log-posterior
    Knuth,
}

impl Criterion {
    /// Cost of a binning with the given occupancy and bin width
    ///
    /// Returns `+inf` when the cost is undefined (no bins, zero width for the
    /// width-dependent criteria, fewer than two observations for
    /// cross-validation) so such candidates never win.
    pub fn cost(&self, counts: &[usize], width: f64) -> f64 {
        if counts.is_empty() {
            return f64::INFINITY;
        }
        match self {
            Criterion::ShimazakiShinomoto => shimazaki_shinomoto(counts, width),
            Criterion::CrossValidation => cross_validation(counts, width),
            Criterion::Knuth => knuth(counts),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Criterion::ShimazakiShinomoto => "shimazaki-shinomoto",
            Criterion::CrossValidation => "cross-validation",
            Criterion::Knuth => "knuth",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mean and biased variance of an occupancy vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OccupancyStats {
    /// Total number of observations
    pub n: usize,
    /// Number of bins
    pub bins: usize,
    pub mean: f64,
    /// Variance with divisor `bins`
    pub variance: f64,
}

impl OccupancyStats {
    /// Two-pass mean and variance; `None` for an empty vector
    pub fn from_counts(counts: &[usize]) -> Option<Self> {
        if counts.is_empty() {
            return None;
        }
        let n: usize = counts.iter().sum();
        let k = counts.len() as f64;
        let mean = n as f64 / k;
        let variance = counts
            .iter()
            .map(|&c| {
                let diff = c as f64 - mean;
                diff * diff
            })
            .sum::<f64>()
            / k;

        Some(Self {
            n,
            bins: counts.len(),
            mean,
            variance,
        })
    }
}

fn shimazaki_shinomoto(counts: &[usize], width: f64) -> f64 {
    if !(width > 0.0) {
        return f64::INFINITY;
    }
    match OccupancyStats::from_counts(counts) {
        Some(stats) => (2.0 * stats.mean - stats.variance) / (width * width),
        None => f64::INFINITY,
    }
}

fn cross_validation(counts: &[usize], width: f64) -> f64 {
    let n: usize = counts.iter().sum();
    if n < 2 || !(width > 0.0) {
        return f64::INFINITY;
    }
    let n_f = n as f64;
    let sum_sq: f64 = counts
        .iter()
        .map(|&c| {
            let p = c as f64 / n_f;
            p * p
        })
        .sum();
    (2.0 - (n_f + 1.0) * sum_sq) / ((n_f - 1.0) * width)
}

fn knuth(counts: &[usize]) -> f64 {
    let n = counts.iter().sum::<usize>() as f64;
    let k = counts.len() as f64;
    let occupancy: f64 = counts.iter().map(|&c| ln_gamma(c as f64 + 0.5)).sum();
    let log_posterior =
        n * k.ln() + ln_gamma(k / 2.0) - k * ln_gamma(0.5) - ln_gamma(n + k / 2.0) + occupancy;
    -log_posterior
}
