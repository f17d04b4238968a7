//! Optimal bin-width selection for unsupervised equal-width binning
//!
//! Given a univariate sample and no labels, this crate picks the number of
//! equal-width bins whose histogram best represents the unknown density. The
//! choice is made by exhaustive search over a bounded set of candidates and an
//! explicit cost function ([`Criterion`]), so the answer is deterministic and
//! the whole search curve can be inspected.
//!
//! # Pipeline
//!
//! 1. [`Sample`] validates the raw input (missing values dropped, range computed once)
//! 2. [`Candidates`] resolves the bin counts to try
//! 3. [`Criterion::cost`] scores the occupancy of each equal-width partition
//! 4. [`BinningOptimizer`] keeps the lowest score, preferring fewer bins on ties
//!
//! All criteria follow one sign convention: **lower is better**.
//!
//! # Examples
//!
//! ## Bin-count search
//!
//! ```rust
//! use binning_optimizer::{optimal_binning, BinningOptions};
//!
//! let data = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0];
//! let options = BinningOptions::new().with_k_min(2).with_k_max(4);
//! let result = optimal_binning(&data, &options).unwrap();
//!
//! assert_eq!(result.k, 2);
//! assert_eq!(result.edges, vec![1.0, 3.0, 5.0]);
//! assert_eq!(result.counts, vec![3, 6]);
//! for (k, score) in result.curve() {
//!     println!("k={k:>2} cost={score:.4}");
//! }
//! ```
//!
//! ## Nice-width search
//!
//! ```rust
//! use binning_optimizer::{nice_width_binning, NiceWidthOptions};
//!
//! let data = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0];
//! let result = nice_width_binning(&data, &NiceWidthOptions::default()).unwrap();
//!
//! assert_eq!(result.width, 2.0);
//! assert_eq!(result.edges, vec![0.0, 2.0, 4.0, 6.0]);
//! ```

pub mod candidates;
pub mod criterion;
pub mod nice;
pub mod optimizer;
pub mod options;
pub mod types;

pub use candidates::Candidates;
pub use criterion::{Criterion, OccupancyStats};
pub use nice::{width_ladder, NiceWidthOptimizer};
pub use optimizer::BinningOptimizer;
pub use options::{BinningOptions, CandidateConfig, DegeneratePolicy, NiceWidthOptions, UpperBound};
pub use types::{select_best, BinningResult, CandidateBinning, Evaluation};

pub use binning_core::{Error, Result, Sample};

/// Find the equal-width binning of `sample` with the lowest criterion cost
///
/// `NaN` values are treated as missing and dropped.
pub fn optimal_binning(sample: &[f64], options: &BinningOptions) -> Result<BinningResult> {
    let sample = Sample::new(sample)?;
    BinningOptimizer::new(*options).optimize(&sample)
}

/// Like [`optimal_binning`], with `None` marking missing observations
pub fn optimal_binning_with_missing(
    sample: &[Option<f64>],
    options: &BinningOptions,
) -> Result<BinningResult> {
    let sample = Sample::from_options(sample)?;
    BinningOptimizer::new(*options).optimize(&sample)
}

/// Find the nice bin width (1, 2, 2.5 or 5 times a power of ten) with the
/// lowest criterion cost
pub fn nice_width_binning(sample: &[f64], options: &NiceWidthOptions) -> Result<BinningResult> {
    let sample = Sample::new(sample)?;
    NiceWidthOptimizer::new(*options).optimize(&sample)
}
