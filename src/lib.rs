//! Finding the optimal width for unsupervised binning
//!
//! This crate re-exports the binning workspace:
//!
//! - [`core`]: the shared error type and sample preprocessing
//! - [`histogram`]: equal-width and nice-width histogram construction
//! - [`optimizer`]: candidate generation, cost functions and the search itself
//!
//! # Example
//!
//! ```rust
//! use optimal_binning::prelude::*;
//!
//! let data = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0];
//! let result = optimal_binning(&data, &BinningOptions::new().with_k_max(4)).unwrap();
//!
//! assert_eq!(result.k, 1);
//! assert_eq!(result.counts, vec![9]);
//! ```

pub use binning_core as core;
pub use binning_histogram as histogram;
pub use binning_optimizer as optimizer;

pub use binning_core::{Error, Result, Sample};
pub use binning_histogram::{Histogram, HistogramBin, HistogramBuilder};
pub use binning_optimizer::{
    nice_width_binning, optimal_binning, optimal_binning_with_missing, BinningOptimizer,
    BinningOptions, BinningResult, Criterion, DegeneratePolicy, Evaluation, NiceWidthOptimizer,
    NiceWidthOptions, UpperBound,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        nice_width_binning, optimal_binning, optimal_binning_with_missing, BinningOptimizer,
        BinningOptions, BinningResult, Criterion, DegeneratePolicy, Error, Histogram,
        HistogramBuilder, NiceWidthOptions, Result, Sample, UpperBound,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
