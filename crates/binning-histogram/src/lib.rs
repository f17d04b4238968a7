//! Equal-width histogram construction for optimal binning
//!
//! This crate turns a validated [`Sample`](binning_core::Sample) into a
//! [`Histogram`]. Two layouts are supported:
//!
//! - **Equal width over the range**: `k` bins spanning exactly `[min, max]`,
//!   the last bin closed on the maximum.
//! - **Nice width**: bins whose edges are multiples of a given width, anchored
//!   near the sample mean and extended to cover the data.
//!
//! Both layouts assign values with the same rule, [`edge_index`], which the
//! optimizer also uses when it scores candidates, so counts always agree with
//! the edges they are reported with.
//!
//! # Examples
//!
//! ```rust
//! use binning_histogram::{EqualWidthBuilder, HistogramBuilder};
//!
//! let data = vec![1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0];
//! let histogram = EqualWidthBuilder::new(2).build_raw(&data).unwrap();
//!
//! assert_eq!(histogram.edges(), vec![1.0, 3.0, 5.0]);
//! assert_eq!(histogram.counts(), vec![3, 6]);
//! for bin in histogram.bins() {
//!     println!("{bin}");
//! }
//! ```

pub mod builders;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::{
    bin_index, edge_index, equal_width_edges, occupancy, strictly_increasing, EqualWidthBuilder,
    NiceLayout, NiceWidthBuilder,
};
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};

/// Create a histogram with a fixed number of equal-width bins
pub fn fixed_histogram(data: &[f64], num_bins: usize) -> binning_core::Result<Histogram> {
    EqualWidthBuilder::new(num_bins).build_raw(data)
}

pub use binning_core::Result;
