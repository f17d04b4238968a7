//! Core types for optimal binning
//!
//! This crate holds the pieces every other binning crate builds on: the
//! shared [`Error`] type and the validated [`Sample`] produced by the
//! preprocessing stage.
//!
//! # Example
//!
//! ```rust
//! use binning_core::Sample;
//!
//! let sample = Sample::new(&[4.0, f64::NAN, 1.0, 2.5]).unwrap();
//! assert_eq!(sample.len(), 3);
//! assert_eq!(sample.missing(), 1);
//! assert_eq!(sample.range(), 3.0);
//! ```

pub mod error;
pub mod sample;

// Re-export core types
pub use error::{Error, Result};
pub use sample::Sample;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
