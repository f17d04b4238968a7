//! Configuration for the bin-count and bin-width searches

use crate::criterion::Criterion;
use serde::{Deserialize, Serialize};

/// Policy deriving the default largest bin count from the sample size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpperBound {
    /// `ceil(sqrt(n))`
    SqrtN,
    /// `max(1, n / 2)`
    HalfN,
    /// A fixed count, still clamped to `n` during resolution
    Fixed(usize),
}

impl UpperBound {
    /// Largest bin count for a sample of `n` observations
    pub fn resolve(&self, n: usize) -> usize {
        match *self {
            UpperBound::SqrtN => ((n as f64).sqrt().ceil() as usize).max(1),
            UpperBound::HalfN => (n / 2).max(1),
            UpperBound::Fixed(k) => k,
        }
    }
}

impl Default for UpperBound {
    fn default() -> Self {
        Self::SqrtN
    }
}

/// What to do with a sample whose observations are all identical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DegeneratePolicy {
    /// Fail with `DegenerateSample`
    #[default]
    Reject,
    /// Return a single zero-width bin holding every observation
    SingleBin,
}

/// Bounds and stride of the candidate bin counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateConfig {
    /// Smallest bin count considered
    pub k_min: usize,
    /// Largest bin count considered; derived from `upper_bound` when unset
    pub k_max: Option<usize>,
    /// Stride between consecutive candidates
    pub step: usize,
    /// Policy for the default `k_max`
    pub upper_bound: UpperBound,
}

impl Default for CandidateConfig {
    fn default() -> Self {
        Self {
            k_min: 1,
            k_max: None,
            step: 1,
            upper_bound: UpperBound::SqrtN,
        }
    }
}

/// Options for [`optimal_binning`](crate::optimal_binning)
///
/// ```rust
/// use binning_optimizer::{BinningOptions, Criterion, UpperBound};
///
/// let options = BinningOptions::new()
///     .with_k_min(2)
///     .with_upper_bound(UpperBound::HalfN)
///     .with_criterion(Criterion::Knuth);
/// assert_eq!(options.candidates.k_min, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BinningOptions {
    pub candidates: CandidateConfig,
    pub criterion: Criterion,
    pub degenerate: DegeneratePolicy,
    /// Evaluate candidates on the rayon pool (needs the `parallel` feature)
    pub parallel: bool,
}

impl BinningOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the smallest bin count considered.
    pub fn with_k_min(mut self, k_min: usize) -> Self {
        self.candidates.k_min = k_min;
        self
    }

    /// Sets the largest bin count considered, overriding the upper-bound policy.
    pub fn with_k_max(mut self, k_max: usize) -> Self {
        self.candidates.k_max = Some(k_max);
        self
    }

    /// Sets the stride between candidates.
    pub fn with_step(mut self, step: usize) -> Self {
        self.candidates.step = step;
        self
    }

    /// Sets the policy used when no explicit `k_max` is given.
    pub fn with_upper_bound(mut self, upper_bound: UpperBound) -> Self {
        self.candidates.upper_bound = upper_bound;
        self
    }

    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }

    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate = policy;
        self
    }

    /// Enables or disables parallel candidate evaluation.
    ///
    /// Without the `parallel` feature this flag is ignored.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Options for [`nice_width_binning`](crate::nice_width_binning)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NiceWidthOptions {
    /// Fewest bins a width may produce
    pub min_bins: usize,
    /// Most bins a width may produce; `n / 2` when unset
    pub max_bins: Option<usize>,
    pub criterion: Criterion,
    pub degenerate: DegeneratePolicy,
}

impl Default for NiceWidthOptions {
    fn default() -> Self {
        Self {
            min_bins: 2,
            max_bins: None,
            criterion: Criterion::default(),
            degenerate: DegeneratePolicy::default(),
        }
    }
}

impl NiceWidthOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_bins(mut self, min_bins: usize) -> Self {
        self.min_bins = min_bins;
        self
    }

    pub fn with_max_bins(mut self, max_bins: usize) -> Self {
        self.max_bins = Some(max_bins);
        self
    }

    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }

    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_bound_policies() {
        assert_eq!(UpperBound::SqrtN.resolve(9), 3);
        assert_eq!(UpperBound::SqrtN.resolve(10), 4);
        assert_eq!(UpperBound::SqrtN.resolve(1), 1);
        assert_eq!(UpperBound::HalfN.resolve(9), 4);
        assert_eq!(UpperBound::HalfN.resolve(1), 1);
        assert_eq!(UpperBound::Fixed(50).resolve(9), 50);
    }

    #[test]
    fn test_defaults() {
        let options = BinningOptions::default();
        assert_eq!(options.candidates.k_min, 1);
        assert_eq!(options.candidates.k_max, None);
        assert_eq!(options.candidates.step, 1);
        assert_eq!(options.candidates.upper_bound, UpperBound::SqrtN);
        assert_eq!(options.criterion, Criterion::ShimazakiShinomoto);
        assert_eq!(options.degenerate, DegeneratePolicy::Reject);
        assert!(!options.parallel);

        let nice = NiceWidthOptions::default();
        assert_eq!(nice.min_bins, 2);
        assert_eq!(nice.max_bins, None);
    }

    #[test]
    fn test_builder_chain() {
        let options = BinningOptions::new()
            .with_k_min(3)
            .with_k_max(12)
            .with_step(3)
            .with_criterion(Criterion::CrossValidation)
            .with_degenerate_policy(DegeneratePolicy::SingleBin)
            .parallel(true);
        assert_eq!(options.candidates.k_min, 3);
        assert_eq!(options.candidates.k_max, Some(12));
        assert_eq!(options.candidates.step, 3);
        assert_eq!(options.criterion, Criterion::CrossValidation);
        assert_eq!(options.degenerate, DegeneratePolicy::SingleBin);
        assert!(options.parallel);
    }

    #[test]
    fn test_options_round_trip_through_json() {
        let options = BinningOptions::new()
            .with_k_max(8)
            .with_upper_bound(UpperBound::Fixed(20))
            .with_criterion(Criterion::Knuth);
        let json = serde_json::to_string(&options).unwrap();
        let parsed: BinningOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed: BinningOptions =
            serde_json::from_str(r#"{ "candidates": { "k_max": 6 } }"#).unwrap();
        assert_eq!(parsed.candidates.k_min, 1);
        assert_eq!(parsed.candidates.k_max, Some(6));
        assert_eq!(parsed.criterion, Criterion::ShimazakiShinomoto);
    }
}
