//! Tests for the umbrella re-exports and prelude

use optimal_binning::prelude::*;

const SCENARIO: [f64; 9] = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0];

#[test]
fn test_prelude_search() {
    let options = BinningOptions::new().with_k_min(2).with_k_max(4);
    let result: BinningResult = optimal_binning(&SCENARIO, &options).unwrap();
    assert_eq!(result.k, 2);
    assert_eq!(result.counts, vec![3, 6]);

    let histogram: Histogram = result.histogram();
    assert_eq!(histogram.edges(), vec![1.0, 3.0, 5.0]);
}

#[test]
fn test_member_crates_share_one_error_type() {
    let from_core: optimal_binning::core::Result<Sample> = Sample::new(&[]);
    let from_optimizer: Result<BinningResult> =
        optimal_binning_with_missing(&[None], &BinningOptions::default());

    assert_eq!(from_core.unwrap_err(), Error::EmptySample { missing: 0 });
    assert_eq!(from_optimizer.unwrap_err(), Error::EmptySample { missing: 1 });
}

#[test]
fn test_optimizer_and_histogram_modules() {
    let sample = Sample::new(&SCENARIO).unwrap();
    let optimizer = BinningOptimizer::default();
    let candidate = optimizer.evaluate(&sample, 4).unwrap();

    let built = optimal_binning::histogram::EqualWidthBuilder::new(4)
        .build(&sample)
        .unwrap();
    assert_eq!(built.counts(), candidate.counts);
    assert_eq!(built.edges(), candidate.edges);

    let nice = nice_width_binning(&SCENARIO, &NiceWidthOptions::default()).unwrap();
    assert_eq!(nice.edges, vec![0.0, 2.0, 4.0, 6.0]);
    assert_eq!(Criterion::default(), nice.criterion);
    assert_eq!(UpperBound::default(), UpperBound::SqrtN);
    assert_eq!(DegeneratePolicy::default(), DegeneratePolicy::Reject);
    assert!(!optimal_binning::VERSION.is_empty());
}
