//! Exhaustive search over equal-width bin counts

use crate::candidates::Candidates;
use crate::criterion::Criterion;
use crate::options::{BinningOptions, DegeneratePolicy};
use crate::types::{select_best, BinningResult, CandidateBinning, Evaluation};
use binning_core::{Error, Result, Sample};
use binning_histogram::{equal_width_edges, occupancy, strictly_increasing};
use tracing::{debug, instrument, trace};

/// Selects the equal-width bin count with the lowest criterion cost
///
/// Candidates are scored independently, so the search is a map over the
/// candidate set followed by a reduction with [`select_best`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BinningOptimizer {
    options: BinningOptions,
}

impl BinningOptimizer {
    pub fn new(options: BinningOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BinningOptions {
        &self.options
    }

    /// Candidate bin counts for this sample
    pub fn candidates(&self, sample: &Sample) -> Result<Candidates> {
        Candidates::resolve(&self.options.candidates, sample.len())
    }

    /// Partition the sample into `k` equal-width bins and score it
    pub fn evaluate(&self, sample: &Sample, k: usize) -> Result<CandidateBinning> {
        if k == 0 {
            return Err(Error::non_positive("k"));
        }
        sample.require_spread()?;

        let width = sample.range() / k as f64;
        let edges = equal_width_edges(sample.min(), sample.max(), k);
        let counts = occupancy(sample.values(), &edges);
        let score = self.options.criterion.cost(&counts, width);

        Ok(CandidateBinning {
            k,
            width,
            edges,
            counts,
            score,
        })
    }

    /// Run the search
    #[instrument(skip(self, sample), fields(n = sample.len(), criterion = %self.options.criterion))]
    pub fn optimize(&self, sample: &Sample) -> Result<BinningResult> {
        let candidates = self.candidates(sample)?;

        if sample.is_degenerate() {
            return match self.options.degenerate {
                DegeneratePolicy::Reject => Err(Error::degenerate(sample.min(), sample.len())),
                DegeneratePolicy::SingleBin => {
                    debug!("Degenerate sample, returning a single bin");
                    Ok(single_bin(sample, self.options.criterion))
                }
            };
        }

        let trace = self.evaluate_all(sample, &candidates);
        let best = *select_best(&trace).ok_or(Error::NoCandidates {
            k_min: candidates.k_min(),
            k_max: candidates.k_max(),
            n: sample.len(),
        })?;

        debug!(
            "Selected k={} (width={:.6}, score={:.6}) from {} candidates",
            best.k,
            best.width,
            best.score,
            trace.len()
        );

        let edges = equal_width_edges(sample.min(), sample.max(), best.k);
        let counts = occupancy(sample.values(), &edges);

        Ok(BinningResult {
            k: best.k,
            width: best.width,
            edges,
            counts,
            score: best.score,
            criterion: self.options.criterion,
            trace,
        })
    }

    /// Score one candidate, skipping it when its edges cannot be represented
    fn score(&self, sample: &Sample, k: usize) -> Option<Evaluation> {
        let edges = equal_width_edges(sample.min(), sample.max(), k);
        if !strictly_increasing(&edges) {
            trace!(k, "Skipping candidate with collapsed edges");
            return None;
        }
        let width = sample.range() / k as f64;
        let counts = occupancy(sample.values(), &edges);
        let score = self.options.criterion.cost(&counts, width);
        trace!(k, width, score, "Evaluated candidate");
        Some(Evaluation { k, width, score })
    }

    fn evaluate_serial(&self, sample: &Sample, candidates: &Candidates) -> Vec<Evaluation> {
        candidates
            .iter()
            .filter_map(|k| self.score(sample, k))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn evaluate_all(&self, sample: &Sample, candidates: &Candidates) -> Vec<Evaluation> {
        use rayon::prelude::*;

        if !self.options.parallel {
            return self.evaluate_serial(sample, candidates);
        }
        let ks: Vec<usize> = candidates.iter().collect();
        ks.par_iter()
            .filter_map(|&k| self.score(sample, k))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_all(&self, sample: &Sample, candidates: &Candidates) -> Vec<Evaluation> {
        if self.options.parallel {
            trace!("Parallel evaluation requested without the `parallel` feature");
        }
        self.evaluate_serial(sample, candidates)
    }
}

/// Fallback result for a zero-range sample
pub(crate) fn single_bin(sample: &Sample, criterion: Criterion) -> BinningResult {
    BinningResult {
        k: 1,
        width: 0.0,
        edges: vec![sample.min(), sample.max()],
        counts: vec![sample.len()],
        score: f64::NAN,
        criterion,
        trace: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::UpperBound;
    use approx::assert_relative_eq;

    fn scenario() -> Sample {
        Sample::new(&[1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0]).unwrap()
    }

    #[test]
    fn test_scenario_full_range() {
        let optimizer = BinningOptimizer::new(BinningOptions::new().with_k_min(1).with_k_max(4));
        let result = optimizer.optimize(&scenario()).unwrap();

        assert_eq!(result.k, 1);
        assert_eq!(result.edges, vec![1.0, 5.0]);
        assert_eq!(result.counts, vec![9]);
        assert_relative_eq!(result.score, 1.125);
        assert_eq!(result.trace.len(), 4);

        let scores: Vec<f64> = result.trace.iter().map(|e| e.score).collect();
        for (got, want) in scores.iter().zip([1.125, 1.6875, 3.375, 3.8125]) {
            assert_relative_eq!(*got, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_scenario_without_single_bin() {
        let optimizer = BinningOptimizer::new(BinningOptions::new().with_k_min(2).with_k_max(4));
        let result = optimizer.optimize(&scenario()).unwrap();

        assert_eq!(result.k, 2);
        assert_eq!(result.width, 2.0);
        assert_eq!(result.edges, vec![1.0, 3.0, 5.0]);
        assert_eq!(result.counts, vec![3, 6]);
        assert_relative_eq!(result.score, 1.6875);
    }

    #[test]
    fn test_evaluate_every_candidate() {
        let optimizer = BinningOptimizer::new(BinningOptions::new().with_k_max(4));
        let sample = scenario();
        let expected = [vec![9], vec![3, 6], vec![3, 3, 3], vec![1, 2, 3, 3]];
        for (k, counts) in (1..=4).zip(expected) {
            let candidate = optimizer.evaluate(&sample, k).unwrap();
            assert_eq!(candidate.counts, counts);
            assert_eq!(candidate.edges.len(), k + 1);
            assert_eq!(candidate.edges[0], 1.0);
            assert_eq!(candidate.edges[k], 5.0);
            assert_eq!(candidate.counts.iter().sum::<usize>(), 9);
        }
        assert!(optimizer.evaluate(&sample, 0).is_err());
    }

    #[test]
    fn test_step_skips_candidates() {
        let optimizer = BinningOptimizer::new(
            BinningOptions::new().with_k_min(2).with_k_max(4).with_step(2),
        );
        let result = optimizer.optimize(&scenario()).unwrap();
        assert_eq!(result.curve().iter().map(|(k, _)| *k).collect::<Vec<_>>(), vec![2, 4]);
        assert_eq!(result.k, 2);
    }

    #[test]
    fn test_degenerate_rejected_by_default() {
        let sample = Sample::new(&[3.0; 6]).unwrap();
        let result = BinningOptimizer::default().optimize(&sample);
        assert_eq!(result, Err(Error::DegenerateSample { value: 3.0, n: 6 }));
    }

    #[test]
    fn test_degenerate_single_bin_fallback() {
        let sample = Sample::new(&[3.0; 6]).unwrap();
        let optimizer = BinningOptimizer::new(
            BinningOptions::new().with_degenerate_policy(DegeneratePolicy::SingleBin),
        );
        let result = optimizer.optimize(&sample).unwrap();
        assert_eq!(result.k, 1);
        assert_eq!(result.edges, vec![3.0, 3.0]);
        assert_eq!(result.counts, vec![6]);
        assert_eq!(result.width, 0.0);
        assert!(result.score.is_nan());
        assert!(result.trace.is_empty());
    }

    #[test]
    fn test_bad_bounds_checked_before_degeneracy() {
        let sample = Sample::new(&[3.0; 6]).unwrap();
        let optimizer = BinningOptimizer::new(BinningOptions::new().with_k_min(5).with_k_max(2));
        assert_eq!(
            optimizer.optimize(&sample),
            Err(Error::InvalidRange { k_min: 5, k_max: 2 })
        );
    }

    #[test]
    fn test_half_n_upper_bound() {
        let optimizer =
            BinningOptimizer::new(BinningOptions::new().with_upper_bound(UpperBound::HalfN));
        let result = optimizer.optimize(&scenario()).unwrap();
        assert_eq!(result.trace.len(), 4);
    }

    #[test]
    fn test_parallel_flag_matches_serial() {
        let data: Vec<f64> = (0..500).map(|i| ((i * 37) % 101) as f64 / 7.0).collect();
        let sample = Sample::new(&data).unwrap();
        let serial = BinningOptimizer::new(BinningOptions::new().with_k_max(60))
            .optimize(&sample)
            .unwrap();
        let parallel = BinningOptimizer::new(BinningOptions::new().with_k_max(60).parallel(true))
            .optimize(&sample)
            .unwrap();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_collapsed_edges_are_filtered() {
        // Range of four ulps: only k <= 4 yields distinct edges
        let lo = 1.0e6_f64;
        let hi = f64::from_bits(lo.to_bits() + 4);
        let data: Vec<f64> = (0..64).map(|i| if i % 2 == 0 { lo } else { hi }).collect();
        let sample = Sample::new(&data).unwrap();
        let optimizer = BinningOptimizer::new(BinningOptions::new().with_k_max(64));
        let result = optimizer.optimize(&sample).unwrap();
        let ks: Vec<usize> = result.trace.iter().map(|e| e.k).collect();
        assert_eq!(ks, vec![1, 2, 3, 4]);
        assert!(strictly_increasing(&result.edges));
    }

    #[test]
    fn test_counts_agree_with_reported_edges() {
        // values on a decimal grid land exactly on some edges
        let data: Vec<f64> = (0..=100).map(|i| i as f64 / 100.0).collect();
        let sample = Sample::new(&data).unwrap();
        for k in 1..=50 {
            let optimizer = BinningOptimizer::new(BinningOptions::new().with_k_min(k).with_k_max(k));
            let result = optimizer.optimize(&sample).unwrap();
            let histogram = result.histogram();

            let mut recount = vec![0; k];
            for &x in &data {
                recount[histogram.find_bin(x).unwrap()] += 1;
            }
            assert_eq!(recount, result.counts, "k={k}");
            assert_eq!(optimizer.evaluate(&sample, k).unwrap().counts, result.counts);
        }
    }
}
