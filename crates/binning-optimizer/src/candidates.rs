//! Candidate bin counts
//!
//! Resolves a [`CandidateConfig`] against the sample size into a finite,
//! ascending, restartable sequence of bin counts.

use crate::options::CandidateConfig;
use binning_core::{Error, Result};
use std::iter::StepBy;
use std::ops::Range;
use tracing::{debug, warn};

/// Resolved candidate bin counts `k_min, k_min + step, ..., <= k_max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidates {
    k_min: usize,
    k_max: usize,
    step: usize,
}

impl Candidates {
    /// Resolve the configuration for a sample of `n` observations
    ///
    /// The inversion check runs on the configured bounds; clamping `k_max` to
    /// `n` happens afterwards and can only empty the set, which is reported as
    /// [`Error::NoCandidates`].
    pub fn resolve(config: &CandidateConfig, n: usize) -> Result<Self> {
        if config.k_min == 0 {
            return Err(Error::non_positive("k_min"));
        }
        if config.step == 0 {
            return Err(Error::non_positive("step"));
        }

        let k_min = config.k_min;
        let k_max = config.k_max.unwrap_or_else(|| config.upper_bound.resolve(n));
        if k_min > k_max {
            return Err(Error::InvalidRange { k_min, k_max });
        }

        let clamped = k_max.min(n);
        if clamped < k_max {
            warn!("Clamping k_max from {} to the sample size {}", k_max, n);
        }
        if k_min > clamped {
            return Err(Error::NoCandidates {
                k_min,
                k_max: clamped,
                n,
            });
        }

        let candidates = Self {
            k_min,
            k_max: clamped,
            step: config.step,
        };
        debug!(
            "Resolved {} candidates in [{}, {}] with step {}",
            candidates.len(),
            candidates.k_min,
            candidates.k_max,
            candidates.step
        );
        Ok(candidates)
    }

    pub fn k_min(&self) -> usize {
        self.k_min
    }

    /// Upper bound after clamping; not necessarily a member when `step > 1`
    pub fn k_max(&self) -> usize {
        self.k_max
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        (self.k_max - self.k_min) / self.step + 1
    }

    /// Always false once resolved
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the candidates in increasing order
    pub fn iter(&self) -> StepBy<Range<usize>> {
        (self.k_min..self.k_max + 1).step_by(self.step)
    }
}

impl IntoIterator for &Candidates {
    type Item = usize;
    type IntoIter = StepBy<Range<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
