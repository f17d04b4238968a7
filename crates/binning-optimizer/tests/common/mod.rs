//! Shared utilities for integration tests

#![allow(dead_code)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;

pub use approx::assert_relative_eq;

/// The nine-point sample used by the worked examples
pub const SCENARIO: [f64; 9] = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0];

/// Seeded standard normal sample
pub fn normal_sample(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

/// Seeded two-component normal mixture
pub fn bimodal_sample(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let left = Normal::new(-3.0, 1.0).unwrap();
    let right = Normal::new(3.0, 1.0).unwrap();
    (0..n)
        .map(|_| {
            if rng.gen_bool(0.5) {
                left.sample(&mut rng)
            } else {
                right.sample(&mut rng)
            }
        })
        .collect()
}
