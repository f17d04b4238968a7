//! Prints the search curve for a bimodal sample under every criterion
//!
//! Run with `RUST_LOG=binning_optimizer=debug` to see the search log.

use binning_histogram::fixed_histogram;
use binning_optimizer::{
    nice_width_binning, optimal_binning, BinningOptions, Criterion, NiceWidthOptions, UpperBound,
};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let left = Normal::new(-2.0, 0.7)?;
    let right = Normal::new(3.0, 1.2)?;
    let data: Vec<f64> = (0..2_000)
        .map(|i| {
            if i % 3 == 0 {
                left.sample(&mut rng)
            } else {
                right.sample(&mut rng)
            }
        })
        .collect();

    for criterion in [
        Criterion::ShimazakiShinomoto,
        Criterion::CrossValidation,
        Criterion::Knuth,
    ] {
        let options = BinningOptions::new()
            .with_upper_bound(UpperBound::Fixed(80))
            .with_criterion(criterion);
        let result = optimal_binning(&data, &options)?;
        println!("=== {criterion} ===");
        println!("{result}");
        for (k, score) in result.curve().iter().step_by(10) {
            println!("  k={k:>3}  cost={score:.6}");
        }
    }

    println!("\n=== Nice widths ===");
    let nice = nice_width_binning(&data, &NiceWidthOptions::new().with_max_bins(80))?;
    println!("{nice}");
    for bin in nice.histogram().bins() {
        println!("  {bin}");
    }

    println!("\n=== Fixed 10-bin histogram for comparison ===");
    let fixed = fixed_histogram(&data, 10)?;
    println!("{fixed}");
    for bin in fixed.bins() {
        println!("  {bin}");
    }

    Ok(())
}
