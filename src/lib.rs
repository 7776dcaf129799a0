//! Shared pieces of the benchmark and demo binaries: reproducible
//! test-key generation, wall-clock timing, and the statistics used to
//! aggregate repeated runs.
//!
//! All the actual hash-table work lives in the `collections` crate;
//! this package only drives it and reads its counters back.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed for test-data generation. Fixed so every run benchmarks the
/// same key sequences.
pub const KEYGEN_SEED: u64 = 42;

/// Generates `n` pseudo-random keys from a seeded generator.
///
/// Without an explicit range, keys are drawn from `[0, n * 10]`, which
/// leaves room for duplicates the way real workloads have them.
pub fn generate_test_data(n: usize, key_range: Option<(i64, i64)>) -> Vec<i64> {
    let (lo, hi) = key_range.unwrap_or((0, n as i64 * 10));
    let mut rng = StdRng::seed_from_u64(KEYGEN_SEED);
    (0..n).map(|_| rng.gen_range(lo..=hi)).collect()
}

/// Runs `f` once and returns how long it took along with its result.
pub fn time<R>(f: impl FnOnce() -> R) -> (Duration, R) {
    let start = Instant::now();
    let result = f();
    (start.elapsed(), result)
}

pub mod stats {
    /// Arithmetic mean; 0 for an empty sample.
    pub fn mean(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        samples.iter().sum::<f64>() / samples.len() as f64
    }

    /// Population standard deviation; 0 for an empty sample.
    pub fn std_dev(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let mean = mean(samples);
        let variance = samples
            .iter()
            .map(|x| (x - mean) * (x - mean))
            .sum::<f64>()
            / samples.len() as f64;
        variance.sqrt()
    }
}
