//! Common test utilities for breaks-classify tests

#![allow(dead_code)]

use breaks_core::utils::sorted;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Exp, Normal};

/// Small sample with one dominant value
pub fn spiked() -> Vec<f64> {
    vec![1.0, 2.0, 3.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 9.0, 10.0]
}

/// `1.0, 2.0, ..., n`
pub fn ramp(n: usize) -> Vec<f64> {
    (1..=n).map(|i| i as f64).collect()
}

/// Sorted normal sample with a block of zeros, as seen in sparse indicators
pub fn zero_inflated(n: usize, zeros: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::<f64>::new(50.0, 10.0).unwrap();
    let mut data: Vec<f64> = (0..n).map(|_| normal.sample(&mut rng).abs()).collect();
    data.extend(std::iter::repeat(0.0).take(zeros));
    sorted(&data)
}

/// Sorted skewed sample, rounded so that repeated values occur
pub fn skewed_rounded(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let exp = Exp::<f64>::new(0.2).unwrap();
    let data: Vec<f64> = (0..n).map(|_| exp.sample(&mut rng).round()).collect();
    sorted(&data)
}

/// Boundaries are strictly increasing and strictly inside the data range
pub fn assert_valid_boundaries(data: &[f64], breaks: &[f64], num_classes: usize) {
    assert!(
        breaks.len() < num_classes.max(1),
        "{} boundaries for {} classes",
        breaks.len(),
        num_classes
    );
    assert!(
        breaks.windows(2).all(|w| w[0] < w[1]),
        "boundaries not increasing: {breaks:?}"
    );
    if let (Some(&min), Some(&max)) = (data.first(), data.last()) {
        assert!(
            breaks.iter().all(|&b| min < b && b < max),
            "boundaries {breaks:?} outside ({min}, {max})"
        );
    }
}
