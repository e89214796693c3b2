//! Unit tests for the RNG module.
//!
//! - PRNG seed reproducibility
//! - Sub-stream determinism and separation
//! - Distribution properties (uniform range, normal moments)

use super::*;
use std::collections::HashSet;

#[test]
fn test_seed_reproducibility() {
    let mut rng1 = PricerRng::from_seed(12345);
    let mut rng2 = PricerRng::from_seed(12345);
    for _ in 0..100 {
        assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
    }

    let mut rng3 = PricerRng::from_seed(12345);
    let mut rng4 = PricerRng::from_seed(12345);
    for _ in 0..100 {
        assert_eq!(rng3.gen_normal(), rng4.gen_normal());
    }
}

#[test]
fn test_uniform_range() {
    let mut rng = PricerRng::from_seed(42);
    for _ in 0..10_000 {
        let value = rng.gen_uniform();
        assert!((0.0..1.0).contains(&value), "Uniform value {} out of range", value);
    }
}

#[test]
fn test_fill_normal_matches_single_draws() {
    let mut batch_rng = PricerRng::from_seed(7);
    let mut single_rng = PricerRng::from_seed(7);
    let mut buffer = vec![0.0; 256];
    batch_rng.fill_normal(&mut buffer);
    for &value in &buffer {
        assert_eq!(value, single_rng.gen_normal());
    }
}

#[test]
fn test_empty_buffer() {
    let mut rng = PricerRng::from_seed(42);
    let mut empty: Vec<f64> = vec![];
    rng.fill_uniform(&mut empty);
    rng.fill_normal(&mut empty);
    assert!(empty.is_empty());
}

#[test]
fn test_substream_reproducible() {
    let mut a = PricerRng::substream(99, 3);
    let mut b = PricerRng::substream(99, 3);
    for _ in 0..100 {
        assert_eq!(a.gen_normal(), b.gen_normal());
    }
}

#[test]
fn test_substream_seeds_distinct() {
    let seeds: HashSet<u64> = (0..10_000).map(|i| PricerRng::substream(42, i).seed()).collect();
    assert_eq!(seeds.len(), 10_000);
}

#[test]
fn test_substreams_differ_from_each_other() {
    let mut a = PricerRng::substream(42, 0);
    let mut b = PricerRng::substream(42, 1);
    let first_a: Vec<f64> = (0..16).map(|_| a.gen_normal()).collect();
    let first_b: Vec<f64> = (0..16).map(|_| b.gen_normal()).collect();
    assert_ne!(first_a, first_b);
}

#[test]
fn test_normal_moments_large_sample() {
    let mut rng = PricerRng::from_seed(2024);
    let n = 200_000;
    let mut buffer = vec![0.0; n];
    rng.fill_normal(&mut buffer);

    let mean = buffer.iter().sum::<f64>() / n as f64;
    let var = buffer.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;

    // 5 standard errors on mean and variance
    assert!(mean.abs() < 5.0 / (n as f64).sqrt(), "mean = {}", mean);
    assert!((var - 1.0).abs() < 5.0 * (2.0 / n as f64).sqrt(), "var = {}", var);
}

use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_uniform_in_range(seed in any::<u64>(), size in 1..10000usize) {
        let mut rng = PricerRng::from_seed(seed);
        let mut buffer = vec![0.0; size];
        rng.fill_uniform(&mut buffer);
        for &v in &buffer {
            prop_assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn prop_seed_determinism(seed in any::<u64>(), index in any::<u64>(), count in 1..1000usize) {
        let mut a = PricerRng::substream(seed, index);
        let mut b = PricerRng::substream(seed, index);
        for _ in 0..count {
            prop_assert_eq!(a.gen_normal(), b.gen_normal());
        }
    }
}
