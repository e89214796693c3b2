//! Analytical comparison tests for Monte Carlo pricing.
//!
//! These tests verify that Monte Carlo prices converge to the Black-Scholes
//! closed form and that simulation output is reproducible.
//!
//! # Test Categories
//!
//! 1. **Reference Scenario**: ATM call, 100,000 paths, seed 42
//! 2. **Convergence Tests**: Price error and standard error shrink with path count
//! 3. **Reproducibility**: Same seed gives identical paths, serial or parallel

use approx::assert_relative_eq;
use pricer_core::market_data::MarketParameters;
use pricer_core::types::OptionType;
use pricer_models::analytical::AnalyticalPricer;
use pricer_pricing::mc::{simulate, MonteCarloPricer, PathSimulator, SimulationConfig};
use proptest::prelude::*;

fn atm(option_type: OptionType) -> MarketParameters {
    MarketParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, option_type).unwrap()
}

fn config(n_paths: usize, n_steps: usize, seed: u64, parallel: bool) -> SimulationConfig {
    SimulationConfig::builder()
        .n_paths(n_paths)
        .n_steps(n_steps)
        .seed(seed)
        .parallel(parallel)
        .build()
        .unwrap()
}

// ============================================================================
// Reference Scenario
// ============================================================================

#[test]
fn test_atm_call_reference_scenario() {
    let params = atm(OptionType::Call);
    let paths = simulate(&params, 100_000, 1, Some(42)).unwrap();
    let result = MonteCarloPricer::new().price(&paths, &params).unwrap();

    assert!(
        (result.price - 10.45).abs() < 0.10,
        "MC price {} too far from 10.45",
        result.price
    );
    assert_eq!(result.n_paths, 100_000);
    assert!(result.std_error > 0.0 && result.std_error < 0.1);
}

#[test]
fn test_mc_put_multi_step_vs_analytical() {
    let params = atm(OptionType::Put);
    let paths = PathSimulator::new(config(50_000, 12, 7, true)).simulate(&params);
    let result = MonteCarloPricer::new().price(&paths, &params).unwrap();
    let analytical = AnalyticalPricer::default().price(&params);

    assert!(
        (result.price - analytical).abs() < 4.0 * result.std_error,
        "MC {} vs analytical {} (SE {})",
        result.price,
        analytical,
        result.std_error
    );
}

#[test]
fn test_terminal_mean_is_forward() {
    let params = atm(OptionType::Call);
    let paths = simulate(&params, 100_000, 1, Some(3)).unwrap();
    let mean = paths.mean().unwrap();
    let se = paths.std_dev().unwrap() / (paths.len() as f64).sqrt();
    assert!((mean - params.forward()).abs() < 4.0 * se);
}

// ============================================================================
// Convergence Tests
// ============================================================================

#[test]
fn test_convergence_with_path_count() {
    let params = atm(OptionType::Call);
    let analytical = AnalyticalPricer::default().price(&params);
    let pricer = MonteCarloPricer::new();

    let mut errors = Vec::new();
    for n_paths in [1_000, 10_000, 100_000] {
        let paths = simulate(&params, n_paths, 1, Some(2024)).unwrap();
        let result = pricer.price(&paths, &params).unwrap();
        assert!(
            (result.price - analytical).abs() < 4.0 * result.std_error,
            "n_paths={}: MC {} vs analytical {}",
            n_paths,
            result.price,
            analytical
        );
        errors.push(result.std_error);
    }

    // Standard error scales as 1/√n: two decades of paths shrink it ~10x
    let ratio = errors[0] / errors[2];
    assert!(ratio > 7.0 && ratio < 13.0, "SE ratio {}", ratio);
}

#[test]
fn test_confidence_interval_covers_analytical() {
    let params = atm(OptionType::Call);
    let analytical = AnalyticalPricer::default().price(&params);
    let paths = simulate(&params, 200_000, 1, Some(99)).unwrap();
    let result = MonteCarloPricer::with_confidence(0.999)
        .unwrap()
        .price(&paths, &params)
        .unwrap();
    assert!(result.confidence_interval.contains(analytical));
}

// ============================================================================
// Reproducibility
// ============================================================================

#[test]
fn test_parallel_matches_serial() {
    let params = atm(OptionType::Call);
    let serial = PathSimulator::new(config(10_000, 8, 42, false)).simulate(&params);
    let parallel = PathSimulator::new(config(10_000, 8, 42, true)).simulate(&params);
    assert_eq!(serial, parallel);
}

#[test]
fn test_parallel_matches_serial_with_retained_paths() {
    let params = atm(OptionType::Call);
    let build = |parallel| {
        SimulationConfig::builder()
            .n_paths(3_000)
            .n_steps(5)
            .seed(8)
            .retain_paths(true)
            .parallel(parallel)
            .build()
            .unwrap()
    };
    let serial = PathSimulator::new(build(false)).simulate(&params);
    let parallel = PathSimulator::new(build(true)).simulate(&params);
    assert_eq!(serial, parallel);
    assert_eq!(serial.path(2_999), parallel.path(2_999));
}

#[test]
fn test_different_seeds_differ() {
    let params = atm(OptionType::Call);
    let a = simulate(&params, 100, 1, Some(1)).unwrap();
    let b = simulate(&params, 100, 1, Some(2)).unwrap();
    assert_ne!(a.terminal_prices(), b.terminal_prices());
}

#[test]
fn test_pricing_is_pure() {
    let params = atm(OptionType::Call);
    let paths = simulate(&params, 5_000, 1, Some(5)).unwrap();
    let pricer = MonteCarloPricer::new();
    let first = pricer.price(&paths, &params).unwrap();
    let second = pricer.price(&paths, &params).unwrap();
    assert_eq!(first, second);
    assert_relative_eq!(first.price, second.price);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_seed_determinism(
        seed in any::<u64>(),
        n_paths in 1usize..3_000,
        n_steps in 1usize..6,
        vol in 0.05f64..0.8,
    ) {
        let params = MarketParameters::new(100.0, 95.0, vol, 0.03, 0.5, OptionType::Call).unwrap();
        let a = simulate(&params, n_paths, n_steps, Some(seed)).unwrap();
        let b = simulate(&params, n_paths, n_steps, Some(seed)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_terminal_prices_positive(seed in any::<u64>(), vol in 0.01f64..1.5) {
        let params = MarketParameters::new(50.0, 50.0, vol, 0.0, 2.0, OptionType::Put).unwrap();
        let paths = simulate(&params, 500, 3, Some(seed)).unwrap();
        prop_assert!(paths.terminal_prices().iter().all(|&s| s > 0.0 && s.is_finite()));
    }
}
