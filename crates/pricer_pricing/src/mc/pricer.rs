//! Monte Carlo pricing engine.
//!
//! Prices European options from a simulated terminal price distribution:
//! the estimate is the mean discounted payoff, the standard error is the
//! sample standard deviation of the discounted payoffs over √n, and the
//! confidence interval is `estimate ± z·std_error` for the normal quantile
//! `z` of the requested level.

use pricer_core::market_data::MarketParameters;
use pricer_core::types::checks::open_unit_interval;
use pricer_core::types::{ConfidenceInterval, PricingError, PricingResult, Result};
use pricer_models::analytical::norm_inv;

use super::paths::SimulatedPaths;

/// Confidence level used by [`MonteCarloPricer::price`] unless overridden.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Discounted payoff `e^(−rT)·payoff(S_T)` for every path, in path order.
///
/// # Examples
///
/// ```rust
/// use pricer_core::market_data::MarketParameters;
/// use pricer_core::types::OptionType;
/// use pricer_pricing::mc::{discounted_payoffs, SimulatedPaths};
///
/// let params = MarketParameters::new(100.0, 100.0, 0.2, 0.0, 1.0, OptionType::Put).unwrap();
/// let paths = SimulatedPaths::from_terminal_prices(vec![90.0, 110.0]).unwrap();
/// assert_eq!(discounted_payoffs(&paths, &params), vec![10.0, 0.0]);
/// ```
pub fn discounted_payoffs(paths: &SimulatedPaths, params: &MarketParameters) -> Vec<f64> {
    let df = params.discount_factor();
    let strike = params.strike();
    let option_type = params.option_type();
    paths
        .terminal_prices()
        .iter()
        .map(|&s| df * option_type.payoff(s, strike))
        .collect()
}

/// Monte Carlo estimator for European options.
///
/// Stateless apart from the default confidence level; it never draws random
/// numbers itself, so pricing the same [`SimulatedPaths`] twice gives the same
/// result.
///
/// # Examples
///
/// ```rust
/// use pricer_core::market_data::MarketParameters;
/// use pricer_core::types::OptionType;
/// use pricer_pricing::mc::{simulate, MonteCarloPricer};
///
/// let params = MarketParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call).unwrap();
/// let paths = simulate(&params, 50_000, 1, Some(42)).unwrap();
///
/// let result = MonteCarloPricer::new().price(&paths, &params).unwrap();
/// assert!((result.price - 10.45).abs() < 0.5);
/// assert!(result.confidence_interval.contains(result.price));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonteCarloPricer {
    confidence_level: f64,
}

impl Default for MonteCarloPricer {
    fn default() -> Self {
        Self {
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
        }
    }
}

impl MonteCarloPricer {
    /// Creates a pricer reporting 95% confidence intervals.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pricer reporting intervals at `level`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `level` is outside (0, 1).
    pub fn with_confidence(level: f64) -> Result<Self> {
        Ok(Self {
            confidence_level: open_unit_interval("confidence_level", level)?,
        })
    }

    /// Returns the default confidence level.
    #[inline]
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Prices the option in `params` over `paths`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `paths` is empty.
    pub fn price(&self, paths: &SimulatedPaths, params: &MarketParameters) -> Result<PricingResult> {
        self.price_with_confidence(paths, params, self.confidence_level)
    }

    /// Prices the option with a confidence interval at `level`.
    ///
    /// With a single path the sample deviation is undefined and the standard
    /// error is reported as 0.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `paths` is empty, `level` is outside
    /// (0, 1), or the discounted payoffs or their moments are not finite.
    pub fn price_with_confidence(
        &self,
        paths: &SimulatedPaths,
        params: &MarketParameters,
        level: f64,
    ) -> Result<PricingResult> {
        let level = open_unit_interval("confidence_level", level)?;
        if paths.is_empty() {
            return Err(PricingError::invalid("paths", "must not be empty"));
        }

        let payoffs = discounted_payoffs(paths, params);
        // Overflowing S_T against an underflowing discount factor gives 0·∞.
        if let Some(idx) = payoffs.iter().position(|p| !p.is_finite()) {
            return Err(PricingError::invalid(
                "payoffs",
                format!("discounted payoff of path {} is not finite", idx),
            ));
        }
        let n_paths = payoffs.len();
        let mean = payoffs.iter().sum::<f64>() / n_paths as f64;

        let std_error = if n_paths > 1 {
            let variance =
                payoffs.iter().map(|&p| (p - mean).powi(2)).sum::<f64>() / (n_paths - 1) as f64;
            variance.sqrt() / (n_paths as f64).sqrt()
        } else {
            0.0
        };

        if !mean.is_finite() || !std_error.is_finite() {
            return Err(PricingError::invalid(
                "payoffs",
                "mean or standard error overflowed",
            ));
        }

        let z = norm_inv(0.5 * (1.0 + level));
        let result = PricingResult {
            price: mean,
            std_error,
            confidence_interval: ConfidenceInterval::symmetric(mean, std_error, z, level),
            n_paths,
        };

        tracing::debug!(
            n_paths,
            price = result.price,
            std_error = result.std_error,
            "Monte Carlo estimate"
        );
        Ok(result)
    }
}
