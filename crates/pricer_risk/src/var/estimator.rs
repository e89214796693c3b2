//! Empirical VaR / ES estimator.

use pricer_core::market_data::MarketParameters;
use pricer_core::types::checks::open_unit_interval;
use pricer_core::types::{PricingError, Result};
use pricer_pricing::mc::SimulatedPaths;
use rayon::prelude::*;

use super::exposure::Exposure;

/// Slack absorbing representation error in `α·n` before taking the ceiling.
const RANK_TOLERANCE: f64 = 1e-9;

/// One-based nearest rank `⌈α·n⌉`, clamped to `[1, n]`.
///
/// `n` must be at least 1.
///
/// # Examples
///
/// ```rust
/// use pricer_risk::var::nearest_rank;
///
/// assert_eq!(nearest_rank(0.95, 100), 95);
/// assert_eq!(nearest_rank(0.95, 10), 10);
/// assert_eq!(nearest_rank(0.5, 3), 2);
/// ```
#[inline]
pub fn nearest_rank(confidence: f64, n: usize) -> usize {
    let k = (confidence * n as f64 - RANK_TOLERANCE).ceil();
    (k.max(1.0) as usize).min(n)
}

/// Tail-risk figures at one confidence level.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RiskResult {
    /// Value at Risk, as a positive loss magnitude.
    pub var: f64,
    /// Expected shortfall; never below `var`.
    pub es: f64,
    /// Confidence level α.
    pub confidence: f64,
    /// Number of losses the figures were computed from.
    pub n_paths: usize,
    /// Number of losses averaged into `es`.
    pub tail_count: usize,
}

impl RiskResult {
    /// Returns `true` when `n_paths < 1/(1−α)`.
    ///
    /// The VaR rank is then the sample maximum and both figures carry high
    /// sampling variance. The values are still well defined.
    #[inline]
    pub fn has_high_sampling_variance(&self) -> bool {
        (self.n_paths as f64) < 1.0 / (1.0 - self.confidence)
    }
}

/// Empirical Value at Risk and expected shortfall estimator.
///
/// # Examples
///
/// ```rust
/// use pricer_risk::var::RiskEstimator;
///
/// let losses: Vec<f64> = (1..=100).map(f64::from).collect();
/// let risk = RiskEstimator::new().assess_losses(losses, 0.95).unwrap();
/// assert_eq!(risk.var, 95.0);
/// assert_eq!(risk.es, 97.5);
/// assert_eq!(risk.tail_count, 6);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RiskEstimator;

impl RiskEstimator {
    /// Creates an estimator.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// VaR and ES of a long unit position in the underlying.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `confidence` is outside (0, 1) or
    /// `paths` is empty.
    pub fn assess(
        &self,
        paths: &SimulatedPaths,
        params: &MarketParameters,
        confidence: f64,
    ) -> Result<RiskResult> {
        self.assess_exposure(paths, params, confidence, Exposure::Underlying)
    }

    /// VaR and ES of `exposure` over `paths`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `confidence` is outside (0, 1), `paths`
    /// is empty, or the exposure premium is invalid.
    pub fn assess_exposure(
        &self,
        paths: &SimulatedPaths,
        params: &MarketParameters,
        confidence: f64,
        exposure: Exposure,
    ) -> Result<RiskResult> {
        open_unit_interval("confidence", confidence)?;
        if paths.is_empty() {
            return Err(PricingError::invalid("paths", "must not be empty"));
        }
        let losses = exposure.losses(paths, params)?;
        tracing::debug!(exposure = exposure.as_str(), "computed path losses");
        self.assess_losses(losses, confidence)
    }

    /// VaR and ES of an arbitrary loss sample.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `confidence` is outside (0, 1), `losses`
    /// is empty, or any loss is not finite.
    #[tracing::instrument(skip_all, fields(n_paths = losses.len(), confidence = confidence))]
    pub fn assess_losses(&self, mut losses: Vec<f64>, confidence: f64) -> Result<RiskResult> {
        let confidence = open_unit_interval("confidence", confidence)?;
        if losses.is_empty() {
            return Err(PricingError::invalid("losses", "must not be empty"));
        }
        if let Some(bad) = losses.iter().find(|l| !l.is_finite()) {
            return Err(PricingError::invalid(
                "losses",
                format!("must be finite, got {}", bad),
            ));
        }

        losses.par_sort_unstable_by(f64::total_cmp);

        let n_paths = losses.len();
        let k = nearest_rank(confidence, n_paths);
        let var = losses[k - 1];
        let tail = &losses[k - 1..];
        let es = (tail.iter().sum::<f64>() / tail.len() as f64).max(var);

        let result = RiskResult {
            var,
            es,
            confidence,
            n_paths,
            tail_count: tail.len(),
        };

        if result.has_high_sampling_variance() {
            tracing::warn!(
                n_paths,
                confidence,
                "fewer paths than 1/(1 - confidence); VaR and ES have high sampling variance"
            );
        }
        tracing::debug!(var, es, tail_count = result.tail_count, "tail risk assessed");

        Ok(result)
    }
}
