//! Value at Risk and expected shortfall.
//!
//! Losses use the positive-is-bad convention: a loss of 5.0 means 5.0 of
//! money lost at the horizon, in present-value terms.
//!
//! # Quantile Policy
//!
//! VaR at level α is the `k`-th smallest loss with `k = ⌈α·n⌉` (nearest
//! rank, no interpolation). ES is the mean of the losses at ranks `k..=n`.

mod estimator;
mod exposure;

pub use estimator::{nearest_rank, RiskEstimator, RiskResult};
pub use exposure::Exposure;
