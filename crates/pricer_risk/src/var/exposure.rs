//! Position definitions and their per-path losses.

use pricer_core::market_data::MarketParameters;
use pricer_core::types::checks::finite;
use pricer_core::types::{PricingError, Result};
use pricer_pricing::mc::{discounted_payoffs, SimulatedPaths};
use rayon::prelude::*;

/// Path count above which losses are computed on the rayon pool.
const PARALLEL_THRESHOLD: usize = 65_536;

/// Position whose loss distribution is assessed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Exposure {
    /// One unit of the underlying bought at S₀: `L = S₀ − e^(−rT)·S_T`.
    #[default]
    Underlying,
    /// Option bought for `premium`: `L = premium − e^(−rT)·payoff`.
    LongOption {
        /// Price paid today.
        premium: f64,
    },
    /// Option sold for `premium`: `L = e^(−rT)·payoff − premium`.
    ShortOption {
        /// Price received today.
        premium: f64,
    },
}

impl Exposure {
    /// Short label for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Exposure::Underlying => "underlying",
            Exposure::LongOption { .. } => "long option",
            Exposure::ShortOption { .. } => "short option",
        }
    }

    /// Per-path losses in path-index order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` on field `premium` if an option premium is
    /// negative or not finite.
    pub fn losses(&self, paths: &SimulatedPaths, params: &MarketParameters) -> Result<Vec<f64>> {
        match *self {
            Exposure::Underlying => {
                let spot = params.spot();
                let df = params.discount_factor();
                let terminal = paths.terminal_prices();
                let loss = |&s: &f64| spot - df * s;
                Ok(if terminal.len() >= PARALLEL_THRESHOLD {
                    terminal.par_iter().map(loss).collect()
                } else {
                    terminal.iter().map(loss).collect()
                })
            }
            Exposure::LongOption { premium } => {
                let premium = premium_checked(premium)?;
                Ok(discounted_payoffs(paths, params)
                    .into_iter()
                    .map(|pv| premium - pv)
                    .collect())
            }
            Exposure::ShortOption { premium } => {
                let premium = premium_checked(premium)?;
                Ok(discounted_payoffs(paths, params)
                    .into_iter()
                    .map(|pv| pv - premium)
                    .collect())
            }
        }
    }
}

fn premium_checked(premium: f64) -> Result<f64> {
    let premium = finite("premium", premium)?;
    if premium < 0.0 {
        return Err(PricingError::invalid(
            "premium",
            format!("must be >= 0, got {}", premium),
        ));
    }
    Ok(premium)
}
