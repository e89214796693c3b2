//! Black-Scholes pricing model for European options.
//!
//! This module provides closed-form prices and Greeks for European calls
//! and puts on a non-dividend-paying asset.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate Case
//!
//! When σ√T is numerically zero the formulas collapse to the discounted
//! intrinsic value `max(S - K·e^(-rT), 0)` (call) or `max(K·e^(-rT) - S, 0)`
//! (put). No division by zero is performed.

use pricer_core::market_data::MarketParameters;
use pricer_core::types::{OptionType, PricingResult};

use super::distributions::{norm_cdf, norm_pdf};

/// Threshold below which σ√T is treated as zero.
const VOL_SQRT_T_EPSILON: f64 = 1e-10;

/// Closed-form engine under its pricing-pipeline name.
pub type AnalyticalPricer = BlackScholes;

/// Standard first-order Greeks plus Gamma.
///
/// Theta is the sensitivity to calendar time (∂V/∂t = -∂V/∂T), per year.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// ∂V/∂t
    pub theta: f64,
    /// ∂V/∂r
    pub rho: f64,
}

/// Black-Scholes closed-form engine.
///
/// Stateless; all inputs come from [`MarketParameters`]. Every method is a
/// deterministic pure function: identical inputs produce bit-identical
/// outputs.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketParameters;
/// use pricer_core::types::OptionType;
/// use pricer_models::analytical::BlackScholes;
///
/// let call = MarketParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call).unwrap();
/// let put = call.with_option_type(OptionType::Put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let gap = BlackScholes.price(&call) - BlackScholes.price(&put)
///     - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(gap.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackScholes;

impl BlackScholes {
    /// Returns `true` when σ√T is too small for the closed form.
    #[inline]
    pub fn is_degenerate(params: &MarketParameters) -> bool {
        params.vol_sqrt_t() < VOL_SQRT_T_EPSILON
    }

    /// Computes d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T).
    ///
    /// Returns `None` in the degenerate case.
    #[inline]
    pub fn d1(&self, params: &MarketParameters) -> Option<f64> {
        if Self::is_degenerate(params) {
            return None;
        }
        let sigma = params.volatility();
        let log_moneyness = (params.spot() / params.strike()).ln();
        let drift = (params.rate() + 0.5 * sigma * sigma) * params.maturity();
        Some((log_moneyness + drift) / params.vol_sqrt_t())
    }

    /// Computes d₂ = d₁ - σ√T.
    ///
    /// Returns `None` in the degenerate case.
    #[inline]
    pub fn d2(&self, params: &MarketParameters) -> Option<f64> {
        self.d1(params).map(|d1| d1 - params.vol_sqrt_t())
    }

    /// Theoretical price of the option described by `params`.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::market_data::MarketParameters;
    /// use pricer_core::types::OptionType;
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let params = MarketParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call).unwrap();
    /// assert!((BlackScholes.price(&params) - 10.45).abs() < 0.01);
    /// ```
    pub fn price(&self, params: &MarketParameters) -> f64 {
        let spot = params.spot();
        let discounted_strike = params.strike() * params.discount_factor();

        let (d1, d2) = match (self.d1(params), self.d2(params)) {
            (Some(d1), Some(d2)) => (d1, d2),
            _ => return Self::discounted_intrinsic(params),
        };

        // Rounding in Φ can leave deep out-of-the-money prices a hair below zero.
        let price = match params.option_type() {
            // C = S·N(d₁) - K·e^(-rT)·N(d₂)
            OptionType::Call => spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
            // P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
            OptionType::Put => discounted_strike * norm_cdf(-d2) - spot * norm_cdf(-d1),
        };
        price.max(0.0)
    }

    /// Closed-form price wrapped as a [`PricingResult`] with zero error.
    #[inline]
    pub fn pricing_result(&self, params: &MarketParameters) -> PricingResult {
        PricingResult::exact(self.price(params))
    }

    /// `max(S - K·e^(-rT), 0)` for calls, `max(K·e^(-rT) - S, 0)` for puts.
    #[inline]
    pub fn discounted_intrinsic(params: &MarketParameters) -> f64 {
        let forward_gap = params.spot() - params.strike() * params.discount_factor();
        match params.option_type() {
            OptionType::Call => forward_gap.max(0.0),
            OptionType::Put => (-forward_gap).max(0.0),
        }
    }

    /// Residual of put-call parity, `(C - P) - (S - K·e^(-rT))`.
    ///
    /// Zero up to floating-point rounding for every valid input.
    pub fn put_call_parity_gap(&self, params: &MarketParameters) -> f64 {
        let call = self.price(&params.with_option_type(OptionType::Call));
        let put = self.price(&params.with_option_type(OptionType::Put));
        (call - put) - (params.spot() - params.strike() * params.discount_factor())
    }

    /// Closed-form Greeks.
    ///
    /// - Delta: N(d₁) (call), N(d₁) - 1 (put)
    /// - Gamma: φ(d₁) / (S·σ·√T)
    /// - Vega: S·√T·φ(d₁)
    /// - Theta: -(S·σ·φ(d₁))/(2√T) ∓ r·K·e^(-rT)·N(±d₂)
    /// - Rho: ±K·T·e^(-rT)·N(±d₂)
    ///
    /// In the degenerate case the Greeks of the discounted intrinsic value
    /// are returned (gamma and vega are zero).
    pub fn greeks(&self, params: &MarketParameters) -> Greeks {
        let spot = params.spot();
        let strike = params.strike();
        let rate = params.rate();
        let expiry = params.maturity();
        let discount = params.discount_factor();
        let is_call = params.option_type().is_call();

        let (d1, d2) = match (self.d1(params), self.d2(params)) {
            (Some(d1), Some(d2)) => (d1, d2),
            _ => return Self::degenerate_greeks(params),
        };

        let sqrt_t = expiry.sqrt();
        let pdf_d1 = norm_pdf(d1);
        let gamma = pdf_d1 / (spot * params.vol_sqrt_t());
        let vega = spot * sqrt_t * pdf_d1;
        let time_decay = -(spot * params.volatility() * pdf_d1) / (2.0 * sqrt_t);

        if is_call {
            Greeks {
                delta: norm_cdf(d1),
                gamma,
                vega,
                theta: time_decay - rate * strike * discount * norm_cdf(d2),
                rho: strike * expiry * discount * norm_cdf(d2),
            }
        } else {
            Greeks {
                delta: norm_cdf(d1) - 1.0,
                gamma,
                vega,
                theta: time_decay + rate * strike * discount * norm_cdf(-d2),
                rho: -strike * expiry * discount * norm_cdf(-d2),
            }
        }
    }

    fn degenerate_greeks(params: &MarketParameters) -> Greeks {
        let discounted_strike = params.strike() * params.discount_factor();
        let in_the_money = match params.option_type() {
            OptionType::Call => params.spot() > discounted_strike,
            OptionType::Put => params.spot() < discounted_strike,
        };
        if !in_the_money {
            return Greeks::default();
        }

        // V = ±(S - K·e^(-rT))
        let sign = if params.option_type().is_call() { 1.0 } else { -1.0 };
        Greeks {
            delta: sign,
            gamma: 0.0,
            vega: 0.0,
            theta: -sign * params.rate() * discounted_strike,
            rho: sign * params.maturity() * discounted_strike,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(spot: f64, strike: f64, vol: f64, rate: f64, t: f64, ty: OptionType) -> MarketParameters {
        MarketParameters::new(spot, strike, vol, rate, t, ty).unwrap()
    }

    fn atm_call() -> MarketParameters {
        params(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call)
    }

    #[test]
    fn test_atm_call_reference_price() {
        // Hull reference value 10.4506
        assert_relative_eq!(BlackScholes.price(&atm_call()), 10.4506, epsilon = 1e-3);
    }

    #[test]
    fn test_atm_put_reference_price() {
        let put = atm_call().with_option_type(OptionType::Put);
        assert_relative_eq!(BlackScholes.price(&put), 5.5735, epsilon = 1e-3);
    }

    #[test]
    fn test_d1_d2_values() {
        let p = atm_call();
        // d1 = (0 + 0.07) / 0.2 = 0.35
        assert_relative_eq!(BlackScholes.d1(&p).unwrap(), 0.35, epsilon = 1e-12);
        assert_relative_eq!(BlackScholes.d2(&p).unwrap(), 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_price_is_deterministic() {
        let p = atm_call();
        let first = BlackScholes.price(&p);
        for _ in 0..10 {
            assert_eq!(BlackScholes.price(&p).to_bits(), first.to_bits());
        }
    }

    #[test]
    fn test_put_call_parity() {
        for strike in [50.0, 80.0, 100.0, 120.0, 200.0] {
            let p = params(100.0, strike, 0.3, 0.03, 2.0, OptionType::Call);
            assert!(BlackScholes.put_call_parity_gap(&p).abs() < 1e-10);
        }
    }

    #[test]
    fn test_deep_out_of_the_money_price_is_never_negative() {
        for strike in [11.0, 150.0, 317.0, 409.0] {
            for vol in [0.05, 0.3, 1.2] {
                for t in [0.01, 0.25, 5.0] {
                    for ty in [OptionType::Call, OptionType::Put] {
                        let p = params(100.0, strike, vol, 0.05, t, ty);
                        let price = BlackScholes.price(&p);
                        assert!(price >= 0.0, "K={strike} vol={vol} T={t} {ty}: {price}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_degenerate_volatility_returns_discounted_intrinsic() {
        let call = params(110.0, 100.0, 1e-14, 0.05, 1.0, OptionType::Call);
        assert!(BlackScholes::is_degenerate(&call));
        let expected = 110.0 - 100.0 * (-0.05_f64).exp();
        assert_relative_eq!(BlackScholes.price(&call), expected, epsilon = 1e-12);

        let put = call.with_option_type(OptionType::Put);
        assert_eq!(BlackScholes.price(&put), 0.0);
    }

    #[test]
    fn test_degenerate_maturity_returns_discounted_intrinsic() {
        let put = params(90.0, 100.0, 0.2, 0.05, 1e-22, OptionType::Put);
        assert!(BlackScholes::is_degenerate(&put));
        let price = BlackScholes.price(&put);
        assert!(price.is_finite());
        assert_relative_eq!(price, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_small_but_regular_vol_matches_intrinsic_limit() {
        let call = params(110.0, 100.0, 1e-6, 0.05, 1.0, OptionType::Call);
        let expected = 110.0 - 100.0 * (-0.05_f64).exp();
        assert_relative_eq!(BlackScholes.price(&call), expected, epsilon = 1e-8);
    }

    #[test]
    fn test_pricing_result_is_exact() {
        let result = BlackScholes.pricing_result(&atm_call());
        assert_eq!(result.price, BlackScholes.price(&atm_call()));
        assert_eq!(result.std_error, 0.0);
    }

    #[test]
    fn test_call_greeks_reference() {
        let g = BlackScholes.greeks(&atm_call());
        // N(0.35), φ(0.35)/20, 100·φ(0.35)
        assert_relative_eq!(g.delta, 0.6368, epsilon = 1e-4);
        assert_relative_eq!(g.gamma, 0.018762, epsilon = 1e-5);
        assert_relative_eq!(g.vega, 37.524, epsilon = 1e-2);
        assert_relative_eq!(g.theta, -6.414, epsilon = 1e-2);
        assert_relative_eq!(g.rho, 53.232, epsilon = 1e-2);
    }

    #[test]
    fn test_put_greeks_relations() {
        let call = atm_call();
        let put = call.with_option_type(OptionType::Put);
        let gc = BlackScholes.greeks(&call);
        let gp = BlackScholes.greeks(&put);

        assert_relative_eq!(gc.delta - gp.delta, 1.0, epsilon = 1e-12);
        assert_relative_eq!(gc.gamma, gp.gamma, epsilon = 1e-15);
        assert_relative_eq!(gc.vega, gp.vega, epsilon = 1e-12);
        // ρ_C - ρ_P = K·T·e^(-rT)
        assert_relative_eq!(gc.rho - gp.rho, 100.0 * (-0.05_f64).exp(), epsilon = 1e-9);
    }

    #[test]
    fn test_delta_matches_finite_difference() {
        let p = atm_call();
        let h = 1e-4;
        let up = BlackScholes.price(&p.with_spot(100.0 + h).unwrap());
        let down = BlackScholes.price(&p.with_spot(100.0 - h).unwrap());
        let fd = (up - down) / (2.0 * h);
        assert_relative_eq!(BlackScholes.greeks(&p).delta, fd, epsilon = 1e-4);
    }

    #[test]
    fn test_degenerate_greeks() {
        let call = params(110.0, 100.0, 1e-14, 0.05, 1.0, OptionType::Call);
        let g = BlackScholes.greeks(&call);
        assert_eq!(g.delta, 1.0);
        assert_eq!(g.gamma, 0.0);
        assert_eq!(g.vega, 0.0);
        assert_relative_eq!(g.rho, 100.0 * (-0.05_f64).exp(), epsilon = 1e-12);

        let otm_put = call.with_option_type(OptionType::Put);
        assert_eq!(BlackScholes.greeks(&otm_put), Greeks::default());
    }
}
