//! Validated market parameters for a single vanilla option.

use std::hash::{Hash, Hasher};

use crate::types::checks::{finite, positive};
use crate::types::{OptionType, Result};

/// Immutable input bundle for both pricing engines.
///
/// All numeric fields are finite. Spot, strike, volatility and maturity are
/// strictly positive; the rate may take any real value. Construction is the
/// only way to obtain an instance, so every `MarketParameters` in circulation
/// is valid.
///
/// Equality and hashing are by value.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketParameters;
/// use pricer_core::types::OptionType;
///
/// let params = MarketParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call).unwrap();
/// assert!((params.vol_sqrt_t() - 0.2).abs() < 1e-15);
///
/// // volatility must be > 0
/// assert!(MarketParameters::new(100.0, 100.0, -0.1, 0.05, 1.0, OptionType::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MarketParameters {
    spot: f64,
    strike: f64,
    volatility: f64,
    rate: f64,
    maturity: f64,
    option_type: OptionType,
}

impl MarketParameters {
    /// Creates validated market parameters.
    ///
    /// # Arguments
    /// * `spot` - Current asset price S₀ (> 0)
    /// * `strike` - Option strike K (> 0)
    /// * `volatility` - Annualised volatility σ (> 0)
    /// * `rate` - Continuously-compounded risk-free rate r (any finite value)
    /// * `maturity` - Time to maturity T in years (> 0)
    /// * `option_type` - Call or Put
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the first field that violates
    /// its constraint.
    pub fn new(
        spot: f64,
        strike: f64,
        volatility: f64,
        rate: f64,
        maturity: f64,
        option_type: OptionType,
    ) -> Result<Self> {
        Ok(Self {
            spot: positive("spot", spot)?,
            strike: positive("strike", strike)?,
            volatility: positive("volatility", volatility)?,
            // -0.0 + 0.0 == +0.0, keeps Hash consistent with PartialEq
            rate: finite("rate", rate)? + 0.0,
            maturity: positive("maturity", maturity)?,
            option_type,
        })
    }

    /// Returns the spot price S₀.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike K.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the volatility σ.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the risk-free rate r.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the time to maturity T.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Discount factor e^(−rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Forward price S₀·e^(rT).
    #[inline]
    pub fn forward(&self) -> f64 {
        self.spot * (self.rate * self.maturity).exp()
    }

    /// Total standard deviation σ·√T.
    #[inline]
    pub fn vol_sqrt_t(&self) -> f64 {
        self.volatility * self.maturity.sqrt()
    }

    /// Returns a copy with a different option type.
    #[inline]
    pub fn with_option_type(&self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..*self
        }
    }

    /// Returns a copy with a different volatility.
    ///
    /// # Errors
    /// `InvalidParameter` if `volatility` is not finite and positive.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self> {
        Ok(Self {
            volatility: positive("volatility", volatility)?,
            ..*self
        })
    }

    /// Returns a copy with a different spot.
    ///
    /// # Errors
    /// `InvalidParameter` if `spot` is not finite and positive.
    pub fn with_spot(&self, spot: f64) -> Result<Self> {
        Ok(Self {
            spot: positive("spot", spot)?,
            ..*self
        })
    }
}

// All fields are finite, so PartialEq is reflexive.
impl Eq for MarketParameters {}

impl Hash for MarketParameters {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.spot.to_bits().hash(state);
        self.strike.to_bits().hash(state);
        self.volatility.to_bits().hash(state);
        self.rate.to_bits().hash(state);
        self.maturity.to_bits().hash(state);
        self.option_type.hash(state);
    }
}
