//! Option type variant.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Vanilla option type.
///
/// A closed variant; both pricers match on it exhaustively.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// assert_eq!(OptionType::Call.payoff(110.0, 100.0), 10.0);
/// assert_eq!(OptionType::Put.payoff(110.0, 100.0), 0.0);
/// assert_eq!("PUT".parse::<OptionType>().unwrap(), OptionType::Put);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike: max(S - K, 0)
    #[default]
    Call,
    /// Right to sell at the strike: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Returns `true` for calls.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Undiscounted payoff at expiry for a terminal price.
    #[inline]
    pub fn payoff(&self, terminal: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (terminal - strike).max(0.0),
            OptionType::Put => (strike - terminal).max(0.0),
        }
    }

    /// Returns the other leg (Call ↔ Put).
    #[inline]
    pub fn opposite(&self) -> Self {
        match self {
            OptionType::Call => OptionType::Put,
            OptionType::Put => OptionType::Call,
        }
    }

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(PricingError::invalid(
                "option_type",
                format!("must be 'call' or 'put', got '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payoff_call() {
        assert_eq!(OptionType::Call.payoff(120.0, 100.0), 20.0);
        assert_eq!(OptionType::Call.payoff(80.0, 100.0), 0.0);
    }

    #[test]
    fn test_payoff_put() {
        assert_eq!(OptionType::Put.payoff(80.0, 100.0), 20.0);
        assert_eq!(OptionType::Put.payoff(120.0, 100.0), 0.0);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" Put ".parse::<OptionType>().unwrap(), OptionType::Put);
        let err = "straddle".parse::<OptionType>().unwrap_err();
        assert_eq!(err.field(), "option_type");
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for ty in [OptionType::Call, OptionType::Put] {
            assert_eq!(ty.to_string().parse::<OptionType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_opposite() {
        assert_eq!(OptionType::Call.opposite(), OptionType::Put);
        assert_eq!(OptionType::Put.opposite(), OptionType::Call);
    }
}
