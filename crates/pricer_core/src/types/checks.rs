//! Argument validators shared by the pricing crates.
//!
//! Each check returns the validated value on success so it can be used
//! inline in constructors.

use super::error::{PricingError, Result};

/// Requires `value` to be finite (not NaN or infinite).
#[inline]
pub fn finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::invalid(field, format!("must be finite, got {}", value)))
    }
}

/// Requires `value` to be finite and strictly positive.
#[inline]
pub fn positive(field: &'static str, value: f64) -> Result<f64> {
    let value = finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(PricingError::invalid(field, format!("must be > 0, got {}", value)))
    }
}

/// Requires `value` to lie in the open interval (0, 1).
///
/// Used for confidence levels.
#[inline]
pub fn open_unit_interval(field: &'static str, value: f64) -> Result<f64> {
    let value = finite(field, value)?;
    if value > 0.0 && value < 1.0 {
        Ok(value)
    } else {
        Err(PricingError::invalid(
            field,
            format!("must be in (0, 1), got {}", value),
        ))
    }
}

/// Requires a count to be at least one.
#[inline]
pub fn at_least_one(field: &'static str, value: usize) -> Result<usize> {
    if value >= 1 {
        Ok(value)
    } else {
        Err(PricingError::invalid(field, "must be >= 1"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite() {
        assert_eq!(finite("rate", -0.01).unwrap(), -0.01);
        assert!(finite("rate", f64::NAN).is_err());
        assert!(finite("rate", f64::INFINITY).is_err());
    }

    #[test]
    fn test_positive() {
        assert_eq!(positive("spot", 1e-12).unwrap(), 1e-12);
        let err = positive("spot", 0.0).unwrap_err();
        assert_eq!(err.field(), "spot");
        assert!(err.to_string().contains("must be > 0"));
        assert!(positive("spot", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_open_unit_interval() {
        assert!(open_unit_interval("confidence", 0.95).is_ok());
        assert!(open_unit_interval("confidence", 0.0).is_err());
        assert!(open_unit_interval("confidence", 1.0).is_err());
        assert!(open_unit_interval("confidence", 1.5).is_err());
        assert!(open_unit_interval("confidence", f64::NAN).is_err());
    }

    #[test]
    fn test_at_least_one() {
        assert_eq!(at_least_one("n_steps", 1).unwrap(), 1);
        assert!(at_least_one("n_steps", 0).is_err());
    }
}
