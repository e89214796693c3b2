//! Error types for structured error handling.
//!
//! Every precondition violation in the pricing stack is reported as a
//! [`PricingError::InvalidParameter`] carrying the offending field (or
//! argument) name and the violated constraint. Errors are raised
//! synchronously at construction or invocation and are never retried.

use thiserror::Error;

/// Convenience alias for results produced by the pricing crates.
pub type Result<T, E = PricingError> = std::result::Result<T, E>;

/// Pricing errors.
///
/// # Variants
/// - `InvalidParameter`: An input field or argument violates its constraint
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::invalid("volatility", "must be > 0");
/// assert_eq!(format!("{}", err), "Invalid parameter 'volatility': must be > 0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// An input field or argument violates its documented constraint.
    #[error("Invalid parameter '{field}': {constraint}")]
    InvalidParameter {
        /// Name of the offending field or argument
        field: &'static str,
        /// Human-readable description of the violated constraint
        constraint: String,
    },
}

impl PricingError {
    /// Creates an `InvalidParameter` error.
    #[inline]
    pub fn invalid(field: &'static str, constraint: impl Into<String>) -> Self {
        PricingError::InvalidParameter {
            field,
            constraint: constraint.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            PricingError::InvalidParameter { field, .. } => field,
        }
    }
}
