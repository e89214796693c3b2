//! Core error and option types.
//!
//! This module provides:
//! - `error`: The [`PricingError`] type and the crate-wide [`Result`] alias
//! - `option_type`: The closed [`OptionType`] variant (Call/Put)
//! - `checks`: Reusable argument validators producing `InvalidParameter`
//! - `pricing_result`: [`PricingResult`] and [`ConfidenceInterval`]
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level.

pub mod checks;
pub mod error;
pub mod option_type;
pub mod pricing_result;

// Re-export commonly used types at module level
pub use error::{PricingError, Result};
pub use option_type::OptionType;
pub use pricing_result::{ConfidenceInterval, PricingResult};
