//! Market input bundle shared by the analytical and simulation engines.
//!
//! # Components
//!
//! - [`params`]: [`MarketParameters`], the validated, immutable input bundle
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::MarketParameters;
//! use pricer_core::types::OptionType;
//!
//! let params = MarketParameters::new(100.0, 95.0, 0.25, 0.03, 0.5, OptionType::Put).unwrap();
//! assert_eq!(params.strike(), 95.0);
//! assert_eq!(params.option_type(), OptionType::Put);
//! ```

pub mod params;

// Re-export commonly used types
pub use params::MarketParameters;
