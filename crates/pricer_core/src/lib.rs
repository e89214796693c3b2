//! # pricer_core: Foundation Types for Vanilla Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - The single library error type, [`types::PricingError`]
//! - The closed option variant, [`types::OptionType`]
//! - The validated input bundle shared by every engine, [`market_data::MarketParameters`]
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates and only minimal
//! external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::MarketParameters;
//! use pricer_core::types::{OptionType, PricingError};
//!
//! let params = MarketParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call).unwrap();
//! assert!((params.discount_factor() - (-0.05_f64).exp()).abs() < 1e-15);
//!
//! let err = MarketParameters::new(100.0, 0.0, 0.2, 0.05, 1.0, OptionType::Call).unwrap_err();
//! assert!(matches!(err, PricingError::InvalidParameter { field: "strike", .. }));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionType` and `MarketParameters`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod types;
