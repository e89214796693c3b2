//! # pricer_models: Closed-Form Option Models (Layer 2)
//!
//! Provides the analytical pricing engine of the workspace:
//! - [`analytical::BlackScholes`]: European call/put prices and Greeks
//! - [`analytical::distributions`]: standard normal CDF, PDF and inverse CDF
//!
//! ## Example
//!
//! ```
//! use pricer_core::market_data::MarketParameters;
//! use pricer_core::types::OptionType;
//! use pricer_models::analytical::BlackScholes;
//!
//! let params = MarketParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call).unwrap();
//! let price = BlackScholes.price(&params);
//! assert!((price - 10.4506).abs() < 1e-3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
