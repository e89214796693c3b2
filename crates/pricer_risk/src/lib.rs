//! # Pricer Risk (L4: Application)
//!
//! Tail-risk measures over simulated terminal price distributions.
//!
//! This crate provides:
//! - Empirical Value at Risk with a nearest-rank quantile
//! - Expected shortfall as the average of the losses at or beyond the VaR rank
//! - Loss conventions for the underlying and for long or short option positions
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  var/  - RiskEstimator, RiskResult,     │
//! │          Exposure                       │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_pricing (L3)           │
//! │  GBM path simulation, Monte Carlo       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_core::market_data::MarketParameters;
//! use pricer_core::types::OptionType;
//! use pricer_pricing::mc::simulate;
//! use pricer_risk::var::RiskEstimator;
//!
//! let params = MarketParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call).unwrap();
//! let paths = simulate(&params, 10_000, 1, Some(42)).unwrap();
//!
//! let risk = RiskEstimator::new().assess(&paths, &params, 0.95).unwrap();
//! assert!(risk.var > 0.0);
//! assert!(risk.es >= risk.var);
//! ```

#![warn(missing_docs)]

pub mod var;

pub use var::{Exposure, RiskEstimator, RiskResult};
