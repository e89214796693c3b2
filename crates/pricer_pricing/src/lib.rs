//! # Pricer Pricing (Layer 3: Simulation Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing provides the stochastic half of the pricing stack:
//! - Seeded random number generation with per-block sub-streams ([`rng`])
//! - GBM path simulation producing [`mc::SimulatedPaths`]
//! - The Monte Carlo estimator [`mc::MonteCarloPricer`]
//!
//! ## Reproducibility
//!
//! A simulation with a fixed seed is exactly reproducible, whether it runs on
//! one thread or on the rayon pool. Each call owns its random source; there is
//! no process-wide generator.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::market_data::MarketParameters;
//! use pricer_core::types::OptionType;
//! use pricer_pricing::mc::{simulate, MonteCarloPricer};
//!
//! let params = MarketParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call).unwrap();
//! let paths = simulate(&params, 10_000, 1, Some(42)).unwrap();
//! let result = MonteCarloPricer::new().price(&paths, &params).unwrap();
//! assert!(result.std_error > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod mc;
pub mod rng;

// Re-export commonly used items for convenience
pub use mc::{MonteCarloPricer, PathSimulator, SimulatedPaths, SimulationConfig};
