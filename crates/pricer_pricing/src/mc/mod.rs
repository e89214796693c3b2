//! Monte Carlo simulation and pricing.
//!
//! # Architecture
//!
//! ```text
//! PathSimulator
//! ├── SimulationConfig  (paths, steps, seed, retention, parallelism)
//! ├── PricerRng         (one sub-stream per block of paths)
//! └── SimulatedPaths    (terminal prices, optional full paths)
//!
//! MonteCarloPricer
//! └── discounted_payoffs() → mean, standard error, confidence interval
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::market_data::MarketParameters;
//! use pricer_core::types::OptionType;
//! use pricer_pricing::mc::{MonteCarloPricer, PathSimulator, SimulationConfig};
//!
//! let params = MarketParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call).unwrap();
//! let config = SimulationConfig::builder()
//!     .n_paths(20_000)
//!     .seed(42)
//!     .parallel(true)
//!     .build()
//!     .unwrap();
//!
//! let paths = PathSimulator::new(config).simulate(&params);
//! let result = MonteCarloPricer::new().price(&paths, &params).unwrap();
//! println!("Price: {:.4} +/- {:.4}", result.price, result.std_error);
//! ```

pub mod config;
pub mod paths;
pub mod pricer;

// Re-exports for convenient access
pub use config::{
    SimulationConfig, SimulationConfigBuilder, MAX_PATHS, MAX_RETAINED_VALUES, MAX_STEPS,
};
pub use paths::{
    simulate, Histogram, PathSimulator, SimulatedPaths, MAX_HISTOGRAM_BINS, PATH_BLOCK_SIZE,
};
pub use pricer::{discounted_payoffs, MonteCarloPricer, DEFAULT_CONFIDENCE_LEVEL};
