//! # Random Number Generation Infrastructure
//!
//! This module provides the seeded random source used by the path simulator.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: Every generator is constructed from an explicit seed;
//!   there is no process-wide generator.
//! - **Sub-streams**: [`PricerRng::substream`] derives a deterministic generator
//!   for each block of paths, so parallel workers never share mutable state.
//! - **Efficiency**: Zero-allocation batch operations via `&mut [f64]` slices.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//! let uniform_value = rng.gen_uniform();
//! let normal_value = rng.gen_normal();
//!
//! // Independent, reproducible stream for block 7 of a simulation
//! let mut block_rng = PricerRng::substream(12345, 7);
//! let mut buffer = vec![0.0; 1000];
//! block_rng.fill_normal(&mut buffer);
//! ```

mod prng;

// Public re-exports
pub use prng::PricerRng;

#[cfg(test)]
mod tests;
