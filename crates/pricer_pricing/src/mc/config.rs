//! Path simulation configuration.
//!
//! This module provides the configuration type and builder for GBM path
//! simulation. All size limits are checked once, at build time.

use pricer_core::types::checks::at_least_one;
use pricer_core::types::{PricingError, Result};

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Maximum number of prices held when full paths are retained.
pub const MAX_RETAINED_VALUES: usize = 50_000_000;

/// Path simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`SimulationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(10_000)
///     .n_steps(252)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.n_steps(), 252);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of simulation paths.
    n_paths: usize,
    /// Number of time steps per path.
    n_steps: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Keep every intermediate price, not only the terminal one.
    retain_paths: bool,
    /// Generate blocks on the rayon thread pool.
    parallel: bool,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns whether full paths are retained.
    #[inline]
    pub fn retain_paths(&self) -> bool {
        self.retain_paths
    }

    /// Returns whether blocks are generated in parallel.
    #[inline]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - `n_paths` is 0 or greater than 10,000,000
    /// - `n_steps` is 0 or greater than 10,000
    /// - full paths are retained and `n_paths × (n_steps + 1)` exceeds
    ///   [`MAX_RETAINED_VALUES`]
    pub fn validate(&self) -> Result<()> {
        at_least_one("n_paths", self.n_paths)?;
        if self.n_paths > MAX_PATHS {
            return Err(PricingError::invalid(
                "n_paths",
                format!("must be <= {}, got {}", MAX_PATHS, self.n_paths),
            ));
        }
        at_least_one("n_steps", self.n_steps)?;
        if self.n_steps > MAX_STEPS {
            return Err(PricingError::invalid(
                "n_steps",
                format!("must be <= {}, got {}", MAX_STEPS, self.n_steps),
            ));
        }
        if self.retain_paths {
            let values = self.n_paths.saturating_mul(self.n_steps + 1);
            if values > MAX_RETAINED_VALUES {
                return Err(PricingError::invalid(
                    "retain_paths",
                    format!(
                        "n_paths x (n_steps + 1) must be <= {}, got {}",
                        MAX_RETAINED_VALUES, values
                    ),
                ));
            }
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(50_000)
///     .n_steps(252)  // Daily steps for 1 year
///     .parallel(true)
///     .build()
///     .expect("valid config");
/// assert!(config.parallel());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    seed: Option<u64>,
    retain_paths: bool,
    parallel: bool,
}

impl SimulationConfigBuilder {
    /// Sets the number of simulation paths, in [1, 10_000_000].
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path, in [1, 10_000].
    ///
    /// Defaults to 1: GBM is sampled exactly at any horizon, so a single
    /// step is enough for terminal prices.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Retains every intermediate price in the output.
    #[inline]
    pub fn retain_paths(mut self, retain: bool) -> Self {
        self.retain_paths = retain;
        self
    }

    /// Generates path blocks on the rayon thread pool.
    ///
    /// Output is bit-identical to a serial run with the same seed.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `n_paths` is not set or any limit in
    /// [`SimulationConfig::validate`] is violated.
    pub fn build(self) -> Result<SimulationConfig> {
        let n_paths = self
            .n_paths
            .ok_or_else(|| PricingError::invalid("n_paths", "must be specified"))?;

        let config = SimulationConfig {
            n_paths,
            n_steps: self.n_steps.unwrap_or(1),
            seed: self.seed,
            retain_paths: self.retain_paths,
            parallel: self.parallel,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_valid() {
        let config = SimulationConfig::builder()
            .n_paths(10_000)
            .n_steps(252)
            .build()
            .unwrap();

        assert_eq!(config.n_paths(), 10_000);
        assert_eq!(config.n_steps(), 252);
        assert_eq!(config.seed(), None);
        assert!(!config.retain_paths());
        assert!(!config.parallel());
    }

    #[test]
    fn test_config_default_single_step() {
        let config = SimulationConfig::builder().n_paths(10).build().unwrap();
        assert_eq!(config.n_steps(), 1);
    }

    #[test]
    fn test_config_builder_with_seed() {
        let config = SimulationConfig::builder()
            .n_paths(1000)
            .seed(42)
            .build()
            .unwrap();
        assert_eq!(config.seed(), Some(42));

        let config = SimulationConfig::builder()
            .n_paths(1000)
            .seed(42)
            .maybe_seed(None)
            .build()
            .unwrap();
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_config_invalid_zero_paths() {
        let err = SimulationConfig::builder().n_paths(0).build().unwrap_err();
        assert_eq!(err.field(), "n_paths");
    }

    #[test]
    fn test_config_invalid_too_many_paths() {
        let err = SimulationConfig::builder()
            .n_paths(MAX_PATHS + 1)
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "n_paths");
    }

    #[test]
    fn test_config_invalid_zero_steps() {
        let err = SimulationConfig::builder()
            .n_paths(1000)
            .n_steps(0)
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "n_steps");
    }

    #[test]
    fn test_config_invalid_too_many_steps() {
        let err = SimulationConfig::builder()
            .n_paths(1000)
            .n_steps(MAX_STEPS + 1)
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "n_steps");
    }

    #[test]
    fn test_config_missing_paths() {
        let err = SimulationConfig::builder().n_steps(100).build().unwrap_err();
        assert_eq!(err.field(), "n_paths");
        assert!(err.to_string().contains("must be specified"));
    }

    #[test]
    fn test_config_retention_limit() {
        let err = SimulationConfig::builder()
            .n_paths(MAX_PATHS)
            .n_steps(252)
            .retain_paths(true)
            .build()
            .unwrap_err();
        assert_eq!(err.field(), "retain_paths");

        // Same size is fine when only terminal prices are kept
        assert!(SimulationConfig::builder()
            .n_paths(MAX_PATHS)
            .n_steps(252)
            .build()
            .is_ok());
    }
}
