//! Path generation for Monte Carlo simulation.
//!
//! This module implements Geometric Brownian Motion (GBM) path generation
//! using the exact log-space step
//!
//! ```text
//! S(t+dt) = S(t) × exp((r - 0.5σ²)dt + σ√dt × Z)
//! ```
//!
//! # Block Decomposition
//!
//! Paths are generated in blocks of [`PATH_BLOCK_SIZE`]. Block `b` draws its
//! normals from `PricerRng::substream(seed, b)`, so the output depends only on
//! the seed and the configuration, never on the number of worker threads.
//! Blocks are concatenated in path-index order.
//!
//! # Memory Layout
//!
//! Retained paths are stored in row-major order:
//! `paths[path_idx * (n_steps + 1) + step_idx]` where `step_idx = 0` contains
//! the initial spot price.

use pricer_core::market_data::MarketParameters;
use pricer_core::types::checks::at_least_one;
use pricer_core::types::{PricingError, Result};
use rayon::prelude::*;

use super::config::SimulationConfig;
use crate::rng::PricerRng;

/// Number of paths generated from one RNG sub-stream.
pub const PATH_BLOCK_SIZE: usize = 1024;

/// Upper bound on the number of histogram bins.
pub const MAX_HISTOGRAM_BINS: usize = 10_000;

/// Precomputed per-step GBM increment.
#[derive(Clone, Copy, Debug, PartialEq)]
struct GbmStep {
    drift_dt: f64,
    vol_sqrt_dt: f64,
}

impl GbmStep {
    fn new(params: &MarketParameters, n_steps: usize) -> Self {
        let dt = params.maturity() / n_steps as f64;
        let sigma = params.volatility();
        Self {
            drift_dt: (params.rate() - 0.5 * sigma * sigma) * dt,
            vol_sqrt_dt: sigma * dt.sqrt(),
        }
    }

    #[inline]
    fn advance(&self, price: f64, z: f64) -> f64 {
        price * (self.drift_dt + self.vol_sqrt_dt * z).exp()
    }
}

/// Output of one block: terminal prices and, optionally, full rows.
struct Block {
    terminal: Vec<f64>,
    rows: Vec<f64>,
}

/// Simulated terminal price distribution.
///
/// Created fresh per simulation request and immutable afterwards. Full paths
/// are only present when the simulation was configured to retain them.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulatedPaths {
    terminal: Vec<f64>,
    n_steps: usize,
    seed: Option<u64>,
    paths: Option<Vec<f64>>,
}

impl SimulatedPaths {
    /// Wraps externally supplied terminal prices.
    ///
    /// The result reports a single step and no seed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` on field `terminal_prices` if any price is
    /// negative or not finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::mc::SimulatedPaths;
    ///
    /// let paths = SimulatedPaths::from_terminal_prices(vec![90.0, 100.0, 110.0]).unwrap();
    /// assert_eq!(paths.len(), 3);
    /// assert_eq!(paths.mean(), Some(100.0));
    /// ```
    pub fn from_terminal_prices(terminal: Vec<f64>) -> Result<Self> {
        if let Some(bad) = terminal.iter().find(|s| !(s.is_finite() && **s >= 0.0)) {
            return Err(PricingError::invalid(
                "terminal_prices",
                format!("must be finite and >= 0, got {}", bad),
            ));
        }
        Ok(Self {
            terminal,
            n_steps: 1,
            seed: None,
            paths: None,
        })
    }

    /// Terminal prices S_T in path-index order.
    #[inline]
    pub fn terminal_prices(&self) -> &[f64] {
        &self.terminal
    }

    /// Number of paths.
    #[inline]
    pub fn len(&self) -> usize {
        self.terminal.len()
    }

    /// Returns `true` if there are no paths.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terminal.is_empty()
    }

    /// Number of time steps each path was discretised into.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Master seed the paths were generated from.
    ///
    /// For unseeded simulations this is the seed drawn from OS entropy, so
    /// the run can be replayed with `SimulationConfigBuilder::seed`.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns `true` if full paths were retained.
    #[inline]
    pub fn has_full_paths(&self) -> bool {
        self.paths.is_some()
    }

    /// Full path `i` (`n_steps + 1` prices starting at S₀), if retained.
    pub fn path(&self, i: usize) -> Option<&[f64]> {
        let row = self.n_steps + 1;
        self.paths
            .as_deref()
            .and_then(|paths| paths.get(i * row..(i + 1) * row))
    }

    /// Sample mean of the terminal prices.
    pub fn mean(&self) -> Option<f64> {
        if self.terminal.is_empty() {
            return None;
        }
        Some(self.terminal.iter().sum::<f64>() / self.terminal.len() as f64)
    }

    /// Sample standard deviation (n − 1 denominator); 0 for a single path.
    pub fn std_dev(&self) -> Option<f64> {
        let mean = self.mean()?;
        let n = self.terminal.len();
        if n < 2 {
            return Some(0.0);
        }
        let sum_sq: f64 = self.terminal.iter().map(|s| (s - mean).powi(2)).sum();
        Some((sum_sq / (n - 1) as f64).sqrt())
    }

    /// Smallest terminal price.
    pub fn min(&self) -> Option<f64> {
        self.terminal.iter().copied().reduce(f64::min)
    }

    /// Largest terminal price.
    pub fn max(&self) -> Option<f64> {
        self.terminal.iter().copied().reduce(f64::max)
    }

    /// Equal-width histogram of the terminal prices over `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `bins` is 0 or above
    /// [`MAX_HISTOGRAM_BINS`], or if there are no paths.
    pub fn histogram(&self, bins: usize) -> Result<Histogram> {
        at_least_one("bins", bins)?;
        if bins > MAX_HISTOGRAM_BINS {
            return Err(PricingError::invalid(
                "bins",
                format!("must be <= {}, got {}", MAX_HISTOGRAM_BINS, bins),
            ));
        }
        let (lower, upper) = match (self.min(), self.max()) {
            (Some(lower), Some(upper)) => (lower, upper),
            _ => return Err(PricingError::invalid("paths", "must not be empty")),
        };

        let width = (upper - lower) / bins as f64;
        let mut counts = vec![0usize; bins];
        for &s in &self.terminal {
            let idx = if width > 0.0 {
                (((s - lower) / width) as usize).min(bins - 1)
            } else {
                0
            };
            counts[idx] += 1;
        }

        Ok(Histogram {
            lower,
            upper,
            counts,
        })
    }
}

/// Equal-width histogram of a terminal price distribution.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Histogram {
    /// Left edge of the first bin.
    pub lower: f64,
    /// Right edge of the last bin (inclusive).
    pub upper: f64,
    /// Number of observations per bin.
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Width shared by all bins.
    #[inline]
    pub fn bin_width(&self) -> f64 {
        (self.upper - self.lower) / self.counts.len() as f64
    }

    /// Total number of observations.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Iterates over `(left_edge, right_edge, count)` per bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        let width = self.bin_width();
        self.counts.iter().enumerate().map(move |(i, &count)| {
            let left = self.lower + i as f64 * width;
            (left, left + width, count)
        })
    }
}

/// GBM path simulator.
///
/// Each call to [`simulate`](Self::simulate) owns its random source; nothing
/// is shared between calls.
///
/// # Examples
///
/// ```rust
/// use pricer_core::market_data::MarketParameters;
/// use pricer_core::types::OptionType;
/// use pricer_pricing::mc::{PathSimulator, SimulationConfig};
///
/// let params = MarketParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call).unwrap();
/// let config = SimulationConfig::builder().n_paths(1000).seed(42).build().unwrap();
///
/// let simulator = PathSimulator::new(config);
/// let a = simulator.simulate(&params);
/// let b = simulator.simulate(&params);
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Debug)]
pub struct PathSimulator {
    config: SimulationConfig,
}

impl PathSimulator {
    /// Creates a simulator from a validated configuration.
    #[inline]
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates `n_paths` GBM paths under `params`.
    #[tracing::instrument(
        skip_all,
        fields(n_paths = self.config.n_paths(), n_steps = self.config.n_steps())
    )]
    pub fn simulate(&self, params: &MarketParameters) -> SimulatedPaths {
        let n_paths = self.config.n_paths();
        let n_steps = self.config.n_steps();
        let retain = self.config.retain_paths();
        let seed = self.config.seed().unwrap_or_else(PricerRng::entropy_seed);
        let n_blocks = n_paths.div_ceil(PATH_BLOCK_SIZE);
        let step = GbmStep::new(params, n_steps);

        tracing::debug!(
            seed,
            n_blocks,
            parallel = self.config.parallel(),
            "simulating GBM paths"
        );

        let run_block = |b: usize| {
            let start = b * PATH_BLOCK_SIZE;
            let len = PATH_BLOCK_SIZE.min(n_paths - start);
            simulate_block(&step, params.spot(), seed, b, len, n_steps, retain)
        };

        let blocks: Vec<Block> = if self.config.parallel() {
            (0..n_blocks).into_par_iter().map(run_block).collect()
        } else {
            (0..n_blocks).map(run_block).collect()
        };

        let mut terminal = Vec::with_capacity(n_paths);
        let mut rows = Vec::with_capacity(if retain { n_paths * (n_steps + 1) } else { 0 });
        for block in blocks {
            terminal.extend_from_slice(&block.terminal);
            rows.extend_from_slice(&block.rows);
        }

        let paths = SimulatedPaths {
            terminal,
            n_steps,
            seed: Some(seed),
            paths: retain.then_some(rows),
        };
        tracing::debug!(mean = ?paths.mean(), "simulation complete");
        paths
    }
}

/// Generates one block of `len` paths from sub-stream `block` of `seed`.
fn simulate_block(
    step: &GbmStep,
    spot: f64,
    seed: u64,
    block: usize,
    len: usize,
    n_steps: usize,
    retain: bool,
) -> Block {
    let mut rng = PricerRng::substream(seed, block as u64);
    let mut terminal = Vec::with_capacity(len);
    let mut rows = Vec::with_capacity(if retain { len * (n_steps + 1) } else { 0 });

    for _ in 0..len {
        let mut price = spot;
        if retain {
            rows.push(price);
        }
        for _ in 0..n_steps {
            price = step.advance(price, rng.gen_normal());
            if retain {
                rows.push(price);
            }
        }
        terminal.push(price);
    }

    Block { terminal, rows }
}

/// Simulates terminal prices for `params`.
///
/// Serial convenience wrapper over [`PathSimulator`].
///
/// # Errors
///
/// Returns `InvalidParameter` if `n_paths` or `n_steps` is 0 or above the
/// limits of [`SimulationConfig`].
///
/// # Examples
///
/// ```rust
/// use pricer_core::market_data::MarketParameters;
/// use pricer_core::types::OptionType;
/// use pricer_pricing::mc::simulate;
///
/// let params = MarketParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call).unwrap();
/// let paths = simulate(&params, 10_000, 1, Some(42)).unwrap();
/// assert_eq!(paths.len(), 10_000);
/// assert!(simulate(&params, 0, 1, Some(42)).is_err());
/// ```
pub fn simulate(
    params: &MarketParameters,
    n_paths: usize,
    n_steps: usize,
    seed: Option<u64>,
) -> Result<SimulatedPaths> {
    let config = SimulationConfig::builder()
        .n_paths(n_paths)
        .n_steps(n_steps)
        .maybe_seed(seed)
        .build()?;
    Ok(PathSimulator::new(config).simulate(params))
}
