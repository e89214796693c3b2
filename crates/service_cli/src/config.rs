//! Run configuration management
//!
//! Layers, lowest to highest priority:
//! 1. Built-in defaults
//! 2. TOML file (`--config`, missing file tolerated)
//! 3. Environment variables prefixed `OPTRISK_` (e.g. `OPTRISK_SPOT=105`)
//! 4. CLI flags

use std::path::Path;

use clap::{Args, ValueEnum};
use pricer_core::market_data::MarketParameters;
use pricer_core::types::OptionType;
use pricer_pricing::mc::SimulationConfig;
use pricer_risk::var::Exposure;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "OPTRISK";

/// Output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Box-drawn tables for terminals
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Position whose tail risk is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ExposureKind {
    /// One unit of the underlying
    #[default]
    Underlying,
    /// Bought option, premium = analytical price
    LongOption,
    /// Sold option, premium = analytical price
    ShortOption,
}

impl ExposureKind {
    /// Exposure for a given option premium.
    pub fn with_premium(self, premium: f64) -> Exposure {
        match self {
            ExposureKind::Underlying => Exposure::Underlying,
            ExposureKind::LongOption => Exposure::LongOption { premium },
            ExposureKind::ShortOption => Exposure::ShortOption { premium },
        }
    }
}

/// Fully resolved run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Spot price S₀
    pub spot: f64,
    /// Strike K
    pub strike: f64,
    /// Annualised volatility σ
    pub volatility: f64,
    /// Continuously compounded risk-free rate r
    pub rate: f64,
    /// Time to maturity T in years
    pub maturity: f64,
    /// Call or put
    pub option_type: OptionType,
    /// Number of Monte Carlo paths
    pub n_paths: usize,
    /// Time steps per path
    pub n_steps: usize,
    /// Seed for reproducible runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// VaR/ES confidence level α
    pub confidence: f64,
    /// Position for VaR/ES
    pub exposure: ExposureKind,
    /// Generate paths on all cores
    pub parallel: bool,
    /// Output format
    pub format: OutputFormat,
    /// Histogram bins for the simulate command
    pub bins: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            volatility: 0.2,
            rate: 0.05,
            maturity: 1.0,
            option_type: OptionType::Call,
            n_paths: 10_000,
            n_steps: 1,
            seed: None,
            confidence: 0.95,
            exposure: ExposureKind::Underlying,
            parallel: false,
            format: OutputFormat::Table,
            bins: 50,
        }
    }
}

impl RunConfig {
    /// Load configuration from defaults, `path` and the process environment.
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_sources(
            config::File::from(path).required(false),
            config::Environment::with_prefix(ENV_PREFIX).try_parsing(true),
        )
    }

    fn from_sources<F>(file: F, env: config::Environment) -> Result<Self>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&RunConfig::default())?)
            .add_source(file)
            .add_source(env)
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &Overrides) {
        if let Some(spot) = cli.spot {
            self.spot = spot;
        }
        if let Some(strike) = cli.strike {
            self.strike = strike;
        }
        if let Some(volatility) = cli.volatility {
            self.volatility = volatility;
        }
        if let Some(rate) = cli.rate {
            self.rate = rate;
        }
        if let Some(maturity) = cli.maturity {
            self.maturity = maturity;
        }
        if let Some(option_type) = cli.option_type {
            self.option_type = option_type;
        }
        if let Some(n_paths) = cli.paths {
            self.n_paths = n_paths;
        }
        if let Some(n_steps) = cli.steps {
            self.n_steps = n_steps;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if let Some(confidence) = cli.confidence {
            self.confidence = confidence;
        }
        if let Some(exposure) = cli.exposure {
            self.exposure = exposure;
        }
        if cli.parallel {
            self.parallel = true;
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(bins) = cli.bins {
            self.bins = bins;
        }
    }

    /// Validated market inputs.
    pub fn market_parameters(&self) -> Result<MarketParameters> {
        Ok(MarketParameters::new(
            self.spot,
            self.strike,
            self.volatility,
            self.rate,
            self.maturity,
            self.option_type,
        )?)
    }

    /// Validated simulation settings.
    pub fn simulation_config(&self) -> Result<SimulationConfig> {
        Ok(SimulationConfig::builder()
            .n_paths(self.n_paths)
            .n_steps(self.n_steps)
            .maybe_seed(self.seed)
            .parallel(self.parallel)
            .build()?)
    }
}

/// CLI overrides for [`RunConfig`]
#[derive(Debug, Clone, Default, Args)]
pub struct Overrides {
    /// Spot price
    #[arg(long, global = true)]
    pub spot: Option<f64>,

    /// Strike price
    #[arg(long, global = true)]
    pub strike: Option<f64>,

    /// Annualised volatility (e.g. 0.2)
    #[arg(long, visible_alias = "vol", global = true)]
    pub volatility: Option<f64>,

    /// Risk-free rate (continuously compounded)
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub rate: Option<f64>,

    /// Time to maturity in years
    #[arg(long, global = true)]
    pub maturity: Option<f64>,

    /// Option type (call, put)
    #[arg(long = "type", global = true)]
    pub option_type: Option<OptionType>,

    /// Number of Monte Carlo paths
    #[arg(short = 'n', long, global = true)]
    pub paths: Option<usize>,

    /// Time steps per path
    #[arg(long, global = true)]
    pub steps: Option<usize>,

    /// Random seed for reproducible runs
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// VaR/ES confidence level in (0, 1)
    #[arg(long, global = true)]
    pub confidence: Option<f64>,

    /// Position for VaR/ES
    #[arg(long, value_enum, global = true)]
    pub exposure: Option<ExposureKind>,

    /// Generate paths in parallel
    #[arg(long, global = true)]
    pub parallel: bool,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Histogram bins
    #[arg(long, global = true)]
    pub bins: Option<usize>,
}
