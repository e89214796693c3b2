//! Simulate command implementation
//!
//! Summarises the simulated terminal distribution with an ASCII histogram.

use pricer_core::market_data::MarketParameters;
use pricer_pricing::mc::{Histogram, SimulatedPaths};
use serde::Serialize;
use tracing::info;

use super::{emit, num, render_table, Session};
use crate::config::RunConfig;
use crate::Result;

/// Widest histogram bar, in characters
const BAR_WIDTH: usize = 40;

/// Terminal distribution summary
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    /// Number of paths
    pub n_paths: usize,
    /// Steps per path
    pub n_steps: usize,
    /// Master seed
    pub seed: Option<u64>,
    /// Sample mean of S_T
    pub mean: f64,
    /// Risk-neutral expectation S₀·e^(rT)
    pub forward: f64,
    /// Sample standard deviation of S_T
    pub std_dev: f64,
    /// Smallest S_T
    pub min: f64,
    /// Largest S_T
    pub max: f64,
    /// Equal-width histogram of S_T
    pub histogram: Histogram,
}

impl SimulationReport {
    /// Summarise `paths` into `bins` histogram bins.
    pub fn compute(params: &MarketParameters, paths: &SimulatedPaths, bins: usize) -> Result<Self> {
        let histogram = paths.histogram(bins)?;
        Ok(Self {
            n_paths: paths.len(),
            n_steps: paths.n_steps(),
            seed: paths.seed(),
            mean: paths.mean().unwrap_or_default(),
            forward: params.forward(),
            std_dev: paths.std_dev().unwrap_or_default(),
            min: histogram.lower,
            max: histogram.upper,
            histogram,
        })
    }

    /// Table rendering followed by the histogram
    pub fn render(&self) -> String {
        let rows = [
            ("Paths", self.n_paths.to_string()),
            ("Steps", self.n_steps.to_string()),
            (
                "Seed",
                self.seed.map_or_else(|| "-".to_string(), |s| s.to_string()),
            ),
            ("Mean S_T", num(self.mean)),
            ("Forward", num(self.forward)),
            ("Std dev S_T", num(self.std_dev)),
            ("Min S_T", num(self.min)),
            ("Max S_T", num(self.max)),
        ];
        format!(
            "{}\n{}",
            render_table("Terminal price distribution", &rows),
            render_histogram(&self.histogram, BAR_WIDTH)
        )
    }
}

/// One line per bin: `[left, right) │████ count`.
pub fn render_histogram(histogram: &Histogram, width: usize) -> String {
    let peak = histogram.counts.iter().copied().max().unwrap_or(0).max(1);
    histogram
        .bins()
        .map(|(left, right, count)| {
            let bar = (count * width + peak / 2) / peak;
            format!(
                "[{:>10.2}, {:>10.2}) │{} {}\n",
                left,
                right,
                "█".repeat(bar),
                count
            )
        })
        .collect()
}

/// Run the simulate command
pub fn run(config: &RunConfig) -> Result<()> {
    info!("Starting simulation...");
    let session = Session::prepare(config)?;
    let report = SimulationReport::compute(&session.params, &session.paths, config.bins)?;
    emit(config.format, &report, SimulationReport::render)?;
    info!("Simulation complete");
    Ok(())
}
