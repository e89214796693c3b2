//! Report command implementation
//!
//! Prices, summarises and risk-assesses one simulated distribution.

use serde::Serialize;
use tracing::info;

use super::price::PriceReport;
use super::risk::RiskReport;
use super::simulate::SimulationReport;
use super::{emit, Session};
use crate::config::RunConfig;
use crate::Result;

/// Combined pricing, distribution and risk report
#[derive(Debug, Clone, Serialize)]
pub struct FullReport {
    /// Prices and Greeks
    pub price: PriceReport,
    /// Terminal distribution
    pub simulation: SimulationReport,
    /// Tail risk
    pub risk: RiskReport,
}

impl FullReport {
    /// Build every section from a single simulation.
    pub fn compute(config: &RunConfig) -> Result<Self> {
        let session = Session::prepare(config)?;
        Ok(Self {
            price: PriceReport::compute(&session.params, &session.paths)?,
            simulation: SimulationReport::compute(&session.params, &session.paths, config.bins)?,
            risk: RiskReport::compute(
                &session.params,
                &session.paths,
                config.confidence,
                config.exposure,
            )?,
        })
    }

    /// Table rendering
    pub fn render(&self) -> String {
        format!(
            "{}{}{}",
            self.price.render(),
            self.risk.render(),
            self.simulation.render()
        )
    }
}

/// Run the report command
pub fn run(config: &RunConfig) -> Result<()> {
    info!("Generating report...");
    let report = FullReport::compute(config)?;
    emit(config.format, &report, FullReport::render)?;
    info!("Report generation complete");
    Ok(())
}
