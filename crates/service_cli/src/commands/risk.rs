//! Risk command implementation
//!
//! Reports VaR and expected shortfall of the configured exposure.

use pricer_core::market_data::MarketParameters;
use pricer_models::analytical::AnalyticalPricer;
use pricer_pricing::mc::SimulatedPaths;
use pricer_risk::var::{Exposure, RiskEstimator, RiskResult};
use serde::Serialize;
use tracing::{info, warn};

use super::{emit, num, render_table, Session};
use crate::config::{ExposureKind, RunConfig};
use crate::Result;

/// VaR/ES of one exposure
#[derive(Debug, Clone, Serialize)]
pub struct RiskReport {
    /// Position assessed
    pub exposure: Exposure,
    /// Tail-risk figures
    pub result: RiskResult,
    /// Fewer paths than 1/(1 - confidence)
    pub high_sampling_variance: bool,
}

impl RiskReport {
    /// Assess `kind` over `paths`; option premiums are the analytical price.
    pub fn compute(
        params: &MarketParameters,
        paths: &SimulatedPaths,
        confidence: f64,
        kind: ExposureKind,
    ) -> Result<Self> {
        let exposure = kind.with_premium(AnalyticalPricer::default().price(params));
        let result = RiskEstimator::new().assess_exposure(paths, params, confidence, exposure)?;
        Ok(Self {
            exposure,
            result,
            high_sampling_variance: result.has_high_sampling_variance(),
        })
    }

    /// Table rendering
    pub fn render(&self) -> String {
        let level = format!("{:.1}%", self.result.confidence * 100.0);
        let mut rows = vec![
            ("Exposure", self.exposure.as_str().to_string()),
            ("Confidence", level),
            ("Value at Risk", num(self.result.var)),
            ("Expected shortfall", num(self.result.es)),
            ("Tail paths", self.result.tail_count.to_string()),
            ("Paths", self.result.n_paths.to_string()),
        ];
        if self.high_sampling_variance {
            rows.push(("Warning", "high sampling variance".to_string()));
        }
        render_table("Tail risk", &rows)
    }
}

/// Run the risk command
pub fn run(config: &RunConfig) -> Result<()> {
    info!("Starting risk assessment...");
    let session = Session::prepare(config)?;
    let report = RiskReport::compute(
        &session.params,
        &session.paths,
        config.confidence,
        config.exposure,
    )?;
    if report.high_sampling_variance {
        warn!(
            "Only {} paths at {} confidence; increase --paths for a stable estimate",
            report.result.n_paths, report.result.confidence
        );
    }
    emit(config.format, &report, RiskReport::render)?;
    info!("Risk assessment complete");
    Ok(())
}
