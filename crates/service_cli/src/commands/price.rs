//! Price command implementation
//!
//! Prices the option analytically and by Monte Carlo, side by side.

use pricer_core::market_data::MarketParameters;
use pricer_core::types::PricingResult;
use pricer_models::analytical::{AnalyticalPricer, Greeks};
use pricer_pricing::mc::{MonteCarloPricer, SimulatedPaths};
use serde::Serialize;
use tracing::info;

use super::{emit, num, render_table, Session};
use crate::config::RunConfig;
use crate::Result;

/// Analytical and Monte Carlo prices with Greeks
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    /// Market inputs
    pub parameters: MarketParameters,
    /// Closed-form price
    pub analytical: PricingResult,
    /// Simulated estimate
    pub monte_carlo: PricingResult,
    /// Closed-form sensitivities
    pub greeks: Greeks,
    /// Seed of the simulation
    pub seed: Option<u64>,
}

impl PriceReport {
    /// Price `params` over `paths`.
    pub fn compute(params: &MarketParameters, paths: &SimulatedPaths) -> Result<Self> {
        let analytical = AnalyticalPricer::default();
        Ok(Self {
            parameters: *params,
            analytical: analytical.pricing_result(params),
            monte_carlo: MonteCarloPricer::new().price(paths, params)?,
            greeks: analytical.greeks(params),
            seed: paths.seed(),
        })
    }

    /// Absolute gap between the two prices
    pub fn mc_error(&self) -> f64 {
        (self.monte_carlo.price - self.analytical.price).abs()
    }

    /// Table rendering
    pub fn render(&self) -> String {
        let ci = &self.monte_carlo.confidence_interval;
        let rows = [
            ("Option", self.parameters.option_type().to_string()),
            ("Analytical price", num(self.analytical.price)),
            ("Monte Carlo price", num(self.monte_carlo.price)),
            ("Standard error", num(self.monte_carlo.std_error)),
            (
                "Confidence interval",
                format!("{:.0}% [{:.4}, {:.4}]", ci.level * 100.0, ci.lower, ci.upper),
            ),
            ("|MC - analytical|", num(self.mc_error())),
            ("Paths", self.monte_carlo.n_paths.to_string()),
        ];
        let greeks = [
            ("Delta", num(self.greeks.delta)),
            ("Gamma", num(self.greeks.gamma)),
            ("Vega", num(self.greeks.vega)),
            ("Theta", num(self.greeks.theta)),
            ("Rho", num(self.greeks.rho)),
        ];
        format!(
            "{}{}",
            render_table("Option price", &rows),
            render_table("Greeks", &greeks)
        )
    }
}

/// Run the price command
pub fn run(config: &RunConfig) -> Result<()> {
    info!("Starting pricing...");
    let session = Session::prepare(config)?;
    let report = PriceReport::compute(&session.params, &session.paths)?;
    info!(
        "Analytical {:.4}, Monte Carlo {:.4} +/- {:.4}",
        report.analytical.price, report.monte_carlo.price, report.monte_carlo.std_error
    );
    emit(config.format, &report, PriceReport::render)?;
    info!("Pricing complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_price_report() {
        let config = RunConfig {
            n_paths: 20_000,
            seed: Some(42),
            ..Default::default()
        };
        let session = Session::prepare(&config).unwrap();
        let report = PriceReport::compute(&session.params, &session.paths).unwrap();

        assert_relative_eq!(report.analytical.price, 10.4506, epsilon = 1e-3);
        assert!(report.mc_error() < 4.0 * report.monte_carlo.std_error);
        assert_eq!(report.seed, Some(42));

        let table = report.render();
        assert!(table.contains("Analytical price"));
        assert!(table.contains("Delta"));
    }

    #[test]
    fn test_price_report_json() {
        let config = RunConfig {
            n_paths: 100,
            seed: Some(1),
            ..Default::default()
        };
        let session = Session::prepare(&config).unwrap();
        let report = PriceReport::compute(&session.params, &session.paths).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["parameters"]["option_type"], "call");
        assert_eq!(json["monte_carlo"]["n_paths"], 100);
        assert!(json["greeks"]["delta"].is_number());
    }
}
