//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands that need a
//! simulated distribution share one [`Session`] so `report` simulates once.

pub mod price;
pub mod report;
pub mod risk;
pub mod show_config;
pub mod simulate;

use pricer_core::market_data::MarketParameters;
use pricer_pricing::mc::{PathSimulator, SimulatedPaths};
use serde::Serialize;
use tracing::info;

use crate::config::{OutputFormat, RunConfig};
use crate::Result;

/// Validated inputs plus the paths simulated from them.
pub struct Session {
    /// Market inputs
    pub params: MarketParameters,
    /// Simulated terminal prices
    pub paths: SimulatedPaths,
}

impl Session {
    /// Validate `config` and run the simulation.
    pub fn prepare(config: &RunConfig) -> Result<Self> {
        let params = config.market_parameters()?;
        let simulator = PathSimulator::new(config.simulation_config()?);

        info!(
            "Simulating {} paths x {} steps{}",
            config.n_paths,
            config.n_steps,
            if config.parallel { " (parallel)" } else { "" }
        );
        let paths = simulator.simulate(&params);
        if let Some(seed) = paths.seed() {
            info!("Seed: {}", seed);
        }

        Ok(Self { params, paths })
    }
}

/// Print `value` as JSON or as the table produced by `table`.
pub fn emit<T: Serialize>(format: OutputFormat, value: &T, table: impl FnOnce(&T) -> String) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Table => print!("{}", table(value)),
    }
    Ok(())
}

/// Two-column box-drawn table with a title row.
pub fn render_table(title: &str, rows: &[(&str, String)]) -> String {
    let val_w = rows.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);
    let key_w = rows
        .iter()
        .map(|(k, _)| k.chars().count())
        .max()
        .unwrap_or(0)
        .max(title.chars().count().saturating_sub(val_w + 3));
    let inner = key_w + val_w + 5;

    let mut out = String::new();
    out.push_str(&format!("┌{}┐\n", "─".repeat(inner)));
    out.push_str(&format!("│ {:<w$} │\n", title, w = inner - 2));
    out.push_str(&format!(
        "├{}┬{}┤\n",
        "─".repeat(key_w + 2),
        "─".repeat(val_w + 2)
    ));
    for (key, value) in rows {
        out.push_str(&format!("│ {:<kw$} │ {:>vw$} │\n", key, value, kw = key_w, vw = val_w));
    }
    out.push_str(&format!(
        "└{}┴{}┘\n",
        "─".repeat(key_w + 2),
        "─".repeat(val_w + 2)
    ));
    out
}

/// Fixed-precision number for table cells.
pub fn num(value: f64) -> String {
    format!("{:.4}", value)
}
