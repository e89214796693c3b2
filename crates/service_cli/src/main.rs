//! Optrisk CLI - Option Pricing and Tail Risk from the Command Line
//!
//! # Commands
//!
//! - `optrisk price` - Analytical vs Monte Carlo price, with Greeks
//! - `optrisk simulate` - Terminal price distribution and histogram
//! - `optrisk risk` - Value at Risk and expected shortfall
//! - `optrisk report` - All of the above from one simulation
//! - `optrisk show-config` - Print the resolved configuration
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate resolves configuration, installs
//! logging and renders results; all numerics live in the pricer crates.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use crate::config::{Overrides, RunConfig};

/// Black-Scholes and Monte Carlo option pricing with VaR/ES
#[derive(Parser)]
#[command(name = "optrisk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "optrisk.toml")]
    config: PathBuf,

    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price the option analytically and by Monte Carlo
    Price,

    /// Simulate terminal prices and show their distribution
    Simulate,

    /// Estimate VaR and expected shortfall
    Risk,

    /// Price, simulate and assess risk in one run
    Report,

    /// Print the resolved configuration
    ShowConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing on stderr so JSON output stays clean
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let mut config = RunConfig::load(&cli.config)?;
    config.merge_with_cli(&cli.overrides);
    debug!(?config, "resolved configuration");

    match cli.command {
        Commands::Price => commands::price::run(&config),
        Commands::Simulate => commands::simulate::run(&config),
        Commands::Risk => commands::risk::run(&config),
        Commands::Report => commands::report::run(&config),
        Commands::ShowConfig => commands::show_config::run(&config),
    }
}
