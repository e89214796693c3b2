//! Show-config command implementation
//!
//! Prints the resolved configuration after all layers are applied.

use crate::config::{OutputFormat, RunConfig};
use crate::Result;

/// Run the show-config command
pub fn run(config: &RunConfig) -> Result<()> {
    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputFormat::Table => print!("{}", toml::to_string_pretty(config)?),
    }
    Ok(())
}
