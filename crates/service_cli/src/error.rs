//! CLI error types.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors surfaced by the `optrisk` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid market or simulation input.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Configuration could not be loaded or deserialised.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// JSON rendering failed.
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML rendering failed.
    #[error("TOML output error: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
