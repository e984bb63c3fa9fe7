//! CLI error types.

use pricer_core::market_data::HistoryError;
use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `mcrisk` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Domain validation failure from the pricing or risk libraries.
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Historical prices could not be loaded.
    #[error("Market data error: {0}")]
    History(#[from] HistoryError),

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Command line arguments are inconsistent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV encoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
