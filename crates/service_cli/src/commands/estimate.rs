//! Estimate command implementation
//!
//! Reports the mean and population standard deviation of returns over a
//! historical window.

use clap::Args;

use super::{load_statistics, HistoryArgs};
use crate::config::AppConfig;
use crate::output::{OutputFormat, Report};
use crate::Result;

/// Arguments of `mcrisk estimate`.
#[derive(Debug, Clone, Default, Args)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub history: HistoryArgs,
}

pub fn evaluate(args: &EstimateArgs, config: &AppConfig) -> Result<Report> {
    let (observations, stats) = load_statistics(&args.history, &config.var.window(), config)?;
    Ok(Report::new()
        .count("observations", "Observations", observations)
        .ratio("mean", "Mean return", stats.drift())
        .ratio("std_dev", "Standard deviation", stats.volatility()))
}

/// Run the estimate command
pub fn run(args: &EstimateArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    evaluate(args, config)?.emit(format)
}
