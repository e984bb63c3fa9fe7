//! CLI command implementations
//!
//! Each submodule implements one subcommand. Commands build a [`Report`]
//! in an `evaluate` function and print it from `run`.
//!
//! [`Report`]: crate::output::Report

pub mod estimate;
pub mod option;
pub mod parametric_var;
pub mod var;
pub mod wiener;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use pricer_core::market_data::{
    estimate_with, CsvPriceDirectory, EstimatedStatistics, PriceHistorySource, ReturnKind,
};
use tracing::info;

use crate::config::{AppConfig, HistoryWindow};
use crate::{CliError, Result};

/// Return convention selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReturnsArg {
    /// ln(p_i / p_{i-1})
    Log,
    /// p_i / p_{i-1} - 1
    Simple,
}

impl From<ReturnsArg> for ReturnKind {
    fn from(arg: ReturnsArg) -> Self {
        match arg {
            ReturnsArg::Log => ReturnKind::Log,
            ReturnsArg::Simple => ReturnKind::Simple,
        }
    }
}

/// Historical series selection shared by the risk commands.
#[derive(Debug, Clone, Default, Args)]
pub struct HistoryArgs {
    /// Ticker symbol; prices are read from `<data_dir>/<SYMBOL>.csv`
    #[arg(long)]
    pub symbol: Option<String>,

    /// First date of the estimation window (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// End of the estimation window, exclusive (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Return definition used to estimate drift and volatility
    #[arg(long, value_enum)]
    pub returns: Option<ReturnsArg>,
}

/// Drift and volatility used to drive a risk model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub drift: f64,
    pub volatility: f64,
    /// Number of closing prices behind the estimate, if estimated
    pub observations: Option<usize>,
}

/// Loads closes for the selected window and estimates their return moments.
///
/// Flags left unset fall back to `defaults`, the calling command's section.
pub fn load_statistics(
    history: &HistoryArgs,
    defaults: &HistoryWindow,
    config: &AppConfig,
) -> Result<(usize, EstimatedStatistics)> {
    let symbol = history.symbol.as_deref().unwrap_or(&defaults.symbol);
    let start = history.start.unwrap_or(defaults.start);
    let end = history.end.unwrap_or(defaults.end);
    let kind = history.returns.map(ReturnKind::from).unwrap_or(defaults.returns);

    if start >= end {
        return Err(CliError::InvalidArgument(format!(
            "start date {} must precede end date {}",
            start, end
        )));
    }

    let source = CsvPriceDirectory::new(config.data_dir.clone());
    let prices = source.closing_prices(symbol, start, end)?;
    let stats = estimate_with(prices.closes(), kind)?;

    info!(
        symbol,
        %start,
        %end,
        observations = prices.len(),
        drift = stats.drift(),
        volatility = stats.volatility(),
        "estimated return moments"
    );
    Ok((prices.len(), stats))
}

/// Uses explicit moments when both are given, otherwise estimates them.
pub fn resolve_moments(
    history: &HistoryArgs,
    drift: Option<f64>,
    volatility: Option<f64>,
    defaults: &HistoryWindow,
    config: &AppConfig,
) -> Result<Moments> {
    match (drift, volatility) {
        (Some(drift), Some(volatility)) => Ok(Moments {
            drift,
            volatility,
            observations: None,
        }),
        (None, None) => {
            let (observations, stats) = load_statistics(history, defaults, config)?;
            Ok(Moments {
                drift: stats.drift(),
                volatility: stats.volatility(),
                observations: Some(observations),
            })
        }
        _ => Err(CliError::InvalidArgument(
            "--drift and --volatility must be given together".to_string(),
        )),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::AppConfig;
    use std::fmt::Write as _;
    use std::path::Path;

    /// Writes `<dir>/<symbol>.csv` with one close per business-like day
    /// starting 2015-01-01.
    pub fn write_prices(dir: &Path, symbol: &str, closes: &[f64]) {
        let start = chrono::NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
        let mut body = String::from("Date,Close\n");
        for (i, close) in closes.iter().enumerate() {
            let date = start + chrono::Days::new(i as u64);
            writeln!(body, "{},{}", date, close).unwrap();
        }
        std::fs::write(dir.join(format!("{}.csv", symbol)), body).unwrap();
    }

    pub fn config_for(dir: &Path) -> AppConfig {
        let mut config = AppConfig::default();
        config.data_dir = dir.to_path_buf();
        let start = chrono::NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
        let end = chrono::NaiveDate::from_ymd_opt(2016, 1, 1).unwrap();
        config.var.symbol = "TEST".to_string();
        config.var.start = start;
        config.var.end = end;
        config.parametric_var.symbol = "TEST".to_string();
        config.parametric_var.start = start;
        config.parametric_var.end = end;
        config
    }
}
