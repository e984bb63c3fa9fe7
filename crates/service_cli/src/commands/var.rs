//! VaR command implementation
//!
//! Monte Carlo Value-at-Risk of a position, with drift and volatility
//! estimated from historical closes unless given explicitly.

use clap::Args;
use pricer_risk::var::{MonteCarloVar, RiskSpec};
use tracing::info;

use super::{resolve_moments, HistoryArgs};
use crate::config::AppConfig;
use crate::output::{OutputFormat, Report};
use crate::Result;

/// Arguments of `mcrisk var`; unset values come from `[var]`.
#[derive(Debug, Clone, Default, Args)]
pub struct VarArgs {
    #[command(flatten)]
    pub history: HistoryArgs,

    /// Value of the position today
    #[arg(long)]
    pub position: Option<f64>,

    /// Confidence level in (0, 1)
    #[arg(long)]
    pub confidence: Option<f64>,

    /// Horizon in observation periods (days for daily closes)
    #[arg(long)]
    pub horizon: Option<f64>,

    /// Number of simulated paths
    #[arg(short = 'n', long)]
    pub paths: Option<usize>,

    /// Drift per period; skips the history lookup together with --volatility
    #[arg(long)]
    pub drift: Option<f64>,

    /// Volatility per period
    #[arg(long)]
    pub volatility: Option<f64>,
}

/// Estimates Monte Carlo VaR.
pub fn evaluate(args: &VarArgs, config: &AppConfig) -> Result<Report> {
    let section = &config.var;
    let position = args.position.unwrap_or(section.position);
    let confidence = args.confidence.unwrap_or(section.confidence);
    let horizon = args.horizon.unwrap_or(section.horizon);
    let paths = args.paths.unwrap_or(section.paths);

    let moments = resolve_moments(
        &args.history,
        args.drift,
        args.volatility,
        &section.window(),
        config,
    )?;
    let spec = RiskSpec::new(position, confidence)?;
    let mut model = MonteCarloVar::new(
        spec,
        moments.drift,
        moments.volatility,
        horizon,
        paths,
        config.seed,
    )?;

    info!(position, confidence, horizon, paths, "simulating VaR");
    let var = model.value_at_risk()?;

    let mut report = Report::new()
        .money("var", "Value at Risk with the Monte-Carlo simulation", var)
        .ratio("drift", "Drift", moments.drift)
        .ratio("volatility", "Volatility", moments.volatility);
    if let Some(n) = moments.observations {
        report = report.count("observations", "Observations", n);
    }
    Ok(report)
}

/// Run the var command
pub fn run(args: &VarArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    evaluate(args, config)?.emit(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{config_for, write_prices};
    use crate::CliError;

    #[test]
    fn test_explicit_moments() {
        let args = VarArgs {
            drift: Some(0.0),
            volatility: Some(0.02),
            ..Default::default()
        };
        let report = evaluate(&args, &AppConfig::default()).unwrap();
        let var = report.get("var").unwrap();
        // lognormal 5% quantile of 1e6·exp(-σ²/2 + σZ)
        let expected = 1e6 * (1.0 - (-0.0002f64 - 1.6448536 * 0.02).exp());
        assert!((var - expected).abs() / expected < 0.02, "var = {}", var);
    }

    #[test]
    fn test_from_history() {
        let dir = tempfile::tempdir().unwrap();
        let closes: Vec<f64> = (0..60)
            .map(|i| 100.0 * (1.0 + 0.01 * ((i % 7) as f64 - 3.0)))
            .collect();
        write_prices(dir.path(), "TEST", &closes);
        let config = config_for(dir.path());

        let args = VarArgs {
            paths: Some(20_000),
            ..Default::default()
        };
        let report = evaluate(&args, &config).unwrap();
        assert!(report.get("var").unwrap() > 0.0);
        assert_eq!(report.get("observations"), Some(60.0));
    }

    #[test]
    fn test_reproducible_for_seed() {
        let args = VarArgs {
            drift: Some(0.0005),
            volatility: Some(0.015),
            paths: Some(5_000),
            ..Default::default()
        };
        let config = AppConfig::default();
        let first = evaluate(&args, &config).unwrap().get("var");
        let second = evaluate(&args, &config).unwrap().get("var");
        assert_eq!(first, second);
    }

    #[test]
    fn test_confidence_one_rejected() {
        let args = VarArgs {
            drift: Some(0.0),
            volatility: Some(0.02),
            confidence: Some(1.0),
            ..Default::default()
        };
        assert!(matches!(
            evaluate(&args, &AppConfig::default()),
            Err(CliError::Pricing(_))
        ));
    }
}
