//! Parametric VaR command implementation
//!
//! Variance-covariance VaR for one period and for `n_days` periods.

use clap::Args;
use pricer_risk::var::{parametric_var, parametric_var_n_days};
use tracing::info;

use super::{resolve_moments, HistoryArgs};
use crate::config::AppConfig;
use crate::output::{OutputFormat, Report};
use crate::Result;

/// Arguments of `mcrisk parametric-var`; unset values come from `[parametric_var]`.
#[derive(Debug, Clone, Default, Args)]
pub struct ParametricVarArgs {
    #[command(flatten)]
    pub history: HistoryArgs,

    /// Value of the position today
    #[arg(long)]
    pub position: Option<f64>,

    /// Confidence level in (0, 1)
    #[arg(long)]
    pub confidence: Option<f64>,

    /// Horizon of the multi-day figure
    #[arg(long)]
    pub days: Option<u32>,

    /// Mean return per period; skips the history lookup together with --volatility
    #[arg(long)]
    pub drift: Option<f64>,

    /// Standard deviation of returns per period
    #[arg(long)]
    pub volatility: Option<f64>,
}

/// Computes one-day and n-day parametric VaR.
pub fn evaluate(args: &ParametricVarArgs, config: &AppConfig) -> Result<Report> {
    let section = &config.parametric_var;
    let position = args.position.unwrap_or(section.position);
    let confidence = args.confidence.unwrap_or(section.confidence);
    let days = args.days.unwrap_or(section.n_days);

    let moments = resolve_moments(
        &args.history,
        args.drift,
        args.volatility,
        &section.window(),
        config,
    )?;
    info!(position, confidence, days, "computing parametric VaR");

    let one_day = parametric_var(position, confidence, moments.drift, moments.volatility)?;
    let n_day =
        parametric_var_n_days(position, confidence, moments.drift, moments.volatility, days)?;

    Ok(Report::new()
        .money("var", "VaR is", one_day)
        .money("var_n_days", format!("VaR in {} days is", days), n_day))
}

/// Run the parametric-var command
pub fn run(args: &ParametricVarArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    evaluate(args, config)?.emit(format)
}

#[cfg(test)]
mod tests {
    use crate::commands::test_support::{config_for, write_prices};
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::market_data::{estimate_with, ReturnKind};

    #[test]
    fn test_labels_and_scaling() {
        let args = ParametricVarArgs {
            drift: Some(0.0),
            volatility: Some(0.01),
            confidence: Some(0.99),
            ..Default::default()
        };
        let report = evaluate(&args, &AppConfig::default()).unwrap();

        let one = report.get("var").unwrap();
        let ten = report.get("var_n_days").unwrap();
        assert_relative_eq!(one, 23_263.48, epsilon = 0.5);
        assert_relative_eq!(ten, one * 10f64.sqrt(), max_relative = 1e-12);
        assert!(report.to_text().contains("VaR in 10 days is: $"));
    }

    #[test]
    fn test_zero_days_rejected() {
        let args = ParametricVarArgs {
            drift: Some(0.0),
            volatility: Some(0.01),
            days: Some(0),
            ..Default::default()
        };
        assert!(evaluate(&args, &AppConfig::default()).is_err());
    }

    #[test]
    fn test_section_defaults_drive_estimation() {
        let dir = tempfile::tempdir().unwrap();
        write_prices(dir.path(), "TEST", &[100.0, 101.0, 99.5, 102.0, 101.5]);
        let mut config = config_for(dir.path());
        config.parametric_var.n_days = 4;
        config.parametric_var.position = 1000.0;

        let report = evaluate(&ParametricVarArgs::default(), &config).unwrap();

        let closes = [100.0f64, 101.0, 99.5, 102.0, 101.5];
        let stats = estimate_with(&closes, ReturnKind::Log).unwrap();
        let expected = parametric_var(1000.0, 0.95, stats.drift(), stats.volatility()).unwrap();
        assert_relative_eq!(report.get("var").unwrap(), expected, max_relative = 1e-12);
        assert!(report.to_text().contains("VaR in 4 days is: $"));
    }
}
