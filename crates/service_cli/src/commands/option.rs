//! Option command implementation
//!
//! Prices a European call and put under risk-neutral GBM.

use clap::Args;
use pricer_pricing::analytical::{black_scholes_call, black_scholes_put};
use pricer_pricing::mc::{
    price_with_error, simulate_parallel, MonteCarloOptionPricer, OptionKind, OptionSpec,
    PriceEstimate, SimulationParameters,
};
use tracing::info;

use crate::config::AppConfig;
use crate::output::{OutputFormat, Report};
use crate::Result;

/// Arguments of `mcrisk option`; unset values come from `[option]`.
#[derive(Debug, Clone, Default, Args)]
pub struct OptionArgs {
    /// Spot price of the underlying
    #[arg(long)]
    pub spot: Option<f64>,

    /// Strike price
    #[arg(long)]
    pub strike: Option<f64>,

    /// Time to expiry in years
    #[arg(long)]
    pub maturity: Option<f64>,

    /// Continuously compounded risk-free rate
    #[arg(long)]
    pub rate: Option<f64>,

    /// Annualised volatility
    #[arg(long)]
    pub volatility: Option<f64>,

    /// Number of simulated paths
    #[arg(short = 'n', long)]
    pub paths: Option<usize>,

    /// Simulate once on all cores and price both options from that batch
    #[arg(long)]
    pub parallel: bool,

    /// Also report closed-form Black-Scholes prices
    #[arg(long)]
    pub compare: bool,
}

/// Prices both options and collects the figures.
pub fn evaluate(args: &OptionArgs, config: &AppConfig) -> Result<Report> {
    let section = &config.option;
    let spot = args.spot.unwrap_or(section.spot);
    let strike = args.strike.unwrap_or(section.strike);
    let maturity = args.maturity.unwrap_or(section.maturity);
    let rate = args.rate.unwrap_or(section.rate);
    let volatility = args.volatility.unwrap_or(section.volatility);
    let paths = args.paths.unwrap_or(section.paths);

    let params = SimulationParameters::risk_neutral(spot, rate, volatility, maturity, paths)?;
    info!(
        spot,
        strike,
        maturity,
        rate,
        volatility,
        paths,
        parallel = args.parallel,
        "pricing options"
    );

    let (call, put) = if args.parallel {
        price_parallel(&params, strike, config.seed)?
    } else {
        let mut pricer = MonteCarloOptionPricer::new(params, config.seed);
        (
            pricer.price(strike, OptionKind::Call)?,
            pricer.price(strike, OptionKind::Put)?,
        )
    };

    let mut report = Report::new()
        .money("call", "Value of the call option is", call.price)
        .money("put", "Value of the put option is", put.price)
        .ratio("call_std_error", "Call standard error", call.std_error)
        .ratio("put_std_error", "Put standard error", put.std_error)
        .count("paths", "Paths", call.n_paths);

    if args.compare {
        report = report
            .money(
                "bs_call",
                "Black-Scholes call",
                black_scholes_call(spot, strike, rate, volatility, maturity)?,
            )
            .money(
                "bs_put",
                "Black-Scholes put",
                black_scholes_put(spot, strike, rate, volatility, maturity)?,
            );
    }

    Ok(report)
}

fn price_parallel(
    params: &SimulationParameters,
    strike: f64,
    seed: u64,
) -> Result<(PriceEstimate, PriceEstimate)> {
    let rate = params.drift();
    let batch = simulate_parallel(params, seed);
    let call = price_with_error(&batch, &OptionSpec::call(strike, rate)?, params.horizon())?;
    let put = price_with_error(&batch, &OptionSpec::put(strike, rate)?, params.horizon())?;
    Ok((call, put))
}

/// Run the option command
pub fn run(args: &OptionArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    evaluate(args, config)?.emit(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    #[test]
    fn test_reference_scenario() {
        let report = evaluate(&OptionArgs::default(), &AppConfig::default()).unwrap();
        let call = report.get("call").unwrap();
        let put = report.get("put").unwrap();
        assert!((call - 10.45).abs() < 0.5, "call = {}", call);
        assert!((put - 5.57).abs() < 0.5, "put = {}", put);
        assert_eq!(report.get("paths"), Some(10_000.0));
    }

    #[test]
    fn test_parallel_parity_on_shared_batch() {
        let args = OptionArgs {
            paths: Some(100_000),
            parallel: true,
            ..Default::default()
        };
        let report = evaluate(&args, &AppConfig::default()).unwrap();
        let parity = report.get("call").unwrap() - report.get("put").unwrap();
        let forward = 100.0 - 100.0 * (-0.05f64).exp();
        assert!((parity - forward).abs() < 1.0);
    }

    #[test]
    fn test_compare_adds_closed_form() {
        let args = OptionArgs {
            compare: true,
            ..Default::default()
        };
        let report = evaluate(&args, &AppConfig::default()).unwrap();
        let bs = report.get("bs_call").unwrap();
        assert!((bs - 10.4506).abs() < 1e-3);
    }

    #[test]
    fn test_invalid_volatility() {
        let args = OptionArgs {
            volatility: Some(-0.2),
            ..Default::default()
        };
        assert!(matches!(
            evaluate(&args, &AppConfig::default()),
            Err(CliError::Pricing(_))
        ));
    }
}
