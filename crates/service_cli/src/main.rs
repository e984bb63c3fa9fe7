//! mcrisk - Command Line Monte Carlo Pricing and Value-at-Risk
//!
//! # Commands
//!
//! - `mcrisk option` - Price European call and put options by simulation
//! - `mcrisk var` - Monte Carlo Value-at-Risk of a position
//! - `mcrisk parametric-var` - Variance-covariance Value-at-Risk
//! - `mcrisk estimate` - Drift and volatility of historical closes
//! - `mcrisk wiener` - Sample a standard Wiener process
//!
//! # Configuration
//!
//! Defaults are read from `mcrisk.toml` (or `--config`), then overridden by
//! `MCRISK_*` environment variables and finally by command line flags. See
//! the `config` module for the file layout.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use config::{build_config, CliOverrides};
use output::OutputFormat;

/// Monte Carlo option pricing and Value-at-Risk
#[derive(Parser)]
#[command(name = "mcrisk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging unless --log-level is given)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "MCRISK_CONFIG")]
    config: Option<PathBuf>,

    /// Seed of the random number generator
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Directory holding `<SYMBOL>.csv` closing prices
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price European call and put options by Monte Carlo simulation
    #[command(name = "option")]
    OptionPrice(commands::option::OptionArgs),

    /// Monte Carlo Value-at-Risk of a position
    Var(commands::var::VarArgs),

    /// Parametric (variance-covariance) Value-at-Risk
    ParametricVar(commands::parametric_var::ParametricVarArgs),

    /// Estimate drift and volatility from historical closes
    Estimate(commands::estimate::EstimateArgs),

    /// Sample a standard Wiener process
    Wiener(commands::wiener::WienerArgs),
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let log_level = self
            .log_level
            .clone()
            .or_else(|| self.verbose.then(|| "debug".to_string()));
        CliOverrides {
            config_file: self.config.clone(),
            seed: self.seed,
            log_level,
            data_dir: self.data_dir.clone(),
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.overrides())?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        seed = config.seed,
        data_dir = %config.data_dir.display(),
        "mcrisk v{}",
        env!("CARGO_PKG_VERSION")
    );

    match &cli.command {
        Commands::OptionPrice(args) => commands::option::run(args, &config, cli.format),
        Commands::Var(args) => commands::var::run(args, &config, cli.format),
        Commands::ParametricVar(args) => {
            commands::parametric_var::run(args, &config, cli.format)
        }
        Commands::Estimate(args) => commands::estimate::run(args, &config, cli.format),
        Commands::Wiener(args) => commands::wiener::run(args, &config, cli.format),
    }
}
