//! CLI configuration management
//!
//! Settings are resolved in this order (later wins):
//!
//! 1. Built-in defaults
//! 2. TOML file (`--config`, or `mcrisk.toml` in the working directory)
//! 3. Environment variables `MCRISK_LOG_LEVEL`, `MCRISK_SEED`, `MCRISK_DATA_DIR`
//! 4. Command line flags
//!
//! ```toml
//! seed = 42
//! log_level = "info"
//! data_dir = "data"
//!
//! [option]
//! spot = 100.0
//! strike = 100.0
//!
//! [var]
//! symbol = "C"
//! start = "2014-01-01"
//! end = "2017-10-15"
//! returns = "simple"
//!
//! [parametric_var]
//! end = "2018-01-01"
//! returns = "log"
//! n_days = 10
//! ```

use chrono::NaiveDate;
use pricer_core::market_data::ReturnKind;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "mcrisk.toml";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Log levels accepted by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// Defaults for the `option` command.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OptionSection {
    pub spot: f64,
    pub strike: f64,
    /// Years to expiry
    pub maturity: f64,
    pub rate: f64,
    pub volatility: f64,
    pub paths: usize,
}

impl Default for OptionSection {
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            volatility: 0.2,
            paths: 10_000,
        }
    }
}

/// Historical window and return convention used to estimate moments.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryWindow {
    pub symbol: String,
    pub start: NaiveDate,
    /// Exclusive
    pub end: NaiveDate,
    pub returns: ReturnKind,
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn check_confidence(field: &'static str, confidence: f64) -> Result<(), ConfigError> {
    if confidence > 0.0 && confidence < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("must lie strictly between 0 and 1, got {}", confidence),
        })
    }
}

fn check_window(field: &'static str, start: NaiveDate, end: NaiveDate) -> Result<(), ConfigError> {
    if start < end {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("start {} must precede end {}", start, end),
        })
    }
}

/// Defaults for the `var` and `estimate` commands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VarSection {
    pub position: f64,
    pub confidence: f64,
    /// Horizon in trading days
    pub horizon: f64,
    pub paths: usize,
    pub symbol: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Return definition used when estimating drift and volatility
    pub returns: ReturnKind,
}

impl Default for VarSection {
    fn default() -> Self {
        Self {
            position: 1e6,
            confidence: 0.95,
            horizon: 1.0,
            paths: 100_000,
            symbol: "C".to_string(),
            start: ymd(2014, 1, 1),
            end: ymd(2017, 10, 15),
            returns: ReturnKind::Simple,
        }
    }
}

impl VarSection {
    pub fn window(&self) -> HistoryWindow {
        HistoryWindow {
            symbol: self.symbol.clone(),
            start: self.start,
            end: self.end,
            returns: self.returns,
        }
    }
}

/// Defaults for the `parametric-var` command.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParametricVarSection {
    pub position: f64,
    pub confidence: f64,
    /// Horizon of the multi-day figure
    pub n_days: u32,
    pub symbol: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub returns: ReturnKind,
}

impl Default for ParametricVarSection {
    fn default() -> Self {
        Self {
            position: 1e6,
            confidence: 0.95,
            n_days: 10,
            symbol: "C".to_string(),
            start: ymd(2014, 1, 1),
            end: ymd(2018, 1, 1),
            returns: ReturnKind::Log,
        }
    }
}

impl ParametricVarSection {
    pub fn window(&self) -> HistoryWindow {
        HistoryWindow {
            symbol: self.symbol.clone(),
            start: self.start,
            end: self.end,
            returns: self.returns,
        }
    }
}

/// Application configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Seed of the pseudo-random generator
    pub seed: u64,
    /// Log level used when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Directory holding `<SYMBOL>.csv` price files
    pub data_dir: PathBuf,
    pub option: OptionSection,
    pub var: VarSection,
    pub parametric_var: ParametricVarSection,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            log_level: LogLevel::default(),
            data_dir: PathBuf::from("data"),
            option: OptionSection::default(),
            var: VarSection::default(),
            parametric_var: ParametricVarSection::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `MCRISK_*` overrides from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("MCRISK_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(seed) = lookup("MCRISK_SEED") {
            self.seed = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::EnvError(format!("MCRISK_SEED is not a u64: {}", seed)))?;
        }
        if let Some(dir) = lookup("MCRISK_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        Ok(())
    }

    /// Validate the configuration
    ///
    /// Only checks what the libraries cannot report with a clearer message;
    /// model parameters are validated again when the models are built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.option.paths == 0 {
            return Err(ConfigError::InvalidValue {
                field: "option.paths",
                reason: "must be positive".to_string(),
            });
        }
        if self.var.paths == 0 {
            return Err(ConfigError::InvalidValue {
                field: "var.paths",
                reason: "must be positive".to_string(),
            });
        }
        check_confidence("var.confidence", self.var.confidence)?;
        check_window("var.start", self.var.start, self.var.end)?;

        let parametric = &self.parametric_var;
        check_confidence("parametric_var.confidence", parametric.confidence)?;
        check_window("parametric_var.start", parametric.start, parametric.end)?;
        if parametric.n_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "parametric_var.n_days",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Global overrides taken from the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Explicit config file path
    pub config_file: Option<PathBuf>,
    pub seed: Option<u64>,
    pub log_level: Option<String>,
    pub data_dir: Option<PathBuf>,
}

/// Build configuration from all sources
///
/// An explicit config file must exist; the implicit `mcrisk.toml` is used
/// only when present.
pub fn build_config(cli: &CliOverrides) -> Result<AppConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => AppConfig::from_file(path)?,
        None => {
            let implicit = Path::new(DEFAULT_CONFIG_FILE);
            if implicit.is_file() {
                AppConfig::from_file(implicit)?
            } else {
                AppConfig::default()
            }
        }
    };

    config.apply_env()?;

    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(level) = &cli.log_level {
        config.log_level = LogLevel::from_str(level)?;
    }
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }

    config.validate()?;
    Ok(config)
}
