//! Wiener command implementation
//!
//! Samples a standard Wiener process and writes it as `t,w` CSV rows, or as
//! a JSON object with `times` and `values` arrays.

use clap::Args;
use pricer_pricing::mc::{wiener_process, WienerPath};
use pricer_pricing::rng::PricerRng;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::config::AppConfig;
use crate::output::{OutputFormat, Report};
use crate::Result;

/// Arguments of `mcrisk wiener`.
#[derive(Debug, Clone, Args)]
pub struct WienerArgs {
    /// Variance of each increment
    #[arg(long, default_value_t = 0.1)]
    pub dt: f64,

    /// First label of the time grid, which runs evenly up to the step count
    #[arg(long, default_value_t = 0.0)]
    pub t0: f64,

    /// Number of steps
    #[arg(short = 'n', long, default_value_t = 1000)]
    pub steps: usize,

    /// Write the CSV path to this file and print a summary instead
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Serialize)]
struct Row {
    t: f64,
    w: f64,
}

#[derive(Serialize)]
struct PathJson<'a> {
    times: &'a [f64],
    values: &'a [f64],
}

/// Writes the path as CSV with a `t,w` header.
pub fn write_csv<W: Write>(writer: W, path: &WienerPath) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for (&t, &w) in path.times.iter().zip(&path.values) {
        csv.serialize(Row { t, w })?;
    }
    csv.flush()?;
    Ok(())
}

/// Run the wiener command
pub fn run(args: &WienerArgs, config: &AppConfig, format: OutputFormat) -> Result<()> {
    let mut rng = PricerRng::from_seed(config.seed);
    let path = wiener_process(args.dt, args.t0, args.steps, &mut rng)?;
    info!(dt = args.dt, steps = args.steps, seed = config.seed, "sampled Wiener path");

    if let Some(file) = &args.output {
        write_csv(File::create(file)?, &path)?;
        info!(path = %file.display(), "wrote Wiener path");
        let terminal = path.values.last().copied().unwrap_or(0.0);
        return Report::new()
            .count("steps", "Steps", args.steps)
            .ratio("terminal", "W(T)", terminal)
            .emit(format);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => write_csv(&mut out, &path),
        OutputFormat::Json => {
            let body = PathJson {
                times: &path.times,
                values: &path.values,
            };
            serde_json::to_writer(&mut out, &body)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_layout() {
        let path = wiener_process(0.5, 0.0, 4, &mut PricerRng::from_seed(3)).unwrap();
        let mut buf = Vec::new();
        write_csv(&mut buf, &path).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "t,w");
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "0.0,0.0");
        assert!(lines[2].starts_with("1.0,"));
        assert!(lines[5].starts_with("4.0,"));
    }

    #[test]
    fn test_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("w.csv");
        let args = WienerArgs {
            dt: 0.1,
            t0: 0.0,
            steps: 10,
            output: Some(target.clone()),
        };
        run(&args, &AppConfig::default(), OutputFormat::Json).unwrap();

        let body = std::fs::read_to_string(target).unwrap();
        assert_eq!(body.lines().count(), 12);
    }
}
