//! Result formatting for command output.
//!
//! Text mode prints one `"<label>: <value>"` line per figure with monetary
//! values rounded to cents (`"VaR is: $12345.68"`). JSON mode prints a single
//! object keyed by each figure's machine name.

use clap::ValueEnum;
use serde_json::{Map, Value};
use std::io::Write;

use crate::Result;

/// Output format of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable labelled lines
    #[default]
    Text,
    /// One JSON object
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Figure {
    Money(f64),
    Ratio(f64),
    Count(usize),
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    key: &'static str,
    label: String,
    figure: Figure,
}

/// An ordered set of labelled figures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    entries: Vec<Entry>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a monetary figure, printed as `$` with two decimals.
    pub fn money(mut self, key: &'static str, label: impl Into<String>, value: f64) -> Self {
        self.push(key, label, Figure::Money(value));
        self
    }

    /// Adds a dimensionless figure, printed with six decimals.
    pub fn ratio(mut self, key: &'static str, label: impl Into<String>, value: f64) -> Self {
        self.push(key, label, Figure::Ratio(value));
        self
    }

    /// Adds an integer count.
    pub fn count(mut self, key: &'static str, label: impl Into<String>, value: usize) -> Self {
        self.push(key, label, Figure::Count(value));
        self
    }

    fn push(&mut self, key: &'static str, label: impl Into<String>, figure: Figure) {
        self.entries.push(Entry {
            key,
            label: label.into(),
            figure,
        });
    }

    /// Raw value stored under `key`.
    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| match e.figure {
                Figure::Money(v) | Figure::Ratio(v) => v,
                Figure::Count(n) => n as f64,
            })
    }

    /// Renders the labelled text form.
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| match e.figure {
                Figure::Money(v) => format!("{}: ${:.2}", e.label, v),
                Figure::Ratio(v) => format!("{}: {:.6}", e.label, v),
                Figure::Count(n) => format!("{}: {}", e.label, n),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders the JSON object form. Monetary values are rounded to cents.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|e| {
                let value = match e.figure {
                    Figure::Money(v) => Value::from((v * 100.0).round() / 100.0),
                    Figure::Ratio(v) => Value::from(v),
                    Figure::Count(n) => Value::from(n),
                };
                (e.key.to_string(), value)
            })
            .collect();
        Value::Object(map)
    }

    /// Writes the report in `format` followed by a newline.
    pub fn write_to<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Text => writeln!(out, "{}", self.to_text())?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &self.to_json())?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Prints the report to standard output.
    pub fn emit(&self, format: OutputFormat) -> Result<()> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.write_to(&mut lock, format)
    }
}
