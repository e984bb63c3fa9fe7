//! Historical closing-price series and their suppliers.
//!
//! The estimator consumes only the closing prices; dates are carried so that
//! suppliers can filter by range and callers can report the window used.

use super::error::HistoryError;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Date-indexed closing prices for one symbol, ordered by date.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceHistory {
    symbol: String,
    dates: Vec<NaiveDate>,
    closes: Vec<f64>,
}

impl PriceHistory {
    /// Builds a history from `(date, close)` observations, sorting by date.
    pub fn new(symbol: impl Into<String>, mut observations: Vec<(NaiveDate, f64)>) -> Self {
        observations.sort_by_key(|&(date, _)| date);
        let (dates, closes): (Vec<NaiveDate>, Vec<f64>) = observations.into_iter().unzip();
        Self {
            symbol: symbol.into(),
            dates,
            closes,
        }
    }

    /// Ticker symbol.
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Observation dates, ascending.
    #[inline]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Closing prices aligned with [`dates`](Self::dates).
    #[inline]
    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    /// Number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    /// Returns `true` if there are no observations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Restricts the series to `start <= date < end`.
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> Self {
        let observations = self
            .dates
            .iter()
            .zip(&self.closes)
            .filter(|(date, _)| **date >= start && **date < end)
            .map(|(&date, &close)| (date, close))
            .collect();
        Self::new(self.symbol.clone(), observations)
    }
}

/// Supplier of historical closing prices.
///
/// Implementations return observations with `start <= date < end`, ordered
/// by date.
pub trait PriceHistorySource {
    /// Fetches closing prices for `symbol` over `[start, end)`.
    fn closing_prices(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceHistory, HistoryError>;
}

#[derive(Debug, Deserialize)]
struct CloseRow {
    #[serde(alias = "Date")]
    date: String,
    #[serde(alias = "Close")]
    close: f64,
}

/// Reads `<root>/<SYMBOL>.csv` files with `date,close` columns.
///
/// Header names are matched case-sensitively as either `date`/`close` or
/// `Date`/`Close`; extra columns are ignored. Dates may carry a time suffix
/// (`2014-01-02 00:00:00-05:00`); only the leading `YYYY-MM-DD` is used.
#[derive(Clone, Debug)]
pub struct CsvPriceDirectory {
    root: PathBuf,
}

impl CsvPriceDirectory {
    /// Creates a supplier rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the CSV file backing `symbol`.
    pub fn path_for(&self, symbol: &str) -> PathBuf {
        self.root.join(format!("{}.csv", symbol))
    }

    fn read_file(symbol: &str, path: &Path) -> Result<PriceHistory, HistoryError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(path)?;

        let mut observations = Vec::new();
        for row in reader.deserialize::<CloseRow>() {
            let row = row?;
            let text = row.date.get(..10).unwrap_or(&row.date);
            let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| {
                HistoryError::InvalidDate {
                    value: row.date.clone(),
                }
            })?;
            observations.push((date, row.close));
        }

        Ok(PriceHistory::new(symbol, observations))
    }
}

impl PriceHistorySource for CsvPriceDirectory {
    fn closing_prices(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceHistory, HistoryError> {
        let path = self.path_for(symbol);
        if !path.is_file() {
            return Err(HistoryError::NotFound(symbol.to_string()));
        }

        let history = Self::read_file(symbol, &path)?.between(start, end);
        if history.is_empty() {
            return Err(HistoryError::Empty {
                symbol: symbol.to_string(),
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        tracing::debug!(
            symbol,
            observations = history.len(),
            path = %path.display(),
            "loaded price history"
        );
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_price_history_sorted_by_date() {
        let history = PriceHistory::new(
            "C",
            vec![(date(2014, 1, 3), 52.0), (date(2014, 1, 2), 51.0)],
        );
        assert_eq!(history.dates(), &[date(2014, 1, 2), date(2014, 1, 3)]);
        assert_eq!(history.closes(), &[51.0, 52.0]);
    }

    #[test]
    fn test_between_is_end_exclusive() {
        let history = PriceHistory::new(
            "C",
            vec![
                (date(2014, 1, 2), 51.0),
                (date(2014, 1, 3), 52.0),
                (date(2014, 1, 6), 53.0),
            ],
        );
        let window = history.between(date(2014, 1, 3), date(2014, 1, 6));
        assert_eq!(window.closes(), &[52.0]);
    }

    #[test]
    fn test_csv_directory_reads_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("C.csv"),
            "Date,Open,Close\n\
             2014-01-03 00:00:00-05:00,1,52.5\n\
             2014-01-02 00:00:00-05:00,1,51.0\n\
             2014-02-01 00:00:00-05:00,1,60.0\n",
        )
        .unwrap();

        let source = CsvPriceDirectory::new(dir.path());
        let history = source
            .closing_prices("C", date(2014, 1, 1), date(2014, 1, 31))
            .unwrap();

        assert_eq!(history.symbol(), "C");
        assert_eq!(history.closes(), &[51.0, 52.5]);
    }

    #[test]
    fn test_csv_directory_missing_symbol() {
        let dir = tempfile::tempdir().unwrap();
        let source = CsvPriceDirectory::new(dir.path());
        let err = source
            .closing_prices("MISSING", date(2014, 1, 1), date(2015, 1, 1))
            .unwrap_err();
        assert!(matches!(err, HistoryError::NotFound(_)));
    }

    #[test]
    fn test_csv_directory_empty_window() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("C.csv"), "date,close\n2014-01-02,51.0\n").unwrap();

        let source = CsvPriceDirectory::new(dir.path());
        let err = source
            .closing_prices("C", date(2015, 1, 1), date(2016, 1, 1))
            .unwrap_err();
        assert!(matches!(err, HistoryError::Empty { .. }));
    }

    #[test]
    fn test_csv_directory_bad_date() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("C.csv"), "date,close\n02/01/2014,51.0\n").unwrap();

        let source = CsvPriceDirectory::new(dir.path());
        let err = source
            .closing_prices("C", date(2014, 1, 1), date(2015, 1, 1))
            .unwrap_err();
        assert!(matches!(err, HistoryError::InvalidDate { .. }));
    }
}
