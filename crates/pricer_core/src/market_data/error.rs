//! Market data error types.
//!
//! Structured errors raised while loading historical closing prices.

use crate::types::PricingError;
use thiserror::Error;

/// Historical price retrieval errors.
///
/// # Variants
///
/// - `NotFound`: No data exists for the requested symbol
/// - `Io`: Underlying file could not be read
/// - `Parse`: A row could not be decoded
/// - `InvalidDate`: A date column is not `YYYY-MM-DD`
/// - `Empty`: The requested date range contains no observations
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::HistoryError;
///
/// let err = HistoryError::NotFound("C".to_string());
/// assert!(format!("{}", err).contains("C"));
/// ```
#[derive(Error, Debug)]
pub enum HistoryError {
    /// No data available for the symbol.
    #[error("No price history for symbol: {0}")]
    NotFound(String),

    /// I/O failure while reading the source.
    #[error("Price history I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV decoding failure.
    #[error("Price history parse error: {0}")]
    Parse(#[from] csv::Error),

    /// Date column could not be parsed.
    #[error("Invalid date '{value}' in price history")]
    InvalidDate {
        /// The offending text
        value: String,
    },

    /// No observations inside the requested range.
    #[error("No prices for {symbol} between {start} and {end}")]
    Empty {
        /// Requested symbol
        symbol: String,
        /// Range start (inclusive)
        start: String,
        /// Range end (exclusive)
        end: String,
    },
}

impl From<HistoryError> for PricingError {
    fn from(err: HistoryError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
