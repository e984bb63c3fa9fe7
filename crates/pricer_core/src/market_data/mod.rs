//! Historical market data and the statistics derived from it.
//!
//! # Components
//!
//! - [`history`]: closing-price series and the [`PriceHistorySource`] supplier trait
//! - [`estimation`]: drift and volatility of returns ([`estimate`])
//! - [`error`]: retrieval error types ([`HistoryError`])
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::estimate;
//!
//! let stats = estimate(&[100.0, 102.0, 101.0, 105.0]).unwrap();
//! assert!(stats.stdev_log_return > 0.0);
//! ```

pub mod error;
pub mod estimation;
pub mod history;

pub use error::HistoryError;
pub use estimation::{
    estimate, estimate_with, log_returns, simple_returns, EstimatedStatistics, ReturnKind,
};
pub use history::{CsvPriceDirectory, PriceHistory, PriceHistorySource};
