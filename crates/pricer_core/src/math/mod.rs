//! Mathematical utilities for simulation reduction and parametric risk.
//!
//! - [`statistics`]: sample moments and order-statistic percentiles
//! - [`distributions`]: standard normal CDF, PDF and inverse CDF

pub mod distributions;
pub mod statistics;

pub use distributions::{inverse_norm_cdf, norm_cdf, norm_pdf};
pub use statistics::{mean, percentile, population_std_dev, sorted_copy};
