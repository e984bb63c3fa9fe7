//! Drift and volatility estimation from closing-price series.
//!
//! Returns are computed between consecutive closes and summarised by their
//! arithmetic mean and population standard deviation. The result feeds the
//! GBM simulator as `(drift, volatility)` per observation period.

use crate::math::{mean, population_std_dev};
use crate::types::{PricingError, PricingResult};
use serde::{Deserialize, Serialize};

/// How period returns are derived from consecutive prices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnKind {
    /// `ln(p_i / p_{i-1})`
    #[default]
    Log,
    /// `p_i / p_{i-1} - 1`
    Simple,
}

/// Moments of the return distribution of a historical series.
///
/// For [`ReturnKind::Simple`] the two moments describe simple returns; the
/// field names keep the log-return convention of the default estimator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EstimatedStatistics {
    /// Arithmetic mean of the period returns.
    pub mean_log_return: f64,
    /// Population standard deviation of the period returns.
    pub stdev_log_return: f64,
    /// Return convention the moments were computed under.
    pub kind: ReturnKind,
}

impl EstimatedStatistics {
    /// Drift per observation period.
    #[inline]
    pub fn drift(&self) -> f64 {
        self.mean_log_return
    }

    /// Volatility per observation period.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.stdev_log_return
    }
}

fn validate_prices(prices: &[f64]) -> PricingResult<()> {
    if prices.len() < 2 {
        return Err(PricingError::InvalidInput(format!(
            "at least 2 prices are required to compute returns, got {}",
            prices.len()
        )));
    }
    if let Some((i, &p)) = prices
        .iter()
        .enumerate()
        .find(|&(_, &p)| !(p.is_finite() && p > 0.0))
    {
        return Err(PricingError::InvalidInput(format!(
            "price at index {} must be positive and finite, got {}",
            i, p
        )));
    }
    Ok(())
}

/// Log returns `r_i = ln(p_i / p_{i-1})` for `i = 1..N-1`.
///
/// # Errors
///
/// `InvalidInput` if fewer than two prices are given or any price is not
/// strictly positive.
pub fn log_returns(prices: &[f64]) -> PricingResult<Vec<f64>> {
    validate_prices(prices)?;
    Ok(prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect())
}

/// Simple (percentage-change) returns `p_i / p_{i-1} - 1`.
///
/// # Errors
///
/// Same conditions as [`log_returns`].
pub fn simple_returns(prices: &[f64]) -> PricingResult<Vec<f64>> {
    validate_prices(prices)?;
    Ok(prices.windows(2).map(|w| w[1] / w[0] - 1.0).collect())
}

/// Estimates mean and population standard deviation of log returns.
///
/// # Errors
///
/// `InvalidInput` if fewer than two prices are supplied or any price is
/// `<= 0`.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::estimate;
///
/// let stats = estimate(&[100.0, 110.0]).unwrap();
/// assert!((stats.mean_log_return - 1.1_f64.ln()).abs() < 1e-12);
/// assert_eq!(stats.stdev_log_return, 0.0);
/// ```
pub fn estimate(prices: &[f64]) -> PricingResult<EstimatedStatistics> {
    estimate_with(prices, ReturnKind::Log)
}

/// Estimates return moments under the chosen [`ReturnKind`].
pub fn estimate_with(prices: &[f64], kind: ReturnKind) -> PricingResult<EstimatedStatistics> {
    let returns = match kind {
        ReturnKind::Log => log_returns(prices)?,
        ReturnKind::Simple => simple_returns(prices)?,
    };

    let stats = EstimatedStatistics {
        mean_log_return: mean(&returns)?,
        stdev_log_return: population_std_dev(&returns)?,
        kind,
    };

    tracing::debug!(
        observations = prices.len(),
        ?kind,
        mean = stats.mean_log_return,
        stdev = stats.stdev_log_return,
        "estimated return statistics"
    );

    Ok(stats)
}
