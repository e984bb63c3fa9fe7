//! Sample statistics over `f64` slices.
//!
//! All functions validate eagerly and fail with
//! [`PricingError::InvalidInput`](crate::types::PricingError) rather than
//! returning `NaN` for degenerate input.

use crate::types::{PricingError, PricingResult};

/// Arithmetic mean of `values`.
///
/// # Errors
///
/// `InvalidInput` if `values` is empty.
///
/// # Examples
///
/// ```
/// use pricer_core::math::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(values: &[f64]) -> PricingResult<f64> {
    if values.is_empty() {
        return Err(PricingError::invalid_input("cannot take the mean of an empty sample"));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divisor `N`, not `N - 1`).
///
/// # Errors
///
/// `InvalidInput` if `values` is empty.
///
/// # Examples
///
/// ```
/// use pricer_core::math::population_std_dev;
///
/// let sd = population_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert!((sd - 2.0).abs() < 1e-12);
/// ```
pub fn population_std_dev(values: &[f64]) -> PricingResult<f64> {
    let mu = mean(values)?;
    let variance =
        values.iter().map(|&x| (x - mu) * (x - mu)).sum::<f64>() / values.len() as f64;
    Ok(variance.sqrt())
}

/// Returns an ascending-sorted copy of `values`, leaving the input untouched.
///
/// Uses IEEE total ordering so the sort is well defined even for `NaN`.
pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Percentile of an ascending-sorted sample using linear interpolation
/// between adjacent order statistics.
///
/// For rank `p` in `[0, 100]` the fractional index is `p / 100 * (N - 1)`;
/// the result interpolates between the values at `floor(idx)` and
/// `ceil(idx)`.
///
/// # Arguments
///
/// * `sorted` - Sample sorted ascending (see [`sorted_copy`])
/// * `rank` - Percentile rank in `[0, 100]`
///
/// # Errors
///
/// `InvalidInput` if `sorted` is empty or `rank` lies outside `[0, 100]`.
///
/// # Examples
///
/// ```
/// use pricer_core::math::percentile;
///
/// let sample = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(percentile(&sample, 50.0).unwrap(), 2.5);
/// assert_eq!(percentile(&sample, 0.0).unwrap(), 1.0);
/// assert_eq!(percentile(&sample, 100.0).unwrap(), 4.0);
/// ```
pub fn percentile(sorted: &[f64], rank: f64) -> PricingResult<f64> {
    if sorted.is_empty() {
        return Err(PricingError::invalid_input("cannot take a percentile of an empty sample"));
    }
    if !(0.0..=100.0).contains(&rank) {
        return Err(PricingError::InvalidInput(format!(
            "percentile rank must lie in [0, 100], got {}",
            rank
        )));
    }

    let idx = rank / 100.0 * (sorted.len() - 1) as f64;
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    let weight = idx - lo as f64;

    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * weight)
}
