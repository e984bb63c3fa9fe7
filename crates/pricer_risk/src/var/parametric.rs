//! Variance-covariance Value-at-Risk.
//!
//! Assumes normally distributed period returns with mean `mu` and standard
//! deviation `sigma`:
//!
//! ```text
//! VaR_1 = position * (mu - sigma * Φ⁻¹(1 - c))
//! VaR_n = position * (mu * n - sigma * sqrt(n) * Φ⁻¹(1 - c))
//! ```

use pricer_core::math::inverse_norm_cdf;
use pricer_core::types::{ensure_confidence_level, ensure_finite, PricingError, PricingResult};

/// One-period parametric VaR.
///
/// # Arguments
///
/// * `position` - Current position value
/// * `confidence_level` - Confidence `c` in `(0, 1)`
/// * `mu` - Mean period return
/// * `sigma` - Standard deviation of period returns (non-negative)
///
/// # Errors
///
/// `InvalidInput` for non-finite inputs, negative `sigma`, or a confidence
/// level outside `(0, 1)`.
///
/// # Examples
///
/// ```rust
/// use pricer_risk::var::parametric_var;
///
/// let var = parametric_var(1e6, 0.99, 0.0, 0.01).unwrap();
/// assert!((var - 23_263.48).abs() < 0.5);
/// ```
pub fn parametric_var(position: f64, confidence_level: f64, mu: f64, sigma: f64) -> PricingResult<f64> {
    parametric_var_n_days(position, confidence_level, mu, sigma, 1)
}

/// `n`-period parametric VaR with square-root-of-time volatility scaling.
///
/// # Errors
///
/// As [`parametric_var`], plus `InvalidInput` when `n_days` is zero.
pub fn parametric_var_n_days(
    position: f64,
    confidence_level: f64,
    mu: f64,
    sigma: f64,
    n_days: u32,
) -> PricingResult<f64> {
    ensure_finite("position", position)?;
    ensure_finite("mu", mu)?;
    ensure_finite("sigma", sigma)?;
    ensure_confidence_level(confidence_level)?;
    if sigma < 0.0 {
        return Err(PricingError::invalid_input(format!(
            "sigma must be non-negative, got {}",
            sigma
        )));
    }
    if n_days == 0 {
        return Err(PricingError::invalid_input("n_days must be at least 1"));
    }

    let n = f64::from(n_days);
    let z = inverse_norm_cdf(1.0 - confidence_level)?;
    let var = position * (mu * n - sigma * n.sqrt() * z);

    tracing::debug!(confidence_level, n_days, z, var, "parametric VaR");
    Ok(var)
}
