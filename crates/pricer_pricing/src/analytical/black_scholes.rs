//! Black-Scholes closed form for European options on a non-dividend asset.
//!
//! ```text
//! d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T),   d2 = d1 - σ√T
//! C  = S Φ(d1) - K e^{-rT} Φ(d2)
//! P  = K e^{-rT} Φ(-d2) - S Φ(-d1)
//! ```

use crate::mc::OptionKind;
use pricer_core::math::norm_cdf;
use pricer_core::types::{ensure_finite, ensure_positive, PricingError, PricingResult};

/// Black-Scholes price of a European option.
///
/// Zero volatility degenerates to the discounted intrinsic value of the
/// forward.
///
/// # Errors
///
/// `InvalidInput` if `spot`, `strike` or `maturity` is not positive,
/// `volatility` is negative, or `rate` is non-finite.
pub fn black_scholes_price(
    kind: OptionKind,
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
) -> PricingResult<f64> {
    ensure_positive("spot", spot)?;
    ensure_positive("strike", strike)?;
    ensure_finite("rate", rate)?;
    ensure_positive("maturity", maturity)?;
    if !(volatility.is_finite() && volatility >= 0.0) {
        return Err(PricingError::InvalidInput(format!(
            "volatility must be non-negative and finite, got {}",
            volatility
        )));
    }

    let discounted_strike = strike * (-rate * maturity).exp();
    if volatility == 0.0 {
        return Ok(kind.payoff(spot, discounted_strike));
    }

    let vol_sqrt_t = volatility * maturity.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * volatility * volatility) * maturity)
        / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;

    Ok(match kind {
        OptionKind::Call => spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
        OptionKind::Put => discounted_strike * norm_cdf(-d2) - spot * norm_cdf(-d1),
    })
}

/// Black-Scholes call price.
pub fn black_scholes_call(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
) -> PricingResult<f64> {
    black_scholes_price(OptionKind::Call, spot, strike, rate, volatility, maturity)
}

/// Black-Scholes put price.
pub fn black_scholes_put(
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
) -> PricingResult<f64> {
    black_scholes_price(OptionKind::Put, spot, strike, rate, volatility, maturity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_values() {
        assert_relative_eq!(
            black_scholes_call(100.0, 100.0, 0.05, 0.2, 1.0).unwrap(),
            10.450583572185565,
            epsilon = 1e-4
        );
        assert_relative_eq!(
            black_scholes_put(100.0, 100.0, 0.05, 0.2, 1.0).unwrap(),
            5.573526022256971,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_put_call_parity() {
        for &(s, k, r, v, t) in &[
            (100.0, 90.0, 0.03, 0.25, 0.5),
            (50.0, 60.0, 0.01, 0.4, 2.0),
        ] {
            let c = black_scholes_call(s, k, r, v, t).unwrap();
            let p = black_scholes_put(s, k, r, v, t).unwrap();
            assert_relative_eq!(c - p, s - k * (-r * t).exp(), epsilon = 1e-4);
        }
    }

    #[test]
    fn test_zero_volatility_is_intrinsic_forward() {
        let c = black_scholes_call(100.0, 90.0, 0.05, 0.0, 1.0).unwrap();
        assert_relative_eq!(c, 100.0 - 90.0 * (-0.05_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(black_scholes_call(0.0, 100.0, 0.05, 0.2, 1.0).is_err());
        assert!(black_scholes_call(100.0, 100.0, 0.05, -0.2, 1.0).is_err());
        assert!(black_scholes_put(100.0, 100.0, 0.05, 0.2, 0.0).is_err());
    }
}
