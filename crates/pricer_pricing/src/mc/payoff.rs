//! European option payoff reduction.
//!
//! Payoffs are floored at zero per path, averaged, then discounted:
//!
//! ```text
//! price = exp(-rT) × (1/N) Σ max(±(S_i - K), 0)
//! ```
//!
//! Flooring before averaging matters: averaging first and flooring the mean
//! is a different (and wrong) estimator.

use super::simulator::TerminalValueBatch;
use pricer_core::types::{ensure_finite, ensure_positive, PricingError, PricingResult};

/// Option direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Call option: max(S - K, 0)
    #[default]
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionKind {
    /// Raw payoff at terminal value `terminal` for `strike`.
    #[inline]
    pub fn payoff(self, terminal: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (terminal - strike).max(0.0),
            OptionKind::Put => (strike - terminal).max(0.0),
        }
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionKind::Call => write!(f, "call"),
            OptionKind::Put => write!(f, "put"),
        }
    }
}

/// European option contract terms.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{OptionKind, OptionSpec};
///
/// let spec = OptionSpec::new(100.0, 0.05, OptionKind::Call).unwrap();
/// assert_eq!(spec.strike(), 100.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionSpec {
    strike: f64,
    risk_free_rate: f64,
    option_kind: OptionKind,
}

impl OptionSpec {
    /// Creates validated option terms.
    ///
    /// A zero strike is accepted (the option then replicates the asset);
    /// negative or non-finite strikes are rejected.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `strike < 0` or any value is non-finite.
    pub fn new(strike: f64, risk_free_rate: f64, option_kind: OptionKind) -> PricingResult<Self> {
        if !(strike.is_finite() && strike >= 0.0) {
            return Err(PricingError::InvalidInput(format!(
                "strike must be non-negative and finite, got {}",
                strike
            )));
        }
        ensure_finite("risk-free rate", risk_free_rate)?;
        Ok(Self {
            strike,
            risk_free_rate,
            option_kind,
        })
    }

    /// Call option terms.
    #[inline]
    pub fn call(strike: f64, risk_free_rate: f64) -> PricingResult<Self> {
        Self::new(strike, risk_free_rate, OptionKind::Call)
    }

    /// Put option terms.
    #[inline]
    pub fn put(strike: f64, risk_free_rate: f64) -> PricingResult<Self> {
        Self::new(strike, risk_free_rate, OptionKind::Put)
    }

    /// Strike K.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Continuously compounded risk-free rate r used for discounting.
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Call or put.
    #[inline]
    pub fn option_kind(&self) -> OptionKind {
        self.option_kind
    }

    /// Discount factor `exp(-rT)`.
    #[inline]
    pub fn discount_factor(&self, horizon: f64) -> f64 {
        (-self.risk_free_rate * horizon).exp()
    }
}

/// Discounted Monte Carlo price with its sampling error.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PriceEstimate {
    /// Present value of the option.
    pub price: f64,
    /// Standard error of the discounted estimate.
    pub std_error: f64,
    /// Number of paths averaged.
    pub n_paths: usize,
}

impl PriceEstimate {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }
}

/// Prices the option described by `spec` over a simulated batch.
///
/// Discounting uses `spec.risk_free_rate()` over `horizon`.
///
/// # Errors
///
/// `InvalidInput` if the batch is empty, `horizon` is not positive, or the
/// batch holds values that make the price non-finite.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{price, OptionSpec, TerminalValueBatch};
///
/// let batch = TerminalValueBatch::from_values(vec![90.0, 110.0, 130.0]);
/// let spec = OptionSpec::call(100.0, 0.0).unwrap();
///
/// // payoffs 0, 10, 30
/// let value = price(&batch, &spec, 1.0).unwrap();
/// assert!((value - 40.0 / 3.0).abs() < 1e-12);
/// ```
pub fn price(batch: &TerminalValueBatch, spec: &OptionSpec, horizon: f64) -> PricingResult<f64> {
    price_with_error(batch, spec, horizon).map(|estimate| estimate.price)
}

/// Like [`price`], also returning the standard error of the estimate.
///
/// The standard error uses the sample standard deviation of the per-path
/// payoffs (divisor `N - 1`); it is zero for a single path.
pub fn price_with_error(
    batch: &TerminalValueBatch,
    spec: &OptionSpec,
    horizon: f64,
) -> PricingResult<PriceEstimate> {
    if batch.is_empty() {
        return Err(PricingError::invalid_input(
            "cannot price an option over an empty batch",
        ));
    }
    ensure_positive("horizon", horizon)?;

    let n = batch.len();
    let strike = spec.strike();
    let kind = spec.option_kind();

    let (sum, sum_sq) = batch
        .values()
        .iter()
        .map(|&s| kind.payoff(s, strike))
        .fold((0.0, 0.0), |(sum, sum_sq), p| (sum + p, sum_sq + p * p));

    let mean = sum / n as f64;
    let std_error = if n > 1 {
        let variance = ((sum_sq - n as f64 * mean * mean) / (n - 1) as f64).max(0.0);
        (variance / n as f64).sqrt()
    } else {
        0.0
    };

    let discount_factor = spec.discount_factor(horizon);
    let estimate = PriceEstimate {
        price: discount_factor * mean,
        std_error: discount_factor * std_error,
        n_paths: n,
    };
    if !estimate.price.is_finite() {
        return Err(PricingError::invalid_input(format!(
            "option price is not finite ({}); the batch holds non-finite values",
            estimate.price
        )));
    }

    tracing::debug!(
        %kind,
        strike,
        paths = n,
        price = estimate.price,
        std_error = estimate.std_error,
        "reduced option payoffs"
    );

    Ok(estimate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_payoff_floors_per_path() {
        assert_eq!(OptionKind::Call.payoff(110.0, 100.0), 10.0);
        assert_eq!(OptionKind::Call.payoff(90.0, 100.0), 0.0);
        assert_eq!(OptionKind::Put.payoff(90.0, 100.0), 10.0);
        assert_eq!(OptionKind::Put.payoff(110.0, 100.0), 0.0);
    }

    #[test]
    fn test_floor_before_average() {
        // average-then-floor would give max(100 - 100, 0) = 0
        let batch = TerminalValueBatch::from_values(vec![50.0, 150.0]);
        let spec = OptionSpec::call(100.0, 0.0).unwrap();
        assert_relative_eq!(price(&batch, &spec, 1.0).unwrap(), 25.0);
    }

    #[test]
    fn test_discounting() {
        let batch = TerminalValueBatch::from_values(vec![110.0]);
        let spec = OptionSpec::call(100.0, 0.05).unwrap();
        assert_relative_eq!(
            price(&batch, &spec, 2.0).unwrap(),
            10.0 * (-0.1_f64).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_zero_strike_call_is_discounted_mean() {
        let values = vec![80.0, 95.0, 120.0, 101.5];
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let batch = TerminalValueBatch::from_values(values);
        let spec = OptionSpec::call(0.0, 0.03).unwrap();
        assert_relative_eq!(
            price(&batch, &spec, 1.5).unwrap(),
            (-0.045_f64).exp() * mean,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_empty_batch_rejected() {
        let batch = TerminalValueBatch::from_values(Vec::new());
        let spec = OptionSpec::put(100.0, 0.05).unwrap();
        assert!(matches!(
            price(&batch, &spec, 1.0),
            Err(PricingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_non_finite_batch_rejected() {
        let spec = OptionSpec::call(100.0, 0.05).unwrap();
        for bad in [f64::INFINITY, f64::NAN] {
            let batch = TerminalValueBatch::from_values(vec![120.0, bad]);
            assert!(matches!(
                price(&batch, &spec, 1.0),
                Err(PricingError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_invalid_spec_rejected() {
        assert!(OptionSpec::call(-1.0, 0.05).is_err());
        assert!(OptionSpec::call(f64::NAN, 0.05).is_err());
        assert!(OptionSpec::put(100.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_std_error() {
        // payoffs 0 and 20: sample sd = sqrt(200), se = sqrt(200 / 2) = 10
        let batch = TerminalValueBatch::from_values(vec![90.0, 120.0]);
        let spec = OptionSpec::call(100.0, 0.0).unwrap();
        let estimate = price_with_error(&batch, &spec, 1.0).unwrap();
        assert_relative_eq!(estimate.price, 10.0);
        assert_relative_eq!(estimate.std_error, 10.0, epsilon = 1e-12);
        assert_eq!(estimate.n_paths, 2);

        let single = TerminalValueBatch::from_values(vec![120.0]);
        assert_eq!(price_with_error(&single, &spec, 1.0).unwrap().std_error, 0.0);
    }

    #[test]
    fn test_strike_monotonicity() {
        let batch = TerminalValueBatch::from_values(vec![70.0, 85.0, 100.0, 115.0, 140.0]);
        let strikes = [60.0, 80.0, 100.0, 120.0, 150.0];
        let calls: Vec<f64> = strikes
            .iter()
            .map(|&k| price(&batch, &OptionSpec::call(k, 0.02).unwrap(), 1.0).unwrap())
            .collect();
        let puts: Vec<f64> = strikes
            .iter()
            .map(|&k| price(&batch, &OptionSpec::put(k, 0.02).unwrap(), 1.0).unwrap())
            .collect();

        assert!(calls.windows(2).all(|w| w[0] >= w[1]));
        assert!(puts.windows(2).all(|w| w[0] <= w[1]));
    }
}
