//! Monte Carlo simulation parameters.
//!
//! [`SimulationParameters`] is immutable once built and is validated at
//! construction, so the simulator itself has no error paths.

use pricer_core::types::{ensure_finite, ensure_positive, PricingError, PricingResult};

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Standard deviations of the normal draw that must map to a representable
/// terminal value.
const TAIL_SIGMAS: f64 = 10.0;

/// Parameters of a single-step GBM terminal simulation.
///
/// # Model
///
/// ```text
/// S(T) = S(0) × exp(T(μ - σ²/2) + σ√T × Z),   Z ~ N(0, 1)
/// ```
///
/// `drift` and `volatility` are expressed per unit of `horizon`: annualised
/// rates with a horizon in years, or daily moments with a horizon in days.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationParameters;
///
/// let params = SimulationParameters::builder()
///     .initial_value(100.0)
///     .drift(0.05)
///     .volatility(0.2)
///     .horizon(1.0)
///     .path_count(10_000)
///     .build()
///     .expect("valid parameters");
///
/// assert_eq!(params.path_count(), 10_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationParameters {
    initial_value: f64,
    drift: f64,
    volatility: f64,
    horizon: f64,
    path_count: usize,
}

impl SimulationParameters {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `initial_value <= 0`, `volatility < 0`,
    /// `horizon <= 0`, `path_count` is 0 or above [`MAX_PATHS`], or any value
    /// is non-finite. Also rejected: parameters whose terminal values
    /// within ten standard deviations of the mean would overflow to infinity
    /// or underflow to zero in `f64`.
    pub fn new(
        initial_value: f64,
        drift: f64,
        volatility: f64,
        horizon: f64,
        path_count: usize,
    ) -> PricingResult<Self> {
        ensure_positive("initial value", initial_value)?;
        ensure_finite("drift", drift)?;
        if !(volatility.is_finite() && volatility >= 0.0) {
            return Err(PricingError::InvalidInput(format!(
                "volatility must be non-negative and finite, got {}",
                volatility
            )));
        }
        ensure_positive("horizon", horizon)?;
        if path_count == 0 || path_count > MAX_PATHS {
            return Err(PricingError::InvalidInput(format!(
                "path count {} must be in range [1, {}]",
                path_count, MAX_PATHS
            )));
        }
        ensure_representable(initial_value, drift, volatility, horizon)?;

        Ok(Self {
            initial_value,
            drift,
            volatility,
            horizon,
            path_count,
        })
    }

    /// Risk-neutral parameters for option pricing: the drift is the
    /// risk-free `rate`.
    pub fn risk_neutral(
        spot: f64,
        rate: f64,
        volatility: f64,
        maturity: f64,
        path_count: usize,
    ) -> PricingResult<Self> {
        Self::new(spot, rate, volatility, maturity, path_count)
    }

    /// Creates a new parameter builder.
    #[inline]
    pub fn builder() -> SimulationParametersBuilder {
        SimulationParametersBuilder::default()
    }

    /// Initial asset (or portfolio) value S(0).
    #[inline]
    pub fn initial_value(&self) -> f64 {
        self.initial_value
    }

    /// Drift μ per unit horizon.
    #[inline]
    pub fn drift(&self) -> f64 {
        self.drift
    }

    /// Volatility σ per square-root unit horizon.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Simulation horizon T.
    #[inline]
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Number of independent paths.
    #[inline]
    pub fn path_count(&self) -> usize {
        self.path_count
    }

    /// Returns `(T(μ - σ²/2), σ√T)`, the deterministic and stochastic
    /// coefficients of the terminal exponent.
    #[inline]
    pub(crate) fn exponent_terms(&self) -> (f64, f64) {
        let sigma = self.volatility;
        (
            self.horizon * (self.drift - 0.5 * sigma * sigma),
            sigma * self.horizon.sqrt(),
        )
    }
}

/// Checks that `ln S(0) ± (|T(μ - σ²/2)| + 10σ√T)` stays inside the
/// normal `f64` exponent range.
fn ensure_representable(
    initial_value: f64,
    drift: f64,
    volatility: f64,
    horizon: f64,
) -> PricingResult<()> {
    let drift_term = horizon * (drift - 0.5 * volatility * volatility);
    let spread = drift_term.abs() + TAIL_SIGMAS * volatility * horizon.sqrt();
    let ln_initial = initial_value.ln();

    let upper_ok = ln_initial + spread < f64::MAX.ln();
    let lower_ok = ln_initial - spread > f64::MIN_POSITIVE.ln();
    if upper_ok && lower_ok {
        Ok(())
    } else {
        Err(PricingError::InvalidInput(format!(
            "terminal values are not representable: exponent spread {} around ln S(0) = {}",
            spread, ln_initial
        )))
    }
}

/// Builder for [`SimulationParameters`].
///
/// `drift` defaults to zero; every other field must be set.
#[derive(Clone, Debug, Default)]
pub struct SimulationParametersBuilder {
    initial_value: Option<f64>,
    drift: f64,
    volatility: Option<f64>,
    horizon: Option<f64>,
    path_count: Option<usize>,
}

impl SimulationParametersBuilder {
    /// Sets the initial value S(0).
    #[inline]
    pub fn initial_value(mut self, initial_value: f64) -> Self {
        self.initial_value = Some(initial_value);
        self
    }

    /// Sets the drift μ.
    #[inline]
    pub fn drift(mut self, drift: f64) -> Self {
        self.drift = drift;
        self
    }

    /// Sets the volatility σ.
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the horizon T.
    #[inline]
    pub fn horizon(mut self, horizon: f64) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// Sets the number of paths.
    #[inline]
    pub fn path_count(mut self, path_count: usize) -> Self {
        self.path_count = Some(path_count);
        self
    }

    /// Builds and validates the parameters.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if a required field is missing or any value is invalid
    /// (see [`SimulationParameters::new`]).
    pub fn build(self) -> PricingResult<SimulationParameters> {
        fn missing(name: &str) -> PricingError {
            PricingError::InvalidInput(format!("{} must be specified", name))
        }

        SimulationParameters::new(
            self.initial_value.ok_or_else(|| missing("initial_value"))?,
            self.drift,
            self.volatility.ok_or_else(|| missing("volatility"))?,
            self.horizon.ok_or_else(|| missing("horizon"))?,
            self.path_count.ok_or_else(|| missing("path_count"))?,
        )
    }
}
