//! Monte Carlo Value-at-Risk.
//!
//! The simulated batch is read as future portfolio values. The VaR at
//! confidence `c` is the initial value minus the `(1 - c)` percentile of
//! that distribution, using linear interpolation between order statistics.

use pricer_core::math::{percentile, sorted_copy};
use pricer_core::types::{ensure_confidence_level, ensure_finite, PricingError, PricingResult};
use pricer_pricing::mc::{simulate, SimulationParameters, TerminalValueBatch};
use pricer_pricing::rng::PricerRng;

/// Position and confidence level of a VaR query.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RiskSpec {
    position_value: f64,
    confidence_level: f64,
}

impl RiskSpec {
    /// Creates a validated risk query.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `confidence_level` is not strictly inside `(0, 1)` or
    /// `position_value` is non-finite.
    pub fn new(position_value: f64, confidence_level: f64) -> PricingResult<Self> {
        ensure_finite("position value", position_value)?;
        ensure_confidence_level(confidence_level)?;
        Ok(Self {
            position_value,
            confidence_level,
        })
    }

    /// Value of the position today.
    #[inline]
    pub fn position_value(&self) -> f64 {
        self.position_value
    }

    /// Confidence level `c`.
    #[inline]
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }
}

/// Value-at-Risk of `initial_value` given simulated future values.
///
/// Sorts a private copy of the batch; the caller's batch is untouched.
///
/// # Errors
///
/// `InvalidInput` if the batch is empty or `confidence_level` is not strictly
/// inside `(0, 1)`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::TerminalValueBatch;
/// use pricer_risk::var::value_at_risk;
///
/// let batch = TerminalValueBatch::from_values((1..=101).map(|v| v as f64).collect());
/// // 5th percentile of 1..=101 is 6
/// let var = value_at_risk(&batch, 100.0, 0.95).unwrap();
/// assert!((var - 94.0).abs() < 1e-9);
/// ```
pub fn value_at_risk(
    batch: &TerminalValueBatch,
    initial_value: f64,
    confidence_level: f64,
) -> PricingResult<f64> {
    ensure_confidence_level(confidence_level)?;
    if batch.is_empty() {
        return Err(PricingError::invalid_input(
            "cannot estimate value at risk from an empty batch",
        ));
    }

    let sorted = sorted_copy(batch.values());
    let cutoff = percentile(&sorted, (1.0 - confidence_level) * 100.0)?;
    let var = initial_value - cutoff;

    tracing::debug!(
        paths = batch.len(),
        confidence_level,
        cutoff,
        var,
        "reduced simulated values to VaR"
    );

    Ok(var)
}

/// Monte Carlo VaR of a position whose value follows GBM.
///
/// `drift` and `volatility` are per unit of `horizon`; with daily return
/// moments and `horizon = 1.0` this gives a one-day VaR.
///
/// # Examples
///
/// ```rust
/// use pricer_risk::var::{MonteCarloVar, RiskSpec};
///
/// let spec = RiskSpec::new(1e6, 0.95).unwrap();
/// let mut model = MonteCarloVar::new(spec, 0.0005, 0.02, 1.0, 100_000, 42).unwrap();
///
/// let var = model.value_at_risk().unwrap();
/// println!("Value at Risk with the Monte-Carlo simulation: ${:.2}", var);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloVar {
    spec: RiskSpec,
    params: SimulationParameters,
    seed: u64,
    rng: PricerRng,
}

impl MonteCarloVar {
    /// Creates a VaR model.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the position is not positive or the simulation
    /// parameters are invalid.
    pub fn new(
        spec: RiskSpec,
        drift: f64,
        volatility: f64,
        horizon: f64,
        path_count: usize,
        seed: u64,
    ) -> PricingResult<Self> {
        let params =
            SimulationParameters::new(spec.position_value(), drift, volatility, horizon, path_count)?;
        Ok(Self {
            spec,
            params,
            seed,
            rng: PricerRng::from_seed(seed),
        })
    }

    /// The risk query.
    #[inline]
    pub fn spec(&self) -> &RiskSpec {
        &self.spec
    }

    /// The simulation parameters.
    #[inline]
    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Restores the generator to its initial seed.
    pub fn reset(&mut self) {
        self.rng = PricerRng::from_seed(self.seed);
    }

    /// Simulates future position values and reduces them to VaR.
    pub fn value_at_risk(&mut self) -> PricingResult<f64> {
        let batch = simulate(&self.params, &mut self.rng);
        value_at_risk(
            &batch,
            self.spec.position_value(),
            self.spec.confidence_level(),
        )
    }
}
